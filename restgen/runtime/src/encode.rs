//! Query string encoding shared by generated clients.
//!
//! Every fragment has the form `&key=value`. The generated `encode_params`
//! joins fragments and turns the leading `&` into `?`.

use std::fmt::Display;

/// Form-encodes a query value; spaces become `+`.
pub fn query_escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes a list-valued parameter, repeating the key once per element.
///
/// An empty list contributes nothing.
///
/// ## Examples
///
/// ```
/// use restgen_runtime::encode_list_param;
///
/// assert_eq!(encode_list_param("id", &[1, 2, 3]), "&id=1&id=2&id=3");
/// assert_eq!(encode_list_param::<&str>("id", &[]), "");
/// ```
pub fn encode_list_param<T: Display>(name: &str, values: &[T]) -> String {
    values
        .iter()
        .map(|value| format!("&{}={}", name, query_escape(&value.to_string())))
        .collect()
}
