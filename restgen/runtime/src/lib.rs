//! Runtime support for clients emitted by `restgen`.
//!
//! Generated client modules import a handful of items from this crate
//! instead of carrying them inline:
//!
//! - [`ClientError`] - Everything a generated method can fail with
//! - [`ResourceError`] - The `{code, message}` body of a non-expected response
//! - [`encode_list_param`] / [`query_escape`] - Query string encoding
//! - [`header_value`] / [`parse_header_value`] - Case-insensitive response header reads
//!
//! ## Examples
//!
//! ```
//! use restgen_runtime::{encode_list_param, query_escape};
//!
//! assert_eq!(query_escape("a b&c"), "a+b%26c");
//! assert_eq!(encode_list_param("tag", &["x", "y"]), "&tag=x&tag=y");
//! ```

pub mod encode;
pub mod error;
pub mod headers;

pub use encode::{encode_list_param, query_escape};
pub use error::{ClientError, ResourceError};
pub use headers::{fold_header_name, header_value, parse_header_value};
