//! Identifier conventions for generated code.
//!
//! Schema names are free-form; everything emitted goes through these
//! helpers so the same schema name always maps to the same Rust identifier.

use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span};
use quote::format_ident;
use restgen_define::Resource;

/// Keywords usable as raw identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Local variable names used inside generated methods.
const METHOD_LOCALS: &[&str] = &[
    "body",
    "content",
    "data",
    "errobj",
    "headers",
    "resp",
    "resp_headers",
    "status",
    "url",
];

pub fn snake_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

pub fn pascal_case(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Turns an already-cased name into an identifier, escaping keywords.
///
/// ## Examples
///
/// ```
/// use restgen_gen::naming::ident;
///
/// assert_eq!(ident("limit").to_string(), "limit");
/// assert_eq!(ident("type").to_string(), "r#type");
/// assert_eq!(ident("self").to_string(), "self_");
/// assert_eq!(ident("3d").to_string(), "_3d");
/// ```
pub fn ident(name: &str) -> Ident {
    if name.is_empty() {
        return format_ident!("_unnamed");
    }
    if PATH_KEYWORDS.contains(&name) {
        return format_ident!("{}_", name);
    }
    if KEYWORDS.contains(&name) {
        return Ident::new_raw(name, Span::call_site());
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format_ident!("_{}", name);
    }
    format_ident!("{}", name)
}

/// Identifier for a struct field.
pub fn field_ident(name: &str) -> Ident {
    ident(&snake_case(name))
}

/// Identifier for a named type.
pub fn type_ident(name: &str) -> Ident {
    ident(&pascal_case(name))
}

/// Identifier for a method parameter or output binding.
///
/// Names that would shadow the generated method's locals get a trailing `_`.
pub fn param_ident(name: &str) -> Ident {
    let snake = snake_case(name);
    if METHOD_LOCALS.contains(&snake.as_str()) {
        return format_ident!("{}_", snake);
    }
    ident(&snake)
}

/// Identifier for an enum variant.
///
/// With `prefix_enums` the enum name is prepended (`Color::ColorRed`).
pub fn variant_ident(enum_name: &str, symbol: &str, prefix_enums: bool) -> Ident {
    if prefix_enums {
        type_ident(&format!("{}_{}", enum_name, symbol))
    } else {
        type_ident(symbol)
    }
}

/// Name of the client struct.
pub fn client_ident(schema_name: &str) -> Ident {
    format_ident!("{}Client", pascal_case(schema_name))
}

/// Snake-case method name for a resource.
///
/// An explicit `name` wins. Otherwise the lowercase HTTP method is joined
/// with the resource type, or the body input's type when there is none.
///
/// ## Examples
///
/// ```
/// use restgen_define::Resource;
/// use restgen_gen::naming::method_name;
///
/// let resource: Resource = serde_json::from_str(
///     r#"{"type": "ContactList", "method": "GET", "path": "/contacts"}"#,
/// ).unwrap();
/// assert_eq!(method_name(&resource), "get_contact_list");
///
/// let resource: Resource = serde_json::from_str(
///     r#"{"method": "PUT", "path": "/contacts/{id}", "name": "replaceContact"}"#,
/// ).unwrap();
/// assert_eq!(method_name(&resource), "replace_contact");
/// ```
pub fn method_name(resource: &Resource) -> String {
    if let Some(name) = resource.name.as_deref().filter(|n| !n.is_empty()) {
        return snake_case(name);
    }
    let subject = resource
        .type_name
        .as_deref()
        .or_else(|| resource.body_input().map(|input| input.type_name.as_str()))
        .unwrap_or_default();
    snake_case(&format!(
        "{}{}",
        resource.method.to_string().to_lowercase(),
        pascal_case(subject)
    ))
}
