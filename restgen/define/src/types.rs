//! Core types for service schemas.
//!
//! This module provides the fundamental types for describing a REST service:
//!
//! - [`Schema`] - The top-level service definition
//! - [`Resource`] - Individual HTTP operations
//! - [`Input`] / [`Output`] - Parameters and response-header values
//! - [`RestMethod`] - HTTP method enumeration
//! - [`StatusCode`] - Symbolic HTTP status names

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::DefineError;
use crate::typedef::TypeDef;

/// HTTP methods a resource may use.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use restgen_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("PATCH").unwrap(), RestMethod::Patch);
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// assert!(RestMethod::Put.has_body());
/// assert!(!RestMethod::Get.has_body());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP PATCH - Partially update a resource
    Patch,
}

impl RestMethod {
    /// Returns `true` for methods that carry a JSON request body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Put | Self::Post | Self::Patch)
    }
}

/// Symbolic HTTP status names used by `expected` and `alternatives`.
///
/// Schemas refer to statuses by name (`"NO_CONTENT"`); [`StatusCode::code`]
/// gives the numeric value the generated client dispatches on.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use restgen_define::StatusCode;
///
/// let status = StatusCode::from_str("NOT_MODIFIED").unwrap();
/// assert_eq!(status, StatusCode::NotModified);
/// assert_eq!(status.code(), 304);
/// assert_eq!(StatusCode::default(), StatusCode::Ok);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    #[default]
    Ok,
    Created,
    Accepted,
    NoContent,
    MovedPermanently,
    Found,
    SeeOther,
    NotModified,
    TemporaryRedirect,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Gone,
    PreconditionFailed,
    UnsupportedMediaType,
    InternalServerError,
    NotImplemented,
    ServiceUnavailable,
}

impl StatusCode {
    /// The numeric HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::Accepted => 202,
            Self::NoContent => 204,
            Self::MovedPermanently => 301,
            Self::Found => 302,
            Self::SeeOther => 303,
            Self::NotModified => 304,
            Self::TemporaryRedirect => 307,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Gone => 410,
            Self::PreconditionFailed => 412,
            Self::UnsupportedMediaType => 415,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
            Self::ServiceUnavailable => 503,
        }
    }

    /// The standard reason phrase, e.g. `Not Modified`.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::Accepted => "Accepted",
            Self::NoContent => "No Content",
            Self::MovedPermanently => "Moved Permanently",
            Self::Found => "Found",
            Self::SeeOther => "See Other",
            Self::NotModified => "Not Modified",
            Self::TemporaryRedirect => "Temporary Redirect",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::PreconditionFailed => "Precondition Failed",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
            Self::ServiceUnavailable => "Service Unavailable",
        }
    }
}

/// A complete service schema.
///
/// Loaded once per generation run and read-only afterwards.
///
/// ## Examples
///
/// ```
/// use restgen_define::Schema;
///
/// let schema = Schema::from_json_str(r#"{"name": "Empty", "version": 2}"#).unwrap();
/// assert_eq!(schema.name, "Empty");
/// assert_eq!(schema.version, Some(2));
/// assert!(schema.resources.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Service name; the generated client is named `<Name>Client`.
    pub name: String,
    /// Dotted namespace (e.g. `com.example.contacts`).
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Named types, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDef>,
    /// Resources, in declaration order. Methods are emitted in this order.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Schema {
    /// Parses a schema from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, DefineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a schema file.
    pub fn from_json_file(path: &Path) -> Result<Self, DefineError> {
        let contents = fs::read_to_string(path).map_err(|source| DefineError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// One HTTP operation of the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Primary response type. `None` means the response body is never decoded.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    pub method: RestMethod,
    /// Path template with `{name}` placeholders.
    pub path: String,
    /// Explicit method name; derived from method and type when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
    #[serde(default)]
    pub expected: StatusCode,
    #[serde(default)]
    pub alternatives: Vec<StatusCode>,
}

impl Resource {
    /// The first input not routed to the path, query or a header.
    pub fn body_input(&self) -> Option<&Input> {
        self.inputs.iter().find(|input| input.role() == InputRole::Body)
    }
}

/// Where an [`Input`] is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole<'a> {
    /// Substituted into the path template.
    Path,
    /// Appended to the query string under this key.
    Query(&'a str),
    /// Sent as a request header with this name.
    Header(&'a str),
    /// Not routed anywhere else; a body candidate.
    Body,
}

/// A declared parameter of a [`Resource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub path_param: bool,
    /// External query key.
    #[serde(default)]
    pub query_param: Option<String>,
    /// External header name.
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub optional: bool,
    /// Declared default literal.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

impl Input {
    /// Returns the role of this input. Empty query keys and header names count as absent.
    ///
    /// ## Examples
    ///
    /// ```
    /// use restgen_define::{Input, InputRole};
    ///
    /// let input: Input = serde_json::from_str(
    ///     r#"{"name": "limit", "type": "Int32", "queryParam": "max"}"#,
    /// ).unwrap();
    /// assert_eq!(input.role(), InputRole::Query("max"));
    /// ```
    pub fn role(&self) -> InputRole<'_> {
        if self.path_param {
            return InputRole::Path;
        }
        if let Some(key) = self.query_param.as_deref().filter(|k| !k.is_empty()) {
            return InputRole::Query(key);
        }
        if let Some(header) = self.header.as_deref().filter(|h| !h.is_empty()) {
            return InputRole::Header(header);
        }
        InputRole::Body
    }
}

/// A value extracted from a response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub header: String,
    #[serde(default)]
    pub comment: Option<String>,
}
