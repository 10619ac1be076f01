//! Restgen Schema Library
//!
//! This crate provides the types that describe a REST service schema: its
//! resources, their inputs and outputs, and the named types they refer to.
//! Schemas are consumed by `restgen-gen` to emit a typed Rust client.
//!
//! ## Core Types
//!
//! - [`Schema`] - A service: name, namespace, version, types and resources
//! - [`Resource`] - One HTTP operation (method, path template, inputs, outputs)
//! - [`Input`] - A parameter routed to the path, query, a header or the body
//! - [`Output`] - A value read back from a response header
//! - [`RestMethod`] - HTTP methods (GET, PUT, POST, DELETE, PATCH)
//! - [`StatusCode`] - Symbolic HTTP status names (`OK`, `NO_CONTENT`, ...)
//! - [`TypeDef`] - A named type (alias, struct, enum, array, map)
//! - [`TypeRegistry`] - Resolves type names to their [`BaseType`]
//!
//! ## Examples
//!
//! ```
//! use restgen_define::{BaseType, Schema, TypeRegistry};
//!
//! let schema = Schema::from_json_str(r#"{
//!     "name": "Contacts",
//!     "types": [
//!         {"StringTypeDef": {"type": "String", "name": "ContactId"}}
//!     ],
//!     "resources": [
//!         {
//!             "type": "String",
//!             "method": "GET",
//!             "path": "/contacts/{id}",
//!             "inputs": [{"name": "id", "type": "ContactId", "pathParam": true}]
//!         }
//!     ]
//! }"#).unwrap();
//!
//! let registry = TypeRegistry::new(&schema);
//! assert_eq!(registry.base_type("ContactId").unwrap(), BaseType::String);
//! assert_eq!(schema.resources.len(), 1);
//! ```

pub mod error;
pub mod registry;
pub mod typedef;
pub mod types;

pub use error::DefineError;
pub use registry::{BaseType, TypeRegistry};
pub use typedef::{
    AliasDef, ArrayDef, EnumDef, EnumElement, MapDef, StructDef, StructField, TypeDef,
};
pub use types::{Input, InputRole, Output, Resource, RestMethod, Schema, StatusCode};
