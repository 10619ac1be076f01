//! Code generation for restgen clients.
//!
//! Each submodule synthesizes one part of the emitted module. Synthesis
//! steps return a [`Fragment`]: tokens plus the helpers and runtime imports
//! they need, merged by [`crate::output`].
//!
//! ## Submodules
//!
//! - [`params`] - Query parameter encoding policy
//! - [`url`] - Request URL synthesis
//! - [`signature`] - Method parameters, return shape and header list
//! - [`decoder`] - Response status dispatch and body decoding
//! - [`method`] - One `pub async fn` per resource
//! - [`client`] - The client struct and transport helpers
//! - [`encoders`] - Query encoder helper functions
//! - [`models`] - Structs, enums and aliases from the schema's types
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style

pub mod client;
pub mod decoder;
pub mod encoders;
pub mod fragment;
pub mod method;
pub mod models;
pub mod params;
pub mod signature;
pub mod url;

pub use client::{RESERVED_METHODS, generate_client_struct};
pub use decoder::{DecodePlan, synthesize_decode};
pub use encoders::generate_encoders;
pub use fragment::{Fragment, Helper, RuntimeItem};
pub use method::synthesize_method;
pub use models::generate_models;
pub use params::{DefaultValue, Encoding, choose_encoding, encode_query_param};
pub use signature::{MethodSignature, ReturnShape, header_list};
pub use url::synthesize_url;
