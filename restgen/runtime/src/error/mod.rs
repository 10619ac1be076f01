//! Error types returned by generated clients.

mod client_error;
mod resource_error;

pub use client_error::ClientError;
pub use resource_error::ResourceError;
