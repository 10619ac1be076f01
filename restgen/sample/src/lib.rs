//! Contacts service client, generated by `restgen` at build time.
//!
//! The client is produced from `schema/contacts.json` by `build.rs`; see the
//! generated [`contacts`] module for the types and methods.
//!
//! ## Examples
//!
//! ```no_run
//! use restgen_sample::contacts::ContactsClient;
//!
//! # async fn run() -> Result<(), restgen_runtime::ClientError> {
//! let mut client = ContactsClient::new("https://contacts.example.com/v1");
//! client.add_credentials("Cookie.session", "s3cr3t");
//!
//! let (contact, etag) = client.get_contact("42", "").await?;
//! println!("{:?} {}", contact, etag);
//! # Ok(())
//! # }
//! ```

include!(concat!(env!("OUT_DIR"), "/contacts_client.rs"));

pub use restgen_runtime::{ClientError, ResourceError};
