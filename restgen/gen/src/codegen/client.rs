//! Client struct generation.
//!
//! Emits `<Name>Client` with its constructors, the credentials mutator and
//! the `http_<method>` transport helpers the resource methods call.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use restgen_define::{RestMethod, Schema};

use crate::codegen::fragment::Helper;
use crate::naming;

/// Names of the methods generated on every client, plus every transport helper.
pub const RESERVED_METHODS: &[&str] = &[
    "new",
    "with_transport",
    "add_credentials",
    "build_request",
    "http_get",
    "http_put",
    "http_post",
    "http_delete",
    "http_patch",
];

/// Generates the client struct and its non-resource methods.
///
/// Only the transport helpers named in `helpers` are emitted.
///
/// ## Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use restgen_define::Schema;
/// use restgen_gen::codegen::generate_client_struct;
///
/// let schema = Schema::from_json_str(r#"{"name": "Contacts"}"#).unwrap();
/// let tokens = generate_client_struct(&schema, &BTreeSet::new()).to_string();
/// assert!(tokens.contains("pub struct ContactsClient"));
/// assert!(!tokens.contains("build_request"));
/// ```
pub fn generate_client_struct(schema: &Schema, helpers: &BTreeSet<Helper>) -> TokenStream {
    let client = naming::client_ident(&schema.name);
    let doc = format!(" Client for the {} service.", schema.name);

    let transports: Vec<TokenStream> = helpers
        .iter()
        .filter_map(|helper| match helper {
            Helper::Http(method) => Some(transport_helper(*method)),
            _ => None,
        })
        .collect();
    let build_request = if transports.is_empty() {
        TokenStream::new()
    } else {
        build_request()
    };

    quote! {
        #[doc = #doc]
        ///
        /// Cloning is cheap; clones share the connection pool. Credentials are
        /// set through `&mut self`, so set them before sharing the client
        /// across tasks.
        #[derive(Debug, Clone)]
        pub struct #client {
            /// Base URL every resource path is appended to.
            pub url: String,
            pub transport: reqwest::Client,
            pub creds_header: Option<String>,
            pub creds_token: Option<String>,
            /// Per-request timeout; `None` uses the transport's own.
            pub timeout: Option<std::time::Duration>,
        }

        impl #client {
            /// Creates a client with a default transport.
            pub fn new(url: impl Into<String>) -> Self {
                Self::with_transport(url, reqwest::Client::new())
            }

            /// Creates a client that sends requests through `transport`.
            pub fn with_transport(url: impl Into<String>, transport: reqwest::Client) -> Self {
                Self {
                    url: url.into(),
                    transport,
                    creds_header: None,
                    creds_token: None,
                    timeout: None,
                }
            }

            /// Sends `token` in `header` on every request.
            ///
            /// A header named `Cookie.<name>` is sent as the cookie `<name>=<token>`.
            pub fn add_credentials(&mut self, header: impl Into<String>, token: impl Into<String>) {
                self.creds_header = Some(header.into());
                self.creds_token = Some(token.into());
            }

            #build_request

            #(#transports)*
        }
    }
}

fn build_request() -> TokenStream {
    quote! {
        fn build_request(
            &self,
            method: reqwest::Method,
            url: &str,
            headers: &[(&str, String)],
        ) -> reqwest::RequestBuilder {
            let mut req = self.transport.request(method, url);
            if let Some(timeout) = self.timeout {
                req = req.timeout(timeout);
            }
            if let (Some(header), Some(token)) = (&self.creds_header, &self.creds_token) {
                req = match header.strip_prefix("Cookie.") {
                    Some(name) => {
                        req.header(reqwest::header::COOKIE, format!("{}={}", name, token))
                    }
                    None => req.header(header.as_str(), token.as_str()),
                };
            }
            for (name, value) in headers {
                req = req.header(*name, value.as_str());
            }
            req
        }
    }
}

fn transport_helper(method: RestMethod) -> TokenStream {
    let ident = Helper::Http(method).ident();
    let verb = format_ident!("{}", method.to_string());
    if method.has_body() {
        quote! {
            async fn #ident(
                &self,
                url: &str,
                headers: &[(&str, String)],
                body: Vec<u8>,
            ) -> Result<reqwest::Response, ClientError> {
                self.build_request(reqwest::Method::#verb, url, headers)
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .send()
                    .await
                    .map_err(ClientError::Transport)
            }
        }
    } else {
        quote! {
            async fn #ident(
                &self,
                url: &str,
                headers: &[(&str, String)],
            ) -> Result<reqwest::Response, ClientError> {
                self.build_request(reqwest::Method::#verb, url, headers)
                    .send()
                    .await
                    .map_err(ClientError::Transport)
            }
        }
    }
}
