//! Query parameter encoder helpers.
//!
//! Each helper returns either an empty string or one `&key=value` fragment.
//! Only the helpers some resource references are emitted.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::codegen::fragment::{Fragment, Helper, RuntimeItem};

/// Generates the module-level functions for the requested helpers.
pub fn generate_encoders(helpers: &BTreeSet<Helper>) -> Fragment {
    let mut fragment = Fragment::default();
    let mut items = Vec::new();
    for helper in helpers {
        let ident = helper.ident();
        let item = match *helper {
            Helper::ElidingString => {
                fragment.runtime.insert(RuntimeItem::QueryEscape);
                quote! {
                    fn #ident(name: &str, val: &str, def: &str) -> String {
                        if val == def {
                            String::new()
                        } else {
                            format!("&{}={}", name, query_escape(val))
                        }
                    }
                }
            }
            Helper::Eliding(kind) => {
                let ty = kind.primitive();
                quote! {
                    fn #ident(name: &str, val: #ty, def: #ty) -> String {
                        if val == def {
                            String::new()
                        } else {
                            format!("&{}={}", name, val)
                        }
                    }
                }
            }
            Helper::Optional(kind) => {
                let ty = kind.primitive();
                quote! {
                    fn #ident(name: &str, val: Option<#ty>) -> String {
                        match val {
                            Some(val) => format!("&{}={}", name, val),
                            None => String::new(),
                        }
                    }
                }
            }
            Helper::OptionalEnum => {
                fragment.runtime.insert(RuntimeItem::QueryEscape);
                quote! {
                    fn #ident<T: std::fmt::Display>(name: &str, val: Option<T>) -> String {
                        match val {
                            Some(val) => format!("&{}={}", name, query_escape(&val.to_string())),
                            None => String::new(),
                        }
                    }
                }
            }
            Helper::Params => params(),
            Helper::Http(_) => continue,
        };
        items.push(item);
    }
    fragment.tokens = quote!(#(#items)*);
    fragment
}

fn params() -> TokenStream {
    quote! {
        /// Joins query fragments, turning the leading `&` into `?`.
        fn encode_params(params: &[String]) -> String {
            let query = params.concat();
            match query.strip_prefix('&') {
                Some(rest) => format!("?{}", rest),
                None => query,
            }
        }
    }
}
