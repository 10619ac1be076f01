//! Per-resource method synthesis.
//!
//! Combines the URL, header list, body marshalling, transport call and
//! response decoding of one resource into a single `pub async fn`.

use proc_macro2::TokenStream;
use quote::quote;
use restgen_define::{InputRole, Resource};
use tracing::{debug, warn};

use crate::codegen::decoder::{DecodePlan, synthesize_decode};
use crate::codegen::fragment::{Fragment, Helper, RuntimeItem};
use crate::codegen::signature::{MethodSignature, header_list};
use crate::codegen::url::synthesize_url;
use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver::TypeResolver;

/// Generates the client method for `resource`.
pub fn synthesize_method(
    resolver: &TypeResolver<'_>,
    resource: &Resource,
) -> Result<Fragment, GeneratorError> {
    let name = naming::method_name(resource);
    let plan = DecodePlan::new(resource);
    let signature = MethodSignature::resolve(resolver, resource, &name, &plan)?;
    debug!(
        method = %name,
        http = %resource.method,
        path = %resource.path,
        statuses = plan.statuses.len(),
        "synthesizing resource method"
    );

    let mut fragment = Fragment::default()
        .with_helper(Helper::Http(resource.method))
        .with_runtime(RuntimeItem::ClientError);

    let url = fragment.absorb(synthesize_url(resolver, resource, &name)?);
    let (headers, headers_arg) = header_list(resolver, resource, &name)?;
    let body = marshal_body(resource, &name);
    let decode = fragment.absorb(synthesize_decode(&plan, &signature.shape));

    let helper = Helper::Http(resource.method).ident();
    let call = if resource.method.has_body() {
        quote! { let resp = self.#helper(&url, #headers_arg, body).await?; }
    } else {
        quote! { let resp = self.#helper(&url, #headers_arg).await?; }
    };

    let docs = doc_lines(resource, &plan);
    let sig = signature.tokens();
    fragment.tokens = quote! {
        #(#[doc = #docs])*
        #sig {
            #url
            #headers
            #body
            #call
            #decode
        }
    };
    Ok(fragment)
}

/// Binds `body` for methods that send one.
///
/// The first body candidate is serialized; further candidates are ignored.
fn marshal_body(resource: &Resource, name: &str) -> TokenStream {
    let candidates: Vec<_> = resource
        .inputs
        .iter()
        .filter(|input| input.role() == InputRole::Body)
        .collect();

    if !resource.method.has_body() {
        if let Some(input) = candidates.first() {
            warn!(
                method = %name,
                input = %input.name,
                "{} does not send a body; input ignored",
                resource.method
            );
        }
        return TokenStream::new();
    }

    for extra in candidates.iter().skip(1) {
        warn!(
            method = %name,
            input = %extra.name,
            "more than one body input; only the first is sent"
        );
    }
    match candidates.first() {
        Some(input) => {
            let ident = naming::param_ident(&input.name);
            quote! {
                let body = serde_json::to_vec(&#ident).map_err(ClientError::Marshal)?;
            }
        }
        None => {
            warn!(
                method = %name,
                "{} without a body input; sending an empty body",
                resource.method
            );
            quote! { let body = Vec::new(); }
        }
    }
}

fn doc_lines(resource: &Resource, plan: &DecodePlan) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(comment) = resource.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        lines.extend(comment.lines().map(|line| format!(" {}", line.trim_end())));
        lines.push(String::new());
    }
    lines.push(format!(" `{} {}`", resource.method, resource.path));
    lines.push(String::new());
    lines.push(format!(" Succeeds on {}.", plan.describe()));
    lines
}
