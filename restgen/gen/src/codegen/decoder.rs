//! Response decoding synthesis.
//!
//! After the request is sent, the generated method reads the whole body and
//! dispatches on the status code:
//!
//! - expected or alternative status: decode the body into the primary type
//!   (skipped for 204/304 when the resource allows them), read output
//!   headers, return.
//! - anything else: decode a best-effort [`ResourceError`] and return it.
//!
//! [`ResourceError`]: https://docs.rs/restgen-runtime

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use restgen_define::{Resource, StatusCode};

use crate::codegen::fragment::{Fragment, RuntimeItem};
use crate::codegen::signature::ReturnShape;

/// The status codes a resource accepts and what they imply for decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodePlan {
    /// Accepted statuses, expected first, without duplicates.
    pub statuses: Vec<StatusCode>,
    /// Expected is 204 and nothing else is accepted: there is no data value.
    pub no_content: bool,
    pub could_be_no_content: bool,
    pub could_be_not_modified: bool,
}

impl DecodePlan {
    pub fn new(resource: &Resource) -> Self {
        let mut statuses = vec![resource.expected];
        for status in &resource.alternatives {
            if !statuses.contains(status) {
                statuses.push(*status);
            }
        }
        Self {
            no_content: resource.expected == StatusCode::NoContent
                && resource.alternatives.is_empty(),
            could_be_no_content: statuses.contains(&StatusCode::NoContent),
            could_be_not_modified: statuses.contains(&StatusCode::NotModified),
            statuses,
        }
    }

    /// A success response may carry no body to decode.
    pub fn body_optional(&self) -> bool {
        self.could_be_no_content || self.could_be_not_modified
    }

    /// Human-readable list of accepted statuses, e.g. `` `200 OK` or `304 Not Modified` ``.
    pub fn describe(&self) -> String {
        self.statuses
            .iter()
            .map(|s| format!("`{} {}`", s.code(), s.reason()))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Generates the statements that turn `resp` into the method's result.
pub fn synthesize_decode(plan: &DecodePlan, shape: &ReturnShape) -> Fragment {
    let mut fragment = Fragment::default()
        .with_runtime(RuntimeItem::ClientError)
        .with_runtime(RuntimeItem::ResourceError);

    let codes = plan
        .statuses
        .iter()
        .map(|s| Literal::u16_unsuffixed(s.code()));

    let capture_headers = if shape.outputs.is_empty() {
        TokenStream::new()
    } else {
        quote! { let resp_headers = resp.headers().clone(); }
    };

    let decode_primary = match &shape.primary {
        None => TokenStream::new(),
        Some(ty) if plan.body_optional() => {
            let mut skips = Vec::new();
            if plan.could_be_no_content {
                skips.push(quote!(status != 204));
            }
            if plan.could_be_not_modified {
                skips.push(quote!(status != 304));
            }
            let decodes = skips
                .into_iter()
                .reduce(|left, right| quote!(#left && #right));
            quote! {
                let data: Option<#ty> = if #decodes {
                    Some(serde_json::from_slice(&content).map_err(ClientError::Decode)?)
                } else {
                    None
                };
            }
        }
        Some(ty) => quote! {
            let data: #ty = serde_json::from_slice(&content).map_err(ClientError::Decode)?;
        },
    };

    let outputs = shape.outputs.iter().map(|output| {
        let ident = &output.ident;
        let header = &output.header;
        if output.is_string {
            fragment.runtime.insert(RuntimeItem::HeaderValue);
            quote! { let #ident = header_value(&resp_headers, #header); }
        } else {
            fragment.runtime.insert(RuntimeItem::ParseHeaderValue);
            let ty = &output.ty;
            quote! { let #ident = parse_header_value::<#ty>(&resp_headers, #header); }
        }
    });
    let outputs: Vec<_> = outputs.collect();
    let ok_value = shape.ok_value();

    fragment.tokens = quote! {
        let status = resp.status().as_u16();
        #capture_headers
        let content = resp.bytes().await.map_err(ClientError::BodyRead)?;
        match status {
            #(#codes)|* => {
                #decode_primary
                #(#outputs)*
                Ok(#ok_value)
            }
            _ => {
                let mut errobj: ResourceError =
                    serde_json::from_slice(&content).unwrap_or_default();
                if errobj.code == 0 {
                    errobj.code = i32::from(status);
                }
                if errobj.message.is_empty() {
                    errobj.message = String::from_utf8_lossy(&content).into_owned();
                }
                Err(ClientError::Resource(errobj))
            }
        }
    };
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorOptions;
    use crate::resolver::TypeResolver;
    use crate::test_utils::{contacts_schema, format_statements, resource};

    fn decode_code(json: &str) -> (String, Fragment) {
        let schema = contacts_schema();
        let options = GeneratorOptions::default();
        let resolver = TypeResolver::new(&schema, &options);
        let resource = resource(json);
        let plan = DecodePlan::new(&resource);
        let shape = ReturnShape::resolve(&resolver, &resource, "test", &plan).unwrap();
        let fragment = synthesize_decode(&plan, &shape);
        (format_statements(&fragment.tokens), fragment)
    }

    #[test]
    fn plan_collects_statuses_in_order() {
        let resource = resource(
            r#"{"method": "POST", "path": "/c", "expected": "CREATED",
                "alternatives": ["OK", "CREATED", "NO_CONTENT"]}"#,
        );
        let plan = DecodePlan::new(&resource);
        assert_eq!(
            plan.statuses,
            vec![StatusCode::Created, StatusCode::Ok, StatusCode::NoContent]
        );
        assert!(plan.could_be_no_content);
        assert!(!plan.could_be_not_modified);
        assert!(!plan.no_content);
        assert_eq!(
            plan.describe(),
            "`201 Created` or `200 OK` or `204 No Content`"
        );
    }

    #[test]
    fn plan_no_content_only_without_alternatives() {
        let plan = DecodePlan::new(&resource(
            r#"{"method": "DELETE", "path": "/c", "expected": "NO_CONTENT"}"#,
        ));
        assert!(plan.no_content);
        let plan = DecodePlan::new(&resource(
            r#"{"method": "DELETE", "path": "/c", "expected": "NO_CONTENT", "alternatives": ["OK"]}"#,
        ));
        assert!(!plan.no_content);
    }

    #[test]
    fn unconditional_decode() {
        let (code, _) = decode_code(r#"{"type": "Contact", "method": "GET", "path": "/c"}"#);
        assert!(code.contains("200 => {"));
        assert!(code.contains("let data: Contact = serde_json::from_slice(&content)"));
        assert!(code.contains("Ok(data)"));
        assert!(!code.contains("resp_headers"));
    }

    #[test]
    fn not_modified_skips_decode() {
        let (code, _) = decode_code(
            r#"{"type": "Contact", "method": "GET", "path": "/c", "alternatives": ["NOT_MODIFIED"]}"#,
        );
        assert!(code.contains("200 | 304 => {"));
        assert!(code.contains("let data: Option<Contact> = if status != 304 {"));
    }

    #[test]
    fn both_empty_statuses_skip_decode() {
        let (code, _) = decode_code(
            r#"{"type": "Contact", "method": "POST", "path": "/c",
                "alternatives": ["NO_CONTENT", "NOT_MODIFIED"]}"#,
        );
        assert!(code.contains("if status != 204 && status != 304 {"));
    }

    #[test]
    fn error_fallback_substitutes_status_and_body() {
        let (code, fragment) =
            decode_code(r#"{"type": "Contact", "method": "GET", "path": "/c"}"#);
        assert!(code.contains("_ => {"));
        assert!(code.contains("let mut errobj: ResourceError"));
        assert!(code.contains("unwrap_or_default()"));
        assert!(code.contains("errobj.code = i32::from(status);"));
        assert!(code.contains("errobj.message = String::from_utf8_lossy(&content).into_owned();"));
        assert!(code.contains("Err(ClientError::Resource(errobj))"));
        assert!(fragment.runtime.contains(&RuntimeItem::ResourceError));
    }

    #[test]
    fn no_content_returns_unit() {
        let (code, _) = decode_code(
            r#"{"type": "Contact", "method": "DELETE", "path": "/c", "expected": "NO_CONTENT"}"#,
        );
        assert!(code.contains("204 => Ok(())") || code.contains("204 => {\n"));
        assert!(!code.contains("let data"));
        assert!(code.contains("Ok(())"));
    }

    #[test]
    fn output_headers_are_read() {
        let (code, fragment) = decode_code(
            r#"{
                "type": "Contact", "method": "GET", "path": "/c",
                "outputs": [
                    {"name": "tag", "type": "String", "header": "ETag"},
                    {"name": "revision", "type": "Int64", "header": "X-Revision"}
                ]
            }"#,
        );
        assert!(code.contains("let resp_headers = resp.headers().clone();"));
        assert!(code.contains(r#"let tag = header_value(&resp_headers, "ETag");"#));
        assert!(code.contains(
            r#"let revision = parse_header_value::<i64>(&resp_headers, "X-Revision");"#
        ));
        assert!(code.contains("Ok((data, tag, revision))"));
        assert!(fragment.runtime.contains(&RuntimeItem::HeaderValue));
        assert!(fragment.runtime.contains(&RuntimeItem::ParseHeaderValue));
    }
}
