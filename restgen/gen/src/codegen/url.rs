//! Request URL synthesis.
//!
//! Produces a `let url = format!(..);` statement: path placeholders are
//! replaced by their parameters verbatim, and query inputs are appended in
//! declaration order through `encode_params`.

use quote::quote;
use restgen_define::{Input, InputRole, Resource};

use crate::codegen::fragment::{Fragment, Helper};
use crate::codegen::params::encode_query_param;
use crate::errors::GeneratorError;
use crate::naming;
use crate::parser::{PathSegment, parse_path_template};
use crate::resolver::TypeResolver;

/// Builds the URL statement for a resource.
///
/// Path values are not escaped.
pub fn synthesize_url(
    resolver: &TypeResolver<'_>,
    resource: &Resource,
    resource_name: &str,
) -> Result<Fragment, GeneratorError> {
    let mut fragment = Fragment::default();
    let mut format_str = String::from("{}");
    let mut args = vec![quote!(self.url)];

    for segment in parse_path_template(&resource.path) {
        match segment {
            PathSegment::Literal(text) => {
                format_str.push_str(&text.replace('{', "{{").replace('}', "}}"));
            }
            PathSegment::Param(name) => {
                let input = path_input(resource, name).ok_or_else(|| {
                    GeneratorError::UnboundPathParam {
                        resource: resource_name.to_string(),
                        param: name.to_string(),
                    }
                })?;
                let ident = naming::param_ident(&input.name);
                format_str.push_str("{}");
                args.push(quote!(#ident));
            }
        }
    }

    let mut query = Vec::new();
    for input in &resource.inputs {
        if let InputRole::Query(_) = input.role() {
            let ident = naming::param_ident(&input.name);
            let encoded = encode_query_param(resolver, resource_name, input, &ident)?;
            query.push(fragment.absorb(encoded));
        }
    }
    if !query.is_empty() {
        format_str.push_str("{}");
        args.push(quote!(encode_params(&[#(#query),*])));
        fragment.helpers.insert(Helper::Params);
    }

    fragment.tokens = quote! {
        let url = format!(#format_str, #(#args),*);
    };
    Ok(fragment)
}

fn path_input<'r>(resource: &'r Resource, name: &str) -> Option<&'r Input> {
    resource
        .inputs
        .iter()
        .find(|input| input.role() == InputRole::Path && input.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorOptions;
    use crate::test_utils::{contacts_schema, format_statements, resource};

    fn url_code(json: &str) -> Result<String, GeneratorError> {
        let schema = contacts_schema();
        let options = GeneratorOptions::default();
        let resolver = TypeResolver::new(&schema, &options);
        let resource = resource(json);
        let fragment = synthesize_url(&resolver, &resource, "test")?;
        Ok(format_statements(&fragment.tokens))
    }

    #[test]
    fn literal_path() {
        let code = url_code(r#"{"method": "GET", "path": "/contacts"}"#).unwrap();
        assert!(code.contains(r#"let url = format!("{}/contacts", self.url);"#));
    }

    #[test]
    fn path_params_substituted_in_template_order() {
        let code = url_code(
            r#"{
                "method": "GET",
                "path": "/contacts/{id}/notes/{noteId}",
                "inputs": [
                    {"name": "noteId", "type": "Int32", "pathParam": true},
                    {"name": "id", "type": "ContactId", "pathParam": true}
                ]
            }"#,
        )
        .unwrap();
        assert!(code.contains(r#"format!("{}/contacts/{}/notes/{}", self.url, id, note_id)"#));
    }

    #[test]
    fn query_params_keep_declaration_order() {
        let code = url_code(
            r#"{
                "method": "GET",
                "path": "/contacts",
                "inputs": [
                    {"name": "skip", "type": "Int32", "queryParam": "skip", "optional": true},
                    {"name": "limit", "type": "Int32", "queryParam": "limit", "default": 10}
                ]
            }"#,
        )
        .unwrap();
        let code: String = code.split_whitespace().collect();
        let skip = code.find(r#"encode_optional_int32_param("skip",skip)"#).unwrap();
        let limit = code.find(r#"encode_int32_param("limit",limit,10)"#).unwrap();
        assert!(skip < limit);
        assert!(code.contains("encode_params("));
    }

    #[test]
    fn headers_and_body_stay_out_of_url() {
        let code = url_code(
            r#"{
                "method": "PUT",
                "path": "/contacts",
                "inputs": [
                    {"name": "etag", "type": "String", "header": "If-Match"},
                    {"name": "contact", "type": "Contact"}
                ]
            }"#,
        )
        .unwrap();
        assert!(!code.contains("etag"));
        assert!(!code.contains("contact,"));
        assert!(!code.contains("encode_params"));
    }

    #[test]
    fn unbound_placeholder_is_fatal() {
        let err = url_code(r#"{"method": "GET", "path": "/contacts/{id}"}"#).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnboundPathParam { ref param, .. } if param == "id"
        ));
    }

    #[test]
    fn stray_braces_are_escaped() {
        let code = url_code(r#"{"method": "GET", "path": "/odd/{}"}"#).unwrap();
        assert!(code.contains(r#""{}/odd/{{}}""#));
    }
}
