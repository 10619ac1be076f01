//! Method signatures.
//!
//! Derives, for one resource, the parameter list (one per input, in
//! declaration order), the success value and the per-request header list.

use std::collections::BTreeMap;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use restgen_define::{BaseType, Input, InputRole, Resource};

use crate::codegen::decoder::DecodePlan;
use crate::codegen::params;
use crate::errors::GeneratorError;
use crate::naming;
use crate::parser::extract_path_params;
use crate::resolver::{ScalarKind, TypeResolver};

/// A value read back from a response header.
#[derive(Debug, Clone)]
pub struct OutputValue {
    pub ident: Ident,
    pub header: String,
    pub ty: TokenStream,
    /// Read as-is; other types are parsed.
    pub is_string: bool,
}

/// What a successful call yields, in tuple order.
#[derive(Debug, Clone)]
pub struct ReturnShape {
    /// Type of the decoded body, already `Option`-wrapped when 204/304 may
    /// leave it empty. `None` when the body is never decoded.
    pub primary: Option<TokenStream>,
    pub outputs: Vec<OutputValue>,
}

impl ReturnShape {
    pub fn resolve(
        resolver: &TypeResolver<'_>,
        resource: &Resource,
        resource_name: &str,
        plan: &DecodePlan,
    ) -> Result<Self, GeneratorError> {
        let primary = match resource.type_name.as_deref() {
            Some(type_name) if !plan.no_content => Some(resolver.owned_type(type_name)?),
            _ => None,
        };

        let mut outputs = Vec::with_capacity(resource.outputs.len());
        for output in &resource.outputs {
            let kind = resolver.scalar_kind(&output.type_name)?.ok_or_else(|| {
                GeneratorError::UnsupportedParamType {
                    resource: resource_name.to_string(),
                    name: output.name.clone(),
                    type_name: output.type_name.clone(),
                    location: "output",
                }
            })?;
            outputs.push(OutputValue {
                ident: naming::param_ident(&output.name),
                header: output.header.clone(),
                ty: resolver.owned_type(&output.type_name)?,
                is_string: kind == ScalarKind::String,
            });
        }

        Ok(Self { primary, outputs })
    }

    /// The decoded body type as it appears in the result, if any.
    fn primary_type(&self, optional: bool) -> Option<TokenStream> {
        self.primary.as_ref().map(|ty| if optional { quote!(Option<#ty>) } else { ty.clone() })
    }

    /// The `Ok` type: `()`, a single value, or a tuple.
    pub fn ok_type(&self, plan: &DecodePlan) -> TokenStream {
        let mut types: Vec<TokenStream> =
            self.primary_type(plan.body_optional()).into_iter().collect();
        types.extend(self.outputs.iter().map(|o| o.ty.clone()));
        tuple_of(types)
    }

    /// The expression returned on success.
    pub fn ok_value(&self) -> TokenStream {
        let mut values: Vec<TokenStream> = Vec::new();
        if self.primary.is_some() {
            values.push(quote!(data));
        }
        values.extend(self.outputs.iter().map(|o| {
            let ident = &o.ident;
            quote!(#ident)
        }));
        tuple_of(values)
    }
}

fn tuple_of(items: Vec<TokenStream>) -> TokenStream {
    match items.len() {
        0 => quote!(()),
        1 => items.into_iter().collect(),
        _ => quote!((#(#items),*)),
    }
}

/// Signature of one generated method.
#[derive(Debug, Clone)]
pub struct MethodSignature {
    pub ident: Ident,
    pub params: Vec<TokenStream>,
    pub shape: ReturnShape,
    pub ok_type: TokenStream,
}

impl MethodSignature {
    pub fn resolve(
        resolver: &TypeResolver<'_>,
        resource: &Resource,
        method_name: &str,
        plan: &DecodePlan,
    ) -> Result<Self, GeneratorError> {
        let params = resource
            .inputs
            .iter()
            .map(|input| {
                let ident = if is_used(resource, input) {
                    naming::param_ident(&input.name)
                } else {
                    format_ident!("_{}", naming::snake_case(&input.name))
                };
                let ty = param_type(resolver, method_name, input)?;
                Ok(quote!(#ident: #ty))
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;
        let shape = ReturnShape::resolve(resolver, resource, method_name, plan)?;
        let ok_type = shape.ok_type(plan);

        Ok(Self {
            ident: naming::ident(method_name),
            params,
            shape,
            ok_type,
        })
    }

    /// `pub async fn name(&self, ..) -> Result<T, ClientError>`
    pub fn tokens(&self) -> TokenStream {
        let ident = &self.ident;
        let params = &self.params;
        let ok_type = &self.ok_type;
        quote! {
            pub async fn #ident(&self, #(#params),*) -> Result<#ok_type, ClientError>
        }
    }
}

/// Returns `true` when the generated method reads `input`.
///
/// Path inputs without a placeholder, body inputs of GET/DELETE and every
/// body candidate after the first go unused.
pub fn is_used(resource: &Resource, input: &Input) -> bool {
    match input.role() {
        InputRole::Path => extract_path_params(&resource.path).contains(&input.name.as_str()),
        InputRole::Query(_) | InputRole::Header(_) => true,
        InputRole::Body => {
            resource.method.has_body()
                && resource
                    .body_input()
                    .is_some_and(|body| std::ptr::eq(body, input))
        }
    }
}

/// The Rust type of an input parameter.
///
/// Strings are borrowed as `&str` (empty means absent when optional),
/// arrays as slices, structs and maps by reference, and other scalars by
/// value, wrapped in `Option` when optional.
pub fn param_type(
    resolver: &TypeResolver<'_>,
    resource_name: &str,
    input: &Input,
) -> Result<TokenStream, GeneratorError> {
    let base = resolver.base_type(&input.type_name)?;
    let role = input.role();
    let unsupported = |location: &'static str| GeneratorError::UnsupportedParamType {
        resource: resource_name.to_string(),
        name: input.name.clone(),
        type_name: input.type_name.clone(),
        location,
    };

    match role {
        InputRole::Path | InputRole::Header(_) if ScalarKind::from_base(base).is_none() => {
            let location = if role == InputRole::Path { "path" } else { "header" };
            return Err(unsupported(location));
        }
        InputRole::Query(_)
            if ScalarKind::from_base(base).is_none() && base != BaseType::Array =>
        {
            return Err(unsupported("query"));
        }
        InputRole::Query(_) if base == BaseType::Array => {
            params::check_list_items(resolver, resource_name, input)?;
        }
        _ => {}
    }

    let optional = input.optional && role != InputRole::Path;
    let ty = match base {
        BaseType::String => quote!(&str),
        BaseType::Array => {
            let item = resolver.item_type(&input.type_name)?;
            quote!(&[#item])
        }
        BaseType::Struct | BaseType::Map | BaseType::Any => {
            let owned = resolver.owned_type(&input.type_name)?;
            if optional {
                quote!(Option<&#owned>)
            } else {
                quote!(&#owned)
            }
        }
        _ => {
            let owned = resolver.owned_type(&input.type_name)?;
            if optional {
                quote!(Option<#owned>)
            } else {
                owned
            }
        }
    };
    Ok(ty)
}

/// Builds the per-request header list, ordered by header name.
///
/// Returns the statement binding `headers` and the argument passed to the
/// transport helper. Optional inputs are sent only when present (`Some`, or
/// a non-empty string).
pub fn header_list(
    resolver: &TypeResolver<'_>,
    resource: &Resource,
    resource_name: &str,
) -> Result<(TokenStream, TokenStream), GeneratorError> {
    let mut by_name: BTreeMap<&str, &Input> = BTreeMap::new();
    for input in &resource.inputs {
        if let InputRole::Header(name) = input.role()
            && by_name.insert(name, input).is_some()
        {
            return Err(GeneratorError::CodeGen(format!(
                "Resource '{}': header '{}' is bound to more than one input",
                resource_name, name
            )));
        }
    }
    if by_name.is_empty() {
        return Ok((TokenStream::new(), quote!(&[])));
    }

    let mut conditional = false;
    let mut pushes = Vec::with_capacity(by_name.len());
    let mut pairs = Vec::with_capacity(by_name.len());
    for (name, input) in by_name {
        let ident = naming::param_ident(&input.name);
        let is_string = resolver.base_type(&input.type_name)? == BaseType::String;
        let pair = quote!((#name, #ident.to_string()));
        let push = match (input.optional, is_string) {
            (false, _) => quote! { headers.push(#pair); },
            (true, true) => {
                conditional = true;
                quote! {
                    if !#ident.is_empty() {
                        headers.push(#pair);
                    }
                }
            }
            (true, false) => {
                conditional = true;
                quote! {
                    if let Some(#ident) = #ident {
                        headers.push(#pair);
                    }
                }
            }
        };
        pushes.push(push);
        pairs.push(pair);
    }

    let statement = if conditional {
        quote! {
            let mut headers = Vec::new();
            #(#pushes)*
        }
    } else {
        quote! { let headers = [#(#pairs),*]; }
    };
    Ok((statement, quote!(&headers)))
}
