//! Query parameter encoding policy.
//!
//! Every query input contributes either nothing or `&key=value` to the
//! query string. [`choose_encoding`] picks how, in priority order:
//!
//! 1. Arrays repeat the key once per element.
//! 2. Optional non-string scalars are omitted when `None`.
//! 3. Everything else is omitted when equal to its declared default (or the
//!    type's zero value when no default is declared). Enums compare by symbol.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;
use restgen_define::{Input, InputRole};
use serde_json::Value;

use crate::codegen::fragment::{Fragment, Helper, RuntimeItem};
use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver::{ScalarKind, TypeResolver};

/// A default value, already checked against the input's type.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// An enum member; `None` compares against the empty string.
    Symbol {
        enum_name: String,
        symbol: Option<String>,
    },
}

/// How one query input is encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoding {
    List,
    Optional(ScalarKind),
    DefaultEliding {
        kind: ScalarKind,
        default: DefaultValue,
    },
}

/// Chooses the encoding for a query input.
pub fn choose_encoding(
    resolver: &TypeResolver<'_>,
    resource: &str,
    input: &Input,
) -> Result<Encoding, GeneratorError> {
    if resolver.is_array(&input.type_name)? {
        check_list_items(resolver, resource, input)?;
        return Ok(Encoding::List);
    }
    let kind = resolver
        .scalar_kind(&input.type_name)?
        .ok_or_else(|| unsupported_query(resource, input))?;
    if input.optional && kind != ScalarKind::String {
        return Ok(Encoding::Optional(kind));
    }
    let default = default_value(resolver, kind, input).map_err(|reason| {
        GeneratorError::InvalidDefault {
            resource: resource.to_string(),
            input: input.name.clone(),
            reason,
        }
    })?;
    Ok(Encoding::DefaultEliding { kind, default })
}

/// Fails unless a list-valued query input has scalar elements.
///
/// An untyped `Array` holds `serde_json::Value` items, which encode as JSON text.
pub fn check_list_items(
    resolver: &TypeResolver<'_>,
    resource: &str,
    input: &Input,
) -> Result<(), GeneratorError> {
    match resolver.array_items(&input.type_name)? {
        Some(items) if resolver.scalar_kind(items)?.is_none() => {
            Err(unsupported_query(resource, input))
        }
        _ => Ok(()),
    }
}

fn unsupported_query(resource: &str, input: &Input) -> GeneratorError {
    GeneratorError::UnsupportedParamType {
        resource: resource.to_string(),
        name: input.name.clone(),
        type_name: input.type_name.clone(),
        location: "query",
    }
}

/// Checks an input's declared default against its kind, or supplies the zero value.
pub fn default_value(
    resolver: &TypeResolver<'_>,
    kind: ScalarKind,
    input: &Input,
) -> Result<DefaultValue, String> {
    let value = input.default.as_ref().filter(|v| !v.is_null());
    let mismatch = |v: &Value| format!("{} is not a valid {} value", v, kind.helper_name());

    let default = match (kind, value) {
        (ScalarKind::String, None) => DefaultValue::String(String::new()),
        (ScalarKind::String, Some(v)) => {
            DefaultValue::String(v.as_str().ok_or_else(|| mismatch(v))?.to_string())
        }
        (ScalarKind::Bool, None) => DefaultValue::Bool(false),
        (ScalarKind::Bool, Some(v)) => DefaultValue::Bool(v.as_bool().ok_or_else(|| mismatch(v))?),
        (ScalarKind::Float32 | ScalarKind::Float64, None) => DefaultValue::Float(0.0),
        (ScalarKind::Float32 | ScalarKind::Float64, Some(v)) => {
            DefaultValue::Float(v.as_f64().ok_or_else(|| mismatch(v))?)
        }
        (ScalarKind::Int8 | ScalarKind::Int16 | ScalarKind::Int32 | ScalarKind::Int64, None) => {
            DefaultValue::Integer(0)
        }
        (ScalarKind::Int8 | ScalarKind::Int16 | ScalarKind::Int32 | ScalarKind::Int64, Some(v)) => {
            let n = v.as_i64().ok_or_else(|| mismatch(v))?;
            let fits = match kind {
                ScalarKind::Int8 => i8::try_from(n).is_ok(),
                ScalarKind::Int16 => i16::try_from(n).is_ok(),
                ScalarKind::Int32 => i32::try_from(n).is_ok(),
                _ => true,
            };
            if !fits {
                return Err(format!("{} is out of range for {}", n, kind.helper_name()));
            }
            DefaultValue::Integer(n)
        }
        (ScalarKind::Enum, value) => {
            let def = resolver
                .enum_def(&input.type_name)
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("'{}' has no enum definition", input.type_name))?;
            let symbol = match value {
                None => None,
                Some(v) => {
                    let symbol = v.as_str().ok_or_else(|| mismatch(v))?;
                    if !def.elements.iter().any(|e| e.symbol == symbol) {
                        return Err(format!("'{}' is not a member of {}", symbol, def.name));
                    }
                    Some(symbol.to_string())
                }
            };
            DefaultValue::Symbol {
                enum_name: def.name.clone(),
                symbol,
            }
        }
    };
    Ok(default)
}

/// Renders a default as an expression.
pub fn default_tokens(default: &DefaultValue, prefix_enums: bool) -> TokenStream {
    match default {
        DefaultValue::String(s) => quote!(#s),
        DefaultValue::Bool(b) => quote!(#b),
        DefaultValue::Integer(n) => {
            let lit = Literal::u64_unsuffixed(n.unsigned_abs());
            if *n < 0 { quote!(-#lit) } else { quote!(#lit) }
        }
        DefaultValue::Float(f) => {
            let lit = Literal::f64_unsuffixed(f.abs());
            if f.is_sign_negative() && *f != 0.0 {
                quote!(-#lit)
            } else {
                quote!(#lit)
            }
        }
        DefaultValue::Symbol { enum_name, symbol } => match symbol {
            Some(symbol) => {
                let ty = naming::type_ident(enum_name);
                let variant = naming::variant_ident(enum_name, symbol, prefix_enums);
                quote!(#ty::#variant.as_str())
            }
            None => quote!(""),
        },
    }
}

/// Renders the query contribution of `input`, bound to the parameter `value`.
pub fn encode_query_param(
    resolver: &TypeResolver<'_>,
    resource: &str,
    input: &Input,
    value: &Ident,
) -> Result<Fragment, GeneratorError> {
    let InputRole::Query(key) = input.role() else {
        return Err(GeneratorError::CodeGen(format!(
            "Input '{}' of '{}' is not a query parameter",
            input.name, resource
        )));
    };

    let fragment = match choose_encoding(resolver, resource, input)? {
        Encoding::List => Fragment::new(quote!(encode_list_param(#key, #value)))
            .with_runtime(RuntimeItem::EncodeListParam),
        Encoding::Optional(kind) => {
            let helper = match kind.value_kind() {
                Some(kind) => Helper::Optional(kind),
                None => Helper::OptionalEnum,
            };
            let func = helper.ident();
            Fragment::new(quote!(#func(#key, #value))).with_helper(helper)
        }
        Encoding::DefaultEliding { kind, default } => {
            let default = default_tokens(&default, resolver.options().prefix_enums);
            let (helper, value) = match kind.value_kind() {
                Some(kind) => (Helper::Eliding(kind), quote!(#value)),
                None if kind == ScalarKind::Enum => {
                    (Helper::ElidingString, quote!(#value.as_str()))
                }
                None => (Helper::ElidingString, quote!(#value)),
            };
            let func = helper.ident();
            Fragment::new(quote!(#func(#key, #value, #default))).with_helper(helper)
        }
    };
    Ok(fragment)
}
