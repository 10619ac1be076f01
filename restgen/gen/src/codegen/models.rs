//! Model type generation.
//!
//! Every schema [`TypeDef`] becomes a Rust item: structs (with inherited
//! fields flattened in), enums with their wire symbols, and type aliases for
//! everything else.

use proc_macro2::TokenStream;
use quote::quote;
use restgen_define::{BaseType, EnumDef, Schema, TypeDef};

use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver::{FieldShape, TypeResolver};

/// Generates all model types in schema declaration order.
///
/// Definitions that shadow a built-in type name are skipped.
pub fn generate_models(
    resolver: &TypeResolver<'_>,
    schema: &Schema,
) -> Result<TokenStream, GeneratorError> {
    let mut items = Vec::with_capacity(schema.types.len());
    for def in &schema.types {
        if BaseType::builtin(def.name()).is_some() {
            continue;
        }
        let item = match def {
            TypeDef::Struct(_) => generate_struct(resolver, def)?,
            TypeDef::Enum(enum_def) => generate_enum(enum_def, resolver.options().prefix_enums),
            TypeDef::Array(_) => {
                let item = resolver.item_type(def.name())?;
                type_alias(def, quote!(Vec<#item>))
            }
            TypeDef::Map(_) => {
                let (key, item) = resolver.map_types(def.name())?;
                type_alias(def, quote!(std::collections::BTreeMap<#key, #item>))
            }
            TypeDef::Alias(_) | TypeDef::StringAlias(_) | TypeDef::NumberAlias(_) => {
                let target = resolver.owned_type(def.supertype())?;
                type_alias(def, target)
            }
        };
        items.push(item);
    }
    Ok(quote!(#(#items)*))
}

fn doc_attrs(comment: Option<&str>) -> TokenStream {
    let lines: Vec<String> = comment
        .map(|c| c.lines().map(|line| format!(" {}", line.trim_end())).collect())
        .unwrap_or_default();
    quote!(#(#[doc = #lines])*)
}

fn type_alias(def: &TypeDef, target: TokenStream) -> TokenStream {
    let ident = naming::type_ident(def.name());
    let docs = doc_attrs(def.comment());
    quote! {
        #docs
        pub type #ident = #target;
    }
}

fn generate_struct(
    resolver: &TypeResolver<'_>,
    def: &TypeDef,
) -> Result<TokenStream, GeneratorError> {
    let ident = naming::type_ident(def.name());
    let docs = doc_attrs(def.comment());

    let mut fields = Vec::new();
    for field in resolver.flattened_fields(def.name())? {
        let field_ident = naming::field_ident(&field.name);
        let (ty, shape) = resolver.field_type(field)?;

        let mut attrs = Vec::new();
        let unraw = field_ident.to_string();
        if unraw.trim_start_matches("r#") != field.name {
            let wire = &field.name;
            attrs.push(quote!(#[serde(rename = #wire)]));
        }
        match shape {
            FieldShape::Required => {}
            FieldShape::Optional => {
                attrs.push(quote!(#[serde(default, skip_serializing_if = "Option::is_none")]));
            }
            FieldShape::ZeroValue(predicate) => {
                attrs.push(quote!(#[serde(default, skip_serializing_if = #predicate)]));
            }
        }
        let field_docs = doc_attrs(field.comment.as_deref());
        fields.push(quote! {
            #field_docs
            #(#attrs)*
            pub #field_ident: #ty
        });
    }

    Ok(quote! {
        #docs
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct #ident {
            #(#fields),*
        }
    })
}

fn generate_enum(def: &EnumDef, prefix_enums: bool) -> TokenStream {
    let ident = naming::type_ident(&def.name);
    let docs = doc_attrs(def.comment.as_deref());

    let variants: Vec<_> = def
        .elements
        .iter()
        .map(|e| naming::variant_ident(&def.name, &e.symbol, prefix_enums))
        .collect();
    let symbols: Vec<&str> = def.elements.iter().map(|e| e.symbol.as_str()).collect();
    let declared = def.elements.iter().zip(&variants).enumerate().map(|(i, (element, variant))| {
        let symbol = &element.symbol;
        let variant_docs = doc_attrs(element.comment.as_deref());
        let default = if i == 0 { quote!(#[default]) } else { TokenStream::new() };
        quote! {
            #variant_docs
            #default
            #[serde(rename = #symbol)]
            #variant
        }
    });
    let expected = format!("unknown {} symbol: {{}}", def.name);

    quote! {
        #docs
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum #ident {
            #(#declared),*
        }

        impl #ident {
            /// The wire symbol.
            pub fn as_str(self) -> &'static str {
                match self {
                    #(Self::#variants => #symbols,)*
                }
            }
        }

        impl std::fmt::Display for #ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for #ident {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    #(#symbols => Ok(Self::#variants),)*
                    other => Err(format!(#expected, other)),
                }
            }
        }
    }
}
