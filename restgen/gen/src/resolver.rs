//! Type resolution for code generation.
//!
//! [`TypeResolver`] wraps the schema's [`TypeRegistry`] and answers the
//! questions the generator asks about a type name: its base kind, whether it
//! is an array or enum, and which Rust type stands for it.

use proc_macro2::TokenStream;
use quote::quote;
use restgen_define::{BaseType, EnumDef, Schema, StructField, TypeRegistry};

use crate::config::GeneratorOptions;
use crate::errors::GeneratorError;
use crate::naming;

/// Types that can be written as a single query or header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarKind {
    String,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Enum,
}

impl ScalarKind {
    pub fn from_base(base: BaseType) -> Option<Self> {
        let kind = match base {
            BaseType::String => Self::String,
            BaseType::Bool => Self::Bool,
            BaseType::Int8 => Self::Int8,
            BaseType::Int16 => Self::Int16,
            BaseType::Int32 => Self::Int32,
            BaseType::Int64 => Self::Int64,
            BaseType::Float32 => Self::Float32,
            BaseType::Float64 => Self::Float64,
            BaseType::Enum => Self::Enum,
            BaseType::Any | BaseType::Struct | BaseType::Array | BaseType::Map => return None,
        };
        Some(kind)
    }

    /// Lowercase name used in encoder helper names (`encode_int32_param`).
    pub fn helper_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Enum => "enum",
        }
    }

    /// The by-value kind, or `None` for strings and enums.
    pub fn value_kind(self) -> Option<ValueKind> {
        let kind = match self {
            Self::Bool => ValueKind::Bool,
            Self::Int8 => ValueKind::Int8,
            Self::Int16 => ValueKind::Int16,
            Self::Int32 => ValueKind::Int32,
            Self::Int64 => ValueKind::Int64,
            Self::Float32 => ValueKind::Float32,
            Self::Float64 => ValueKind::Float64,
            Self::String | Self::Enum => return None,
        };
        Some(kind)
    }
}

/// Scalars passed by value: booleans, integers and floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl ValueKind {
    pub fn scalar(self) -> ScalarKind {
        match self {
            Self::Bool => ScalarKind::Bool,
            Self::Int8 => ScalarKind::Int8,
            Self::Int16 => ScalarKind::Int16,
            Self::Int32 => ScalarKind::Int32,
            Self::Int64 => ScalarKind::Int64,
            Self::Float32 => ScalarKind::Float32,
            Self::Float64 => ScalarKind::Float64,
        }
    }

    pub fn primitive(self) -> TokenStream {
        match self {
            Self::Bool => quote!(bool),
            Self::Int8 => quote!(i8),
            Self::Int16 => quote!(i16),
            Self::Int32 => quote!(i32),
            Self::Int64 => quote!(i64),
            Self::Float32 => quote!(f32),
            Self::Float64 => quote!(f64),
        }
    }
}

/// How an optional struct field is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Always present.
    Required,
    /// `Option<T>`, skipped when `None`.
    Optional,
    /// The type's zero value stands for absent; skipped by the given predicate.
    ZeroValue(&'static str),
}

/// Resolves schema type names to Rust types.
pub struct TypeResolver<'a> {
    registry: TypeRegistry<'a>,
    options: &'a GeneratorOptions,
}

impl<'a> TypeResolver<'a> {
    pub fn new(schema: &'a Schema, options: &'a GeneratorOptions) -> Self {
        Self {
            registry: TypeRegistry::new(schema),
            options,
        }
    }

    pub fn options(&self) -> &'a GeneratorOptions {
        self.options
    }

    pub fn base_type(&self, name: &str) -> Result<BaseType, GeneratorError> {
        Ok(self.registry.base_type(name)?)
    }

    /// The scalar kind of `name`, or `None` for arrays, maps, structs and `Any`.
    pub fn scalar_kind(&self, name: &str) -> Result<Option<ScalarKind>, GeneratorError> {
        Ok(ScalarKind::from_base(self.base_type(name)?))
    }

    pub fn is_array(&self, name: &str) -> Result<bool, GeneratorError> {
        Ok(self.registry.is_array(name)?)
    }

    pub fn array_items(&self, name: &str) -> Result<Option<&'a str>, GeneratorError> {
        Ok(self.registry.array_items(name)?)
    }

    pub fn enum_def(&self, name: &str) -> Result<Option<&'a EnumDef>, GeneratorError> {
        Ok(self.registry.enum_def(name)?)
    }

    pub fn flattened_fields(&self, name: &str) -> Result<Vec<&'a StructField>, GeneratorError> {
        Ok(self.registry.flattened_fields(name)?)
    }

    /// The owned Rust type naming `name`.
    ///
    /// Built-in names map to primitives; schema-defined names map to the
    /// generated type of the same name.
    pub fn owned_type(&self, name: &str) -> Result<TokenStream, GeneratorError> {
        let base = self.base_type(name)?;
        if BaseType::builtin(name).is_some() {
            return self.builtin_type(base, None, None);
        }
        let ident = naming::type_ident(name);
        Ok(quote!(#ident))
    }

    /// Key and element types of a map type name.
    ///
    /// Keys default to `String`, elements to `serde_json::Value`.
    pub fn map_types(&self, name: &str) -> Result<(TokenStream, TokenStream), GeneratorError> {
        let (keys, items) = self.registry.map_types(name)?;
        let key = match keys {
            Some(keys) => self.owned_type(keys)?,
            None => quote!(String),
        };
        Ok((key, self.optional_owned(items)?))
    }

    /// Element type of an array type name, `serde_json::Value` when untyped.
    pub fn item_type(&self, name: &str) -> Result<TokenStream, GeneratorError> {
        match self.array_items(name)? {
            Some(items) => self.owned_type(items),
            None => Ok(quote!(serde_json::Value)),
        }
    }

    fn builtin_type(
        &self,
        base: BaseType,
        items: Option<&str>,
        keys: Option<&str>,
    ) -> Result<TokenStream, GeneratorError> {
        let ty = match base {
            BaseType::Bool => quote!(bool),
            BaseType::Int8 => quote!(i8),
            BaseType::Int16 => quote!(i16),
            BaseType::Int32 => quote!(i32),
            BaseType::Int64 => quote!(i64),
            BaseType::Float32 => quote!(f32),
            BaseType::Float64 => quote!(f64),
            BaseType::String => quote!(String),
            BaseType::Any | BaseType::Struct | BaseType::Enum => quote!(serde_json::Value),
            BaseType::Array => {
                let item = self.optional_owned(items)?;
                quote!(Vec<#item>)
            }
            BaseType::Map => {
                let key = match keys {
                    Some(keys) => self.owned_type(keys)?,
                    None => quote!(String),
                };
                let item = self.optional_owned(items)?;
                quote!(std::collections::BTreeMap<#key, #item>)
            }
        };
        Ok(ty)
    }

    fn optional_owned(&self, name: Option<&str>) -> Result<TokenStream, GeneratorError> {
        match name {
            Some(name) => self.owned_type(name),
            None => Ok(quote!(serde_json::Value)),
        }
    }

    /// The Rust type of a struct field and how absence is represented.
    ///
    /// Inline `Array`/`Map` fields take their element and key types from the
    /// field itself. With `precise`, every optional field is an `Option`;
    /// otherwise optional strings, arrays and maps use their zero value.
    pub fn field_type(
        &self,
        field: &StructField,
    ) -> Result<(TokenStream, FieldShape), GeneratorError> {
        let base = self.base_type(&field.type_name)?;
        let ty = match BaseType::builtin(&field.type_name) {
            Some(builtin @ (BaseType::Array | BaseType::Map)) => {
                self.builtin_type(builtin, field.items.as_deref(), field.keys.as_deref())?
            }
            _ => self.owned_type(&field.type_name)?,
        };

        if !field.optional {
            return Ok((ty, FieldShape::Required));
        }
        if !self.options.precise {
            let zero = match base {
                BaseType::String => Some("String::is_empty"),
                BaseType::Array => Some("Vec::is_empty"),
                BaseType::Map => Some("std::collections::BTreeMap::is_empty"),
                _ => None,
            };
            if let Some(predicate) = zero {
                return Ok((ty, FieldShape::ZeroValue(predicate)));
            }
        }
        Ok((quote!(Option<#ty>), FieldShape::Optional))
    }
}
