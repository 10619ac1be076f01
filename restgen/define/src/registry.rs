//! Type name resolution.
//!
//! The [`TypeRegistry`] indexes a schema's [`TypeDef`]s by name and follows
//! supertype chains down to a [`BaseType`]. Resolution is total: a name that
//! does not reach a built-in base type is an error, never a guess.

use std::collections::{BTreeMap, BTreeSet};

use strum::Display;

use crate::error::DefineError;
use crate::typedef::{EnumDef, StructField, TypeDef};
use crate::types::Schema;

/// The primitive kind a type name ultimately resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum BaseType {
    Any,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Enum,
    Struct,
    Array,
    Map,
}

impl BaseType {
    /// Maps a built-in type name to its base type.
    ///
    /// `Symbol`, `UUID` and `Timestamp` travel as strings.
    ///
    /// ## Examples
    ///
    /// ```
    /// use restgen_define::BaseType;
    ///
    /// assert_eq!(BaseType::builtin("Int64"), Some(BaseType::Int64));
    /// assert_eq!(BaseType::builtin("UUID"), Some(BaseType::String));
    /// assert_eq!(BaseType::builtin("Contact"), None);
    /// ```
    pub fn builtin(name: &str) -> Option<Self> {
        let base = match name {
            "Any" => Self::Any,
            "Bool" => Self::Bool,
            "Int8" => Self::Int8,
            "Int16" => Self::Int16,
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "Float32" => Self::Float32,
            "Float64" => Self::Float64,
            "String" | "Symbol" | "UUID" | "Timestamp" => Self::String,
            "Enum" => Self::Enum,
            "Struct" => Self::Struct,
            "Array" => Self::Array,
            "Map" => Self::Map,
            _ => return None,
        };
        Some(base)
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

/// Resolves type names against a schema.
///
/// Built once per generation run; borrows the schema read-only.
///
/// ## Examples
///
/// ```
/// use restgen_define::{BaseType, Schema, TypeRegistry};
///
/// let schema = Schema::from_json_str(r#"{
///     "name": "Shop",
///     "types": [
///         {"NumberTypeDef": {"type": "Int32", "name": "Quantity"}},
///         {"AliasTypeDef": {"type": "Quantity", "name": "Stock"}},
///         {"ArrayTypeDef": {"type": "Array", "name": "Skus", "items": "String"}}
///     ]
/// }"#).unwrap();
///
/// let registry = TypeRegistry::new(&schema);
/// assert_eq!(registry.base_type("Stock").unwrap(), BaseType::Int32);
/// assert!(registry.is_array("Skus").unwrap());
/// assert_eq!(registry.array_items("Skus").unwrap(), Some("String"));
/// assert!(registry.base_type("Missing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry<'a> {
    types: BTreeMap<&'a str, &'a TypeDef>,
}

impl<'a> TypeRegistry<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        let types = schema.types.iter().map(|def| (def.name(), def)).collect();
        Self { types }
    }

    /// Looks up a schema-defined type by name.
    pub fn find(&self, name: &str) -> Option<&'a TypeDef> {
        self.types.get(name).copied()
    }

    /// Resolves `name` to its base type.
    pub fn base_type(&self, name: &str) -> Result<BaseType, DefineError> {
        self.chain(name).map(|(_, base)| base)
    }

    pub fn is_array(&self, name: &str) -> Result<bool, DefineError> {
        Ok(self.base_type(name)? == BaseType::Array)
    }

    pub fn is_enum(&self, name: &str) -> Result<bool, DefineError> {
        Ok(self.base_type(name)? == BaseType::Enum)
    }

    /// Element type of an array type, taken from the nearest array definition.
    ///
    /// Returns `None` for the bare built-in `Array` or an array definition
    /// without `items`.
    pub fn array_items(&self, name: &str) -> Result<Option<&'a str>, DefineError> {
        let (defs, _) = self.chain(name)?;
        Ok(defs
            .iter()
            .find_map(|def| match def {
                TypeDef::Array(array) => Some(array.items.as_deref()),
                _ => None,
            })
            .flatten())
    }

    /// Key and element types of a map type, taken from the nearest map definition.
    pub fn map_types(&self, name: &str) -> Result<(Option<&'a str>, Option<&'a str>), DefineError> {
        let (defs, _) = self.chain(name)?;
        Ok(defs
            .iter()
            .find_map(|def| match def {
                TypeDef::Map(map) => Some((map.keys.as_deref(), map.items.as_deref())),
                _ => None,
            })
            .unwrap_or((None, None)))
    }

    /// The enum definition `name` resolves through, if any.
    pub fn enum_def(&self, name: &str) -> Result<Option<&'a EnumDef>, DefineError> {
        let (defs, _) = self.chain(name)?;
        Ok(defs.iter().find_map(|def| match def {
            TypeDef::Enum(def) => Some(def),
            _ => None,
        }))
    }

    /// All fields of a struct type, supertype fields first.
    pub fn flattened_fields(&self, name: &str) -> Result<Vec<&'a StructField>, DefineError> {
        let (defs, _) = self.chain(name)?;
        let mut fields = Vec::new();
        for def in defs.iter().rev() {
            if let TypeDef::Struct(def) = def {
                fields.extend(def.fields.iter());
            }
        }
        Ok(fields)
    }

    /// Walks the supertype chain from `name`, returning the definitions
    /// visited (nearest first) and the base type reached.
    fn chain(&self, name: &str) -> Result<(Vec<&'a TypeDef>, BaseType), DefineError> {
        let mut defs = Vec::new();
        let mut seen = BTreeSet::new();
        let mut current = name;
        loop {
            if let Some(base) = BaseType::builtin(current) {
                return Ok((defs, base));
            }
            let def = self
                .find(current)
                .ok_or_else(|| DefineError::UnresolvedType(current.to_string()))?;
            if !seen.insert(def.name()) {
                return Err(DefineError::TypeCycle(name.to_string()));
            }
            defs.push(def);
            current = def.supertype();
        }
    }
}
