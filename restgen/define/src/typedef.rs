//! Named type definitions.
//!
//! A [`TypeDef`] is serialized in the tagged form used by schema documents,
//! e.g. `{"StructTypeDef": {"type": "Struct", "name": "Contact", ...}}`. The
//! `type` attribute always names the supertype: a base type such as `String`
//! or `Struct`, or another schema-defined type.

use serde::{Deserialize, Serialize};

/// A named type declared by a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDef {
    /// A plain alias of another type.
    #[serde(rename = "AliasTypeDef")]
    Alias(AliasDef),
    /// A string-based type. Pattern and size restrictions are not used by the generator.
    #[serde(rename = "StringTypeDef")]
    StringAlias(AliasDef),
    /// A number-based type. Range restrictions are not used by the generator.
    #[serde(rename = "NumberTypeDef")]
    NumberAlias(AliasDef),
    #[serde(rename = "StructTypeDef")]
    Struct(StructDef),
    #[serde(rename = "EnumTypeDef")]
    Enum(EnumDef),
    #[serde(rename = "ArrayTypeDef")]
    Array(ArrayDef),
    #[serde(rename = "MapTypeDef")]
    Map(MapDef),
}

impl TypeDef {
    /// The declared type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Alias(def) | Self::StringAlias(def) | Self::NumberAlias(def) => &def.name,
            Self::Struct(def) => &def.name,
            Self::Enum(def) => &def.name,
            Self::Array(def) => &def.name,
            Self::Map(def) => &def.name,
        }
    }

    /// The name of the type this one is derived from.
    pub fn supertype(&self) -> &str {
        match self {
            Self::Alias(def) | Self::StringAlias(def) | Self::NumberAlias(def) => &def.supertype,
            Self::Struct(def) => &def.supertype,
            Self::Enum(def) => &def.supertype,
            Self::Array(def) => &def.supertype,
            Self::Map(def) => &def.supertype,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Alias(def) | Self::StringAlias(def) | Self::NumberAlias(def) => {
                def.comment.as_deref()
            }
            Self::Struct(def) => def.comment.as_deref(),
            Self::Enum(def) => def.comment.as_deref(),
            Self::Array(def) => def.comment.as_deref(),
            Self::Map(def) => def.comment.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDef {
    pub name: String,
    #[serde(rename = "type")]
    pub supertype: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A struct type. Fields of a struct supertype are inherited ahead of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    #[serde(rename = "type", default = "struct_base")]
    pub supertype: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub fields: Vec<StructField>,
}

fn struct_base() -> String {
    "Struct".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub optional: bool,
    /// Element type for inline `Array`/`Map` fields.
    #[serde(default)]
    pub items: Option<String>,
    /// Key type for inline `Map` fields.
    #[serde(default)]
    pub keys: Option<String>,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(rename = "type", default = "enum_base")]
    pub supertype: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub elements: Vec<EnumElement>,
}

fn enum_base() -> String {
    "Enum".to_string()
}

/// One member of an enum; `symbol` is its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumElement {
    pub symbol: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayDef {
    pub name: String,
    #[serde(rename = "type", default = "array_base")]
    pub supertype: String,
    /// Element type; `Any` when absent.
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

fn array_base() -> String {
    "Array".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDef {
    pub name: String,
    #[serde(rename = "type", default = "map_base")]
    pub supertype: String,
    #[serde(default)]
    pub keys: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

fn map_base() -> String {
    "Map".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_struct_def() {
        let def: TypeDef = serde_json::from_str(
            r#"{"StructTypeDef": {
                "type": "Struct",
                "name": "Contact",
                "comment": "A person",
                "fields": [
                    {"name": "id", "type": "String"},
                    {"name": "tags", "type": "Array", "items": "String", "optional": true}
                ]
            }}"#,
        )
        .unwrap();

        assert_eq!(def.name(), "Contact");
        assert_eq!(def.supertype(), "Struct");
        assert_eq!(def.comment(), Some("A person"));
        let TypeDef::Struct(def) = def else {
            panic!("expected a struct definition");
        };
        assert_eq!(def.fields.len(), 2);
        assert!(def.fields[1].optional);
        assert_eq!(def.fields[1].items.as_deref(), Some("String"));
    }

    #[test]
    fn string_and_number_restrictions_are_ignored() {
        let defs: Vec<TypeDef> = serde_json::from_str(
            r#"[
                {"StringTypeDef": {"type": "String", "name": "Slug", "pattern": "[a-z]+", "maxSize": 12}},
                {"NumberTypeDef": {"type": "Int32", "name": "Count", "min": 0}}
            ]"#,
        )
        .unwrap();

        assert!(matches!(&defs[0], TypeDef::StringAlias(d) if d.supertype == "String"));
        assert!(matches!(&defs[1], TypeDef::NumberAlias(d) if d.supertype == "Int32"));
    }

    #[test]
    fn enum_elements_keep_declaration_order() {
        let def: TypeDef = serde_json::from_str(
            r#"{"EnumTypeDef": {"name": "Color", "elements": [
                {"symbol": "RED"}, {"symbol": "GREEN"}, {"symbol": "BLUE"}
            ]}}"#,
        )
        .unwrap();

        let TypeDef::Enum(def) = def else {
            panic!("expected an enum definition");
        };
        assert_eq!(def.supertype, "Enum");
        let symbols: Vec<_> = def.elements.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["RED", "GREEN", "BLUE"]);
    }
}
