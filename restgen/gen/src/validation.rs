//! Pre-generation validation.
//!
//! Checks a schema for problems that would otherwise surface halfway
//! through synthesis or, worse, as uncompilable output:
//!
//! - **Type consistency**: every referenced type name resolves
//! - **Enums**: at least one member, and distinct variant names
//! - **Structs**: no field holds its own struct by value, and distinct field names
//! - **Method names**: unique, and distinct from the client's own methods
//! - **Parameters**: unique identifiers and header names per resource, and
//!   list-valued query inputs with scalar elements
//!
//! ## Examples
//!
//! ```
//! use restgen_define::Schema;
//! use restgen_gen::config::GeneratorOptions;
//! use restgen_gen::validation::validate_schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "name": "Contacts",
//!     "resources": [
//!         {"type": "String", "method": "GET", "path": "/a", "name": "fetch"},
//!         {"type": "String", "method": "GET", "path": "/b", "name": "fetch"}
//!     ]
//! }"#).unwrap();
//!
//! assert!(validate_schema(&schema, &GeneratorOptions::default()).is_err());
//! ```

use std::collections::BTreeSet;

use restgen_define::{InputRole, Resource, Schema, TypeDef};

use crate::codegen::{RESERVED_METHODS, params};
use crate::config::GeneratorOptions;
use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver::TypeResolver;

/// Validates options and schema before any code is generated.
pub fn validate_schema(schema: &Schema, options: &GeneratorOptions) -> Result<(), GeneratorError> {
    options.validate()?;
    let resolver = TypeResolver::new(schema, options);

    for def in &schema.types {
        validate_type(&resolver, def)?;
    }

    let mut methods = BTreeSet::new();
    for resource in &schema.resources {
        let name = naming::method_name(resource);
        if name.is_empty()
            || RESERVED_METHODS.contains(&name.as_str())
            || !methods.insert(name.clone())
        {
            return Err(GeneratorError::DuplicateMethod(name));
        }
        validate_resource(&resolver, resource, &name)?;
    }
    Ok(())
}

fn validate_type(resolver: &TypeResolver<'_>, def: &TypeDef) -> Result<(), GeneratorError> {
    resolver.base_type(def.name())?;
    match def {
        TypeDef::Struct(_) => {
            let mut idents = BTreeSet::new();
            for field in resolver.flattened_fields(def.name())? {
                resolver.base_type(&field.type_name)?;
                let inner = [field.items.as_deref(), field.keys.as_deref()];
                for inner in inner.into_iter().flatten() {
                    resolver.base_type(inner)?;
                }
                if field.type_name == def.name() {
                    return Err(GeneratorError::CodeGen(format!(
                        "Struct '{}' contains itself through field '{}'",
                        def.name(),
                        field.name
                    )));
                }
                if !idents.insert(naming::field_ident(&field.name).to_string()) {
                    return Err(GeneratorError::CodeGen(format!(
                        "Struct '{}': field '{}' collides with another field's name",
                        def.name(),
                        field.name
                    )));
                }
            }
        }
        TypeDef::Enum(enum_def) => {
            if enum_def.elements.is_empty() {
                return Err(GeneratorError::CodeGen(format!(
                    "Enum '{}' has no members",
                    enum_def.name
                )));
            }
            let prefix_enums = resolver.options().prefix_enums;
            let mut variants = BTreeSet::new();
            for element in &enum_def.elements {
                let variant = naming::variant_ident(&enum_def.name, &element.symbol, prefix_enums);
                if !variants.insert(variant.to_string()) {
                    return Err(GeneratorError::CodeGen(format!(
                        "Enum '{}': symbol '{}' collides with another member as '{}'",
                        enum_def.name, element.symbol, variant
                    )));
                }
            }
        }
        TypeDef::Array(_) => {
            if let Some(items) = resolver.array_items(def.name())? {
                resolver.base_type(items)?;
            }
        }
        TypeDef::Map(_) => {
            resolver.map_types(def.name())?;
        }
        TypeDef::Alias(_) | TypeDef::StringAlias(_) | TypeDef::NumberAlias(_) => {}
    }
    Ok(())
}

fn validate_resource(
    resolver: &TypeResolver<'_>,
    resource: &Resource,
    name: &str,
) -> Result<(), GeneratorError> {
    if let Some(type_name) = resource.type_name.as_deref() {
        resolver.base_type(type_name)?;
    }

    let mut idents = BTreeSet::new();
    let mut headers = BTreeSet::new();
    for input in &resource.inputs {
        resolver.base_type(&input.type_name)?;
        if matches!(input.role(), InputRole::Query(_)) && resolver.is_array(&input.type_name)? {
            params::check_list_items(resolver, name, input)?;
        }
        if !idents.insert(naming::param_ident(&input.name).to_string()) {
            return Err(GeneratorError::CodeGen(format!(
                "Resource '{}': more than one input named '{}'",
                name, input.name
            )));
        }
        if let InputRole::Header(header) = input.role()
            && !headers.insert(header.to_ascii_lowercase())
        {
            return Err(GeneratorError::CodeGen(format!(
                "Resource '{}': header '{}' is bound to more than one input",
                name, header
            )));
        }
    }

    let mut outputs = BTreeSet::new();
    for output in &resource.outputs {
        if resolver.scalar_kind(&output.type_name)?.is_none() {
            return Err(GeneratorError::UnsupportedParamType {
                resource: name.to_string(),
                name: output.name.clone(),
                type_name: output.type_name.clone(),
                location: "output",
            });
        }
        if !outputs.insert(naming::param_ident(&output.name).to_string()) {
            return Err(GeneratorError::CodeGen(format!(
                "Resource '{}': more than one output named '{}'",
                name, output.name
            )));
        }
    }
    Ok(())
}
