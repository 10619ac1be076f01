//! Shared test fixtures for restgen-gen tests.

use proc_macro2::TokenStream;
use quote::quote;
use restgen_define::{Input, Resource, Schema};

/// A small contacts service exercising every kind of type definition.
pub fn contacts_schema() -> Schema {
    Schema::from_json_str(
        r#"{
            "name": "Contacts",
            "namespace": "com.example.contacts",
            "types": [
                {"StringTypeDef": {"type": "String", "name": "ContactId"}},
                {"EnumTypeDef": {"name": "Color", "elements": [
                    {"symbol": "RED"}, {"symbol": "GREEN"}, {"symbol": "BLUE"}
                ]}},
                {"ArrayTypeDef": {"type": "Array", "name": "TagList", "items": "String"}},
                {"StructTypeDef": {"type": "Struct", "name": "Contact", "comment": "One address book entry.", "fields": [
                    {"name": "id", "type": "ContactId"},
                    {"name": "firstName", "type": "String"},
                    {"name": "email", "type": "String", "optional": true},
                    {"name": "age", "type": "Int32", "optional": true},
                    {"name": "tags", "type": "TagList", "optional": true},
                    {"name": "color", "type": "Color"}
                ]}},
                {"ArrayTypeDef": {"type": "Array", "name": "ContactList", "items": "Contact"}}
            ]
        }"#,
    )
    .unwrap()
}

pub fn input(json: &str) -> Input {
    serde_json::from_str(json).unwrap()
}

pub fn resource(json: &str) -> Resource {
    serde_json::from_str(json).unwrap()
}

/// Compact token text, e.g. `Option < i32 >`.
pub fn tokens_str(tokens: TokenStream) -> String {
    tokens.to_string()
}

/// Formats a whole file of items.
pub fn format_file(tokens: &TokenStream) -> String {
    let file: syn::File = syn::parse2(tokens.clone()).unwrap();
    prettyplease::unparse(&file)
}

/// Formats associated items by placing them in an impl block.
pub fn format_items(tokens: &TokenStream) -> String {
    format_file(&quote! {
        impl __Test {
            #tokens
        }
    })
}

/// Formats statements by placing them in a method body.
pub fn format_statements(tokens: &TokenStream) -> String {
    format_items(&quote! {
        async fn __test(&self) {
            #tokens
        }
    })
}
