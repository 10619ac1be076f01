//! Self-contained code fragments.
//!
//! Each synthesis step returns a [`Fragment`]: the tokens it produced plus
//! the module-level helpers and runtime imports those tokens refer to. The
//! orchestrator merges the requirements and emits exactly what was asked for.

use std::collections::BTreeSet;

use proc_macro2::{Ident, TokenStream};
use quote::format_ident;
use restgen_define::RestMethod;

use crate::resolver::ValueKind;

/// Items imported from the runtime crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuntimeItem {
    ClientError,
    ResourceError,
    EncodeListParam,
    HeaderValue,
    ParseHeaderValue,
    QueryEscape,
}

impl RuntimeItem {
    pub fn ident(self) -> Ident {
        match self {
            Self::ClientError => format_ident!("ClientError"),
            Self::ResourceError => format_ident!("ResourceError"),
            Self::EncodeListParam => format_ident!("encode_list_param"),
            Self::HeaderValue => format_ident!("header_value"),
            Self::ParseHeaderValue => format_ident!("parse_header_value"),
            Self::QueryEscape => format_ident!("query_escape"),
        }
    }
}

/// Module-level helpers emitted alongside the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Helper {
    /// `encode_string_param(name, val, def)`, empty when `val == def`.
    /// Enums pass their symbol.
    ElidingString,
    /// `encode_<kind>_param(name, val, def)`, empty when `val == def`.
    Eliding(ValueKind),
    /// `encode_optional_<kind>_param(name, val)`, empty when `None`.
    Optional(ValueKind),
    /// `encode_optional_enum_param(name, val)`, the symbol or nothing.
    OptionalEnum,
    /// `encode_params(&[..])`, joins fragments into a query string.
    Params,
    /// `http_<method>` on the client.
    Http(RestMethod),
}

impl Helper {
    pub fn ident(self) -> Ident {
        match self {
            Self::ElidingString => format_ident!("encode_string_param"),
            Self::Eliding(kind) => format_ident!("encode_{}_param", kind.scalar().helper_name()),
            Self::Optional(kind) => {
                format_ident!("encode_optional_{}_param", kind.scalar().helper_name())
            }
            Self::OptionalEnum => format_ident!("encode_optional_enum_param"),
            Self::Params => format_ident!("encode_params"),
            Self::Http(method) => {
                format_ident!("http_{}", method.to_string().to_lowercase())
            }
        }
    }
}

/// Generated tokens with the helpers and runtime items they depend on.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub tokens: TokenStream,
    pub helpers: BTreeSet<Helper>,
    pub runtime: BTreeSet<RuntimeItem>,
}

impl Fragment {
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    pub fn with_helper(mut self, helper: Helper) -> Self {
        self.helpers.insert(helper);
        self
    }

    pub fn with_runtime(mut self, item: RuntimeItem) -> Self {
        self.runtime.insert(item);
        self
    }

    /// Takes over `other`'s requirements and hands back its tokens.
    pub fn absorb(&mut self, other: Fragment) -> TokenStream {
        self.helpers.extend(other.helpers);
        self.runtime.extend(other.runtime);
        other.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn helper_idents() {
        assert_eq!(
            Helper::Eliding(ValueKind::Int32).ident().to_string(),
            "encode_int32_param"
        );
        assert_eq!(Helper::ElidingString.ident().to_string(), "encode_string_param");
        assert_eq!(
            Helper::Optional(ValueKind::Float64).ident().to_string(),
            "encode_optional_float64_param"
        );
        assert_eq!(
            Helper::OptionalEnum.ident().to_string(),
            "encode_optional_enum_param"
        );
        assert_eq!(Helper::Http(RestMethod::Patch).ident().to_string(), "http_patch");
    }

    #[test]
    fn absorb_merges_requirements() {
        let mut outer = Fragment::default().with_runtime(RuntimeItem::ClientError);
        let inner = Fragment::new(quote!(a))
            .with_helper(Helper::Params)
            .with_runtime(RuntimeItem::EncodeListParam);

        let tokens = outer.absorb(inner);

        assert_eq!(tokens.to_string(), "a");
        assert!(outer.helpers.contains(&Helper::Params));
        assert_eq!(outer.runtime.len(), 2);
    }
}
