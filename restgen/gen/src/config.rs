//! Generator options.
//!
//! [`GeneratorOptions`] is built once per run and passed by reference into
//! every stage of generation; no stage keeps options of its own.

use std::path::{Path, PathBuf};

use restgen_define::Schema;

use crate::errors::GeneratorError;
use crate::naming;

/// Default crate path the emitted client imports runtime items from.
pub const DEFAULT_RUNTIME: &str = "restgen_runtime";

/// Default generator name written into the header comment.
pub const DEFAULT_BANNER: &str = "restgen";

/// Options controlling one generation run.
///
/// ## Examples
///
/// ```
/// use std::path::Path;
/// use restgen_define::Schema;
/// use restgen_gen::config::GeneratorOptions;
///
/// let schema = Schema::from_json_str(r#"{"name": "Contacts"}"#).unwrap();
///
/// let options = GeneratorOptions::default().with_outdir("out");
/// assert_eq!(
///     options.output_path(&schema).unwrap(),
///     Path::new("out/contacts_client.rs")
/// );
///
/// let options = GeneratorOptions::default().with_outdir("src/client.rs");
/// assert_eq!(options.output_path(&schema).unwrap(), Path::new("src/client.rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Target file (`*.rs`) or directory. `None` writes to stdout.
    pub outdir: Option<PathBuf>,
    /// Overrides the emitted module name.
    pub namespace: Option<String>,
    /// Path of the runtime crate, e.g. `restgen_runtime` or `crate::runtime`.
    pub runtime: String,
    /// Prefix enum variant identifiers with the enum name.
    pub prefix_enums: bool,
    /// Use `Option<T>` for every optional struct field.
    pub precise: bool,
    /// Generator name written into the header comment.
    pub banner: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            outdir: None,
            namespace: None,
            runtime: DEFAULT_RUNTIME.to_string(),
            prefix_enums: false,
            precise: false,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_outdir(mut self, outdir: impl Into<PathBuf>) -> Self {
        self.outdir = Some(outdir.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_prefix_enums(mut self, prefix_enums: bool) -> Self {
        self.prefix_enums = prefix_enums;
        self
    }

    pub fn with_precise(mut self, precise: bool) -> Self {
        self.precise = precise;
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Resolves where the generated file goes.
    ///
    /// An `outdir` ending in `.rs` is the file itself; any other path is a
    /// directory that receives `<lowercase name>_client.rs`. Returns `None`
    /// when output goes to stdout.
    pub fn output_path(&self, schema: &Schema) -> Option<PathBuf> {
        let outdir = self.outdir.as_deref()?;
        if is_file_target(outdir) {
            return Some(outdir.to_path_buf());
        }
        Some(outdir.join(format!("{}_client.rs", schema.name.to_lowercase())))
    }

    /// Parses the runtime crate path.
    pub fn runtime_path(&self) -> Result<syn::Path, GeneratorError> {
        syn::parse_str(&self.runtime).map_err(|e| {
            GeneratorError::Config(format!("Invalid runtime path '{}': {}", self.runtime, e))
        })
    }

    /// Name of the emitted module.
    ///
    /// The namespace override wins, then the last segment of the schema
    /// namespace, then the lowercase schema name.
    pub fn module_name(&self, schema: &Schema) -> String {
        let raw = match (&self.namespace, &schema.namespace) {
            (Some(ns), _) => ns.clone(),
            (None, Some(ns)) => ns.rsplit('.').next().unwrap_or(ns).to_string(),
            (None, None) => schema.name.to_lowercase(),
        };
        naming::snake_case(&raw)
    }

    /// Checks option values that can be rejected before generation starts.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.runtime_path()?;
        if self.banner.contains('\n') {
            return Err(GeneratorError::Config(
                "Banner must be a single line".to_string(),
            ));
        }
        if let Some(ns) = &self.namespace
            && ns.trim().is_empty()
        {
            return Err(GeneratorError::Config("Namespace must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Returns `true` when `path` names a file rather than a directory.
pub fn is_file_target(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(json: &str) -> Schema {
        Schema::from_json_str(json).unwrap()
    }

    #[test]
    fn defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.runtime, "restgen_runtime");
        assert_eq!(options.banner, "restgen");
        assert!(!options.precise);
        assert!(!options.prefix_enums);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn stdout_when_no_outdir() {
        let schema = schema(r#"{"name": "Contacts"}"#);
        assert_eq!(GeneratorOptions::default().output_path(&schema), None);
    }

    #[test]
    fn module_name_resolution_order() {
        let with_ns = schema(r#"{"name": "Contacts", "namespace": "com.example.addressBook"}"#);
        let without_ns = schema(r#"{"name": "Contacts"}"#);

        let options = GeneratorOptions::default();
        assert_eq!(options.module_name(&with_ns), "address_book");
        assert_eq!(options.module_name(&without_ns), "contacts");

        let options = GeneratorOptions::default().with_namespace("people");
        assert_eq!(options.module_name(&with_ns), "people");
    }

    #[test]
    fn runtime_path_accepts_crate_paths() {
        let options = GeneratorOptions::default().with_runtime("crate::runtime");
        assert!(options.runtime_path().is_ok());
    }

    #[test]
    fn invalid_runtime_path_is_config_error() {
        let options = GeneratorOptions::default().with_runtime("not a path");
        assert!(matches!(options.validate(), Err(GeneratorError::Config(_))));
    }

    #[test]
    fn multiline_banner_is_rejected() {
        let options = GeneratorOptions::default().with_banner("a\nb");
        assert!(matches!(options.validate(), Err(GeneratorError::Config(_))));
    }

    #[test]
    fn file_target_detection() {
        assert!(is_file_target(Path::new("src/client.rs")));
        assert!(!is_file_target(Path::new("src/generated")));
    }
}
