//! Model generation from GraphQL introspection schemas.
//!
//! This crate turns an introspected [`Schema`] into one source file of
//! strongly typed definitions for:
//! - C# (Newtonsoft.Json data classes)
//! - Java (Jackson classes nested in a holder class)
//!
//! # Example
//!
//! ```
//! use gqlmodel_codegen::{CodeGenerator, CodegenOptions, Language};
//! use gqlmodel_schema::parse_schema;
//!
//! let schema = parse_schema(r#"{ "types": [
//!     { "kind": "ENUM", "name": "ItemType",
//!       "enumValues": [{ "name": "PAGE" }, { "name": "COMPONENT" }] }
//! ] }"#)?;
//!
//! let options = CodegenOptions::new("Sdl.Web", Language::CSharp);
//! let generated = CodeGenerator::with_options(&schema, options).generate()?;
//! assert!(generated.code.contains("public enum ItemType"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod csharp;
mod emit;
mod error;
mod java;
mod remap;
mod render;
mod target;

#[cfg(test)]
mod test_support;

pub use error::GenerateError;
pub use java::holder_name;
pub use remap::{RemapTable, CONTENT_NAMESPACE};
pub use render::{UnwrapError, MAX_TYPE_DEPTH};

use chrono::{DateTime, Utc};
use gqlmodel_core::DiagnosticBag;
use gqlmodel_schema::Schema;
use java::DEFAULT_HOLDER;
use std::path::Path;

/// Target language for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    CSharp,
    Java,
}

impl Language {
    /// Picks a language from a file extension (`cs` or `java`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "cs" => Some(Self::CSharp),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// Picks a language from an output path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Indentation of emitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tabs,
    Spaces(usize),
}

impl IndentStyle {
    /// One level of indentation.
    pub fn unit(self) -> String {
        match self {
            Self::Tabs => "\t".to_string(),
            Self::Spaces(n) => " ".repeat(n),
        }
    }
}

/// Code generation options.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Namespace (C#) or package (Java) of the generated file.
    pub namespace: String,
    /// Output language.
    pub language: Language,
    /// Indentation of emitted code.
    pub indent: IndentStyle,
    /// Field type overrides, applied by field name.
    pub remap: RemapTable,
    /// Time written into the header line.
    pub generated_at: DateTime<Utc>,
    /// Outer class wrapping all Java definitions.
    pub holder_name: String,
    /// Skip types of unsupported kinds (such as unions) instead of failing.
    pub skip_unsupported: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self::new("Generated", Language::CSharp)
    }
}

impl CodegenOptions {
    /// Options for `language` with its built-in remap rules.
    pub fn new(namespace: impl Into<String>, language: Language) -> Self {
        Self {
            namespace: namespace.into(),
            language,
            indent: IndentStyle::Tabs,
            remap: RemapTable::for_language(language),
            generated_at: Utc::now(),
            holder_name: DEFAULT_HOLDER.to_string(),
            skip_unsupported: false,
        }
    }

    /// Header timestamp text.
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Result of a successful generation run.
#[derive(Debug)]
pub struct Generated {
    /// The complete output file.
    pub code: String,
    /// Non-fatal findings.
    pub diagnostics: DiagnosticBag,
    /// Number of type definitions written.
    pub emitted: usize,
}

/// Main code generator.
pub struct CodeGenerator<'a> {
    schema: &'a Schema,
    options: CodegenOptions,
}

impl<'a> CodeGenerator<'a> {
    /// Creates a new code generator with options.
    pub fn with_options(schema: &'a Schema, options: CodegenOptions) -> Self {
        Self { schema, options }
    }

    /// Generates the model file.
    ///
    /// # Errors
    ///
    /// Returns the first schema shape problem found; no partial output is
    /// produced.
    pub fn generate(&self) -> Result<Generated, GenerateError> {
        match self.options.language {
            Language::CSharp => emit::generate(&csharp::CSharp, self.schema, &self.options),
            Language::Java => emit::generate(&java::Java, self.schema, &self.options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codegen_options_default() {
        let options = CodegenOptions::default();
        assert_eq!(options.language, Language::CSharp);
        assert_eq!(options.indent, IndentStyle::Tabs);
        assert_eq!(options.remap.len(), 3);
        assert!(!options.skip_unsupported);
    }

    #[test]
    fn test_language_from_path() {
        assert_eq!(
            Language::from_path(Path::new("out/model.cs")),
            Some(Language::CSharp)
        );
        assert_eq!(
            Language::from_path(Path::new("Model.JAVA")),
            Some(Language::Java)
        );
        assert_eq!(Language::from_path(Path::new("model.ts")), None);
        assert_eq!(Language::from_path(Path::new("model")), None);
    }

    #[test]
    fn test_indent_unit() {
        assert_eq!(IndentStyle::Tabs.unit(), "\t");
        assert_eq!(IndentStyle::Spaces(4).unit(), "    ");
    }
}
