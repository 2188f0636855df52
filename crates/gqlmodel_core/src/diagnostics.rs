//! Diagnostic reporting for gqlmodel.
//!
//! Fatal schema problems abort generation through the generator's error type.
//! Everything the generator can still emit correct code for is recorded here
//! instead, so callers can surface it without failing the run.

use std::fmt;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// A warning that doesn't prevent generation.
    Warning,
    /// An informational message.
    Info,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// A label attached to a diagnostic.
///
/// Introspection results carry no source positions, so labels point at a
/// schema path such as `Article` or `Article.namespaceId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// The schema path this label points to.
    pub path: String,
    /// The label message.
    pub message: String,
}

impl Label {
    /// Creates a new label.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A diagnostic message.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: DiagnosticSeverity,
    /// Diagnostic code.
    pub code: String,
    /// Short title.
    pub title: String,
    /// Labels pointing to schema paths.
    pub labels: Vec<Label>,
}

impl Diagnostic {
    fn with_severity(
        severity: DiagnosticSeverity,
        code: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            title: title.into(),
            labels: Vec::new(),
        }
    }

    /// Creates a new warning diagnostic.
    pub fn warning(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_severity(DiagnosticSeverity::Warning, code, title)
    }

    /// Creates a new informational diagnostic.
    pub fn info(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_severity(DiagnosticSeverity::Info, code, title)
    }

    /// Adds a primary label at a schema path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(path, message));
        self
    }

    /// Returns the primary path, if any.
    pub fn primary_path(&self) -> Option<&str> {
        self.labels.first().map(|l| l.path.as_str())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.title)?;
        if let Some(path) = self.primary_path() {
            write!(f, " ({path})")?;
        }
        Ok(())
    }
}

/// A collection of diagnostics.
#[derive(Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    /// Creates a new empty diagnostic bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Adds a warning diagnostic.
    pub fn warning(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.add(Diagnostic::warning(code, title).with_path(path, message));
    }

    /// Adds an informational diagnostic.
    pub fn info(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.add(Diagnostic::info(code, title).with_path(path, message));
    }

    /// Returns an iterator over all diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Returns an iterator over warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
    }

    /// Returns true if there are no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Diagnostic codes raised during generation.
pub mod codes {
    /// A type of an unsupported kind was skipped.
    pub const SKIPPED_UNSUPPORTED_KIND: &str = "W0001";
    /// An interface has no implementors, so its body was left empty.
    pub const INTERFACE_WITHOUT_IMPLEMENTORS: &str = "I0001";
    /// A field's declared type was replaced by a remap rule.
    pub const FIELD_REMAPPED: &str = "I0002";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_bag() {
        let mut bag = DiagnosticBag::new();
        bag.warning("W001", "test warning", "Query", "details");
        bag.info("I001", "test info", "Query.field", "details");

        assert_eq!(bag.len(), 2);
        assert_eq!(bag.warnings().count(), 1);
    }

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::info(codes::FIELD_REMAPPED, "Field type remapped")
            .with_path("Article.namespaceId", "declared type replaced")
            .with_path("Article", "owner");

        assert_eq!(diag.severity, DiagnosticSeverity::Info);
        assert_eq!(diag.primary_path(), Some("Article.namespaceId"));
        assert_eq!(diag.labels[0].message, "declared type replaced");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning(codes::SKIPPED_UNSUPPORTED_KIND, "Skipped union")
            .with_path("SearchResult", "UNION");
        assert_eq!(diag.to_string(), "warning[W0001]: Skipped union (SearchResult)");

        let bare = Diagnostic::info("I0009", "Nothing to point at");
        assert_eq!(bare.to_string(), "info[I0009]: Nothing to point at");
    }
}
