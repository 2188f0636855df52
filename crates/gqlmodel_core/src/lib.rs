//! Core utilities for gqlmodel.
//!
//! This crate provides foundational pieces shared by the schema loader,
//! the generator and the CLI:
//! - `case`: Identifier normalization
//! - `diagnostics`: Non-fatal generation reports

pub mod case;
pub mod diagnostics;

pub use case::{capitalize, pascal_case};
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticSeverity, Label};
