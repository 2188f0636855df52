//! The seam between the shared dispatcher and a concrete output language.

use crate::CodegenOptions;
use gqlmodel_schema::TypeKind;

/// Maps schema types to type expressions of a target language.
pub(crate) trait TypeConverter {
    /// Maps a built-in scalar. `boxed` asks for the nullable or
    /// generic-argument form where the language has one.
    fn convert_scalar(&self, name: &str, boxed: bool) -> Option<&'static str>;

    /// Wraps an element type expression in the language's sequence type.
    fn list_of(&self, element: &str) -> String;

    /// Renders a named type: scalars through [`Self::convert_scalar`],
    /// everything else by its schema name.
    fn convert_named(&self, kind: TypeKind, name: &str, boxed: bool) -> String {
        let builtin = match kind {
            TypeKind::Scalar => self.convert_scalar(name, boxed),
            _ => None,
        };
        builtin.map_or_else(|| name.to_string(), str::to_string)
    }
}

/// What kind of declaration a schema type becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    /// Data class (`OBJECT`, `INPUT_OBJECT`).
    Class,
    /// Capability interface (`INTERFACE`).
    Interface,
    /// Enumeration (`ENUM`).
    Enumeration,
}

/// How a member is declared inside its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberStyle {
    /// Public, mutable storage on a class.
    Storage,
    /// Signature only, as required inside an interface.
    Signature,
}

/// Text emission for one output language.
///
/// Every method returns a finished fragment; `indent` is the full leading
/// whitespace for the lines it produces.
pub(crate) trait Target: TypeConverter {
    /// File preamble up to and including the opening brace of the
    /// namespace or holder.
    fn header(&self, options: &CodegenOptions) -> String;

    /// Closes what [`Self::header`] opened.
    fn footer(&self) -> String {
        "}\n".to_string()
    }

    /// Documentation comment lines for `text`, which is never blank.
    fn comment(&self, text: &str, indent: &str) -> String;

    /// Marks an enumeration as serialized by name.
    fn enum_directive(&self) -> &'static str;

    /// Declaration line, e.g. `public class Article : Item`.
    fn declaration(&self, role: Role, name: &str, interfaces: &[&str]) -> String;

    /// One member, ending with a newline.
    fn property(&self, name: &str, ty: &str, style: MemberStyle, indent: &str) -> String;

    /// Identifier for an enum value.
    fn enum_value(&self, name: &str) -> String;
}
