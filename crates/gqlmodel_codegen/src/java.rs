//! Java output: Jackson friendly classes nested in one holder class, so the
//! whole model stays a single compilation unit.

use crate::target::{MemberStyle, Role, Target, TypeConverter};
use crate::CodegenOptions;
use gqlmodel_core::pascal_case;

/// Holder class name used when none is configured.
pub(crate) const DEFAULT_HOLDER: &str = "Model";

const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Java target.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Java;

impl TypeConverter for Java {
    fn convert_scalar(&self, name: &str, boxed: bool) -> Option<&'static str> {
        let (primitive, object) = match name {
            "String" | "ID" => return Some("String"),
            "Int" => ("int", "Integer"),
            "Long" => ("long", "Long"),
            "Float" => ("double", "Double"),
            "Boolean" => ("boolean", "Boolean"),
            _ => return None,
        };
        Some(if boxed { object } else { primitive })
    }

    fn list_of(&self, element: &str) -> String {
        format!("List<{element}>")
    }
}

impl Target for Java {
    fn header(&self, options: &CodegenOptions) -> String {
        format!(
            "// This file was generated by a tool on {}\n\
             package {};\n\
             \n\
             import java.util.List;\n\
             \n\
             import com.fasterxml.jackson.annotation.JsonFormat;\n\
             import com.fasterxml.jackson.annotation.JsonProperty;\n\
             \n\
             public final class {}\n\
             {{\n",
            options.timestamp(),
            options.namespace,
            options.holder_name
        )
    }

    fn comment(&self, text: &str, indent: &str) -> String {
        let mut out = format!("{indent}/**\n");
        for line in text.lines().map(str::trim_end) {
            if line.is_empty() {
                out.push_str(&format!("{indent} *\n"));
            } else {
                out.push_str(&format!("{indent} * {}\n", line.replace("*/", "*&#47;")));
            }
        }
        out.push_str(&format!("{indent} */\n"));
        out
    }

    fn enum_directive(&self) -> &'static str {
        "@JsonFormat(shape = JsonFormat.Shape.STRING)"
    }

    fn declaration(&self, role: Role, name: &str, interfaces: &[&str]) -> String {
        let keyword = match role {
            Role::Class => "static class",
            Role::Interface => "interface",
            Role::Enumeration => "enum",
        };
        if interfaces.is_empty() {
            format!("public {keyword} {name}")
        } else {
            format!("public {keyword} {name} implements {}", interfaces.join(", "))
        }
    }

    fn property(&self, name: &str, ty: &str, style: MemberStyle, indent: &str) -> String {
        let accessor = pascal_case(name);
        let field = identifier(name);
        match style {
            MemberStyle::Storage => {
                let mut out = String::new();
                if field != name {
                    out.push_str(&format!("{indent}@JsonProperty(\"{name}\")\n"));
                }
                out.push_str(&format!("{indent}private {ty} {field};\n"));
                out.push_str(&format!(
                    "{indent}public {ty} get{accessor}() {{ return {field}; }}\n"
                ));
                out.push_str(&format!(
                    "{indent}public void set{accessor}({ty} {field}) {{ this.{field} = {field}; }}\n"
                ));
                out
            }
            MemberStyle::Signature => format!(
                "{indent}{ty} get{accessor}();\n{indent}void set{accessor}({ty} {field});\n"
            ),
        }
    }

    fn enum_value(&self, name: &str) -> String {
        identifier(name)
    }
}

/// Escapes Java reserved words by appending an underscore.
fn identifier(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Holder class name for an output file stem.
///
/// javac requires a public top-level class to be named exactly like its
/// file, so the stem is used as is and `None` is returned when it is not a
/// valid Java identifier.
#[must_use]
pub fn holder_name(stem: &str) -> Option<String> {
    let mut chars = stem.chars();
    let first = chars.next()?;
    let valid = (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !RESERVED.contains(&stem);
    valid.then(|| stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_box_when_asked() {
        assert_eq!(Java.convert_scalar("Int", false), Some("int"));
        assert_eq!(Java.convert_scalar("Int", true), Some("Integer"));
        assert_eq!(Java.convert_scalar("ID", false), Some("String"));
        assert_eq!(Java.convert_scalar("Boolean", true), Some("Boolean"));
        assert_eq!(Java.convert_scalar("Date", false), None);
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            Java.declaration(Role::Class, "Page", &["Item"]),
            "public static class Page implements Item"
        );
        assert_eq!(
            Java.declaration(Role::Interface, "Item", &[]),
            "public interface Item"
        );
    }

    #[test]
    fn test_storage_member() {
        assert_eq!(
            Java.property("itemId", "int", MemberStyle::Storage, "\t"),
            "\tprivate int itemId;\n\
             \tpublic int getItemId() { return itemId; }\n\
             \tpublic void setItemId(int itemId) { this.itemId = itemId; }\n"
        );
    }

    #[test]
    fn test_signature_member() {
        assert_eq!(
            Java.property("title", "String", MemberStyle::Signature, "\t"),
            "\tString getTitle();\n\tvoid setTitle(String title);\n"
        );
    }

    #[test]
    fn test_reserved_word_field() {
        let out = Java.property("default", "String", MemberStyle::Storage, "");
        assert!(out.starts_with("@JsonProperty(\"default\")\nprivate String default_;\n"));
        assert!(out.contains("public String getDefault() { return default_; }"));
    }

    #[test]
    fn test_holder_name_is_the_stem() {
        assert_eq!(holder_name("ContentModel").as_deref(), Some("ContentModel"));
        assert_eq!(holder_name("model").as_deref(), Some("model"));
        assert_eq!(holder_name("Pca_Types$1").as_deref(), Some("Pca_Types$1"));
    }

    #[test]
    fn test_holder_name_rejects_invalid_identifiers() {
        assert_eq!(holder_name("content-model"), None);
        assert_eq!(holder_name("PCA.types"), None);
        assert_eq!(holder_name("2024"), None);
        assert_eq!(holder_name("class"), None);
        assert_eq!(holder_name(""), None);
    }
}
