//! C# output: Newtonsoft.Json friendly data classes.

use crate::target::{MemberStyle, Role, Target, TypeConverter};
use crate::CodegenOptions;
use gqlmodel_core::pascal_case;

/// C# target.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CSharp;

impl TypeConverter for CSharp {
    fn convert_scalar(&self, name: &str, _boxed: bool) -> Option<&'static str> {
        match name {
            "String" | "ID" => Some("string"),
            "Int" => Some("int"),
            "Long" => Some("long"),
            "Float" => Some("double"),
            "Boolean" => Some("bool"),
            _ => None,
        }
    }

    fn list_of(&self, element: &str) -> String {
        format!("List<{element}>")
    }
}

impl Target for CSharp {
    fn header(&self, options: &CodegenOptions) -> String {
        format!(
            "// This file was generated by a tool on {}\n\
             using System.Collections;\n\
             using System.Collections.Generic;\n\
             using Newtonsoft.Json;\n\
             using Newtonsoft.Json.Converters;\n\
             \n\
             namespace {}\n\
             {{\n",
            options.timestamp(),
            options.namespace
        )
    }

    fn comment(&self, text: &str, indent: &str) -> String {
        let mut out = format!("{indent}/// <summary>\n");
        for line in text.lines().map(str::trim_end) {
            if line.is_empty() {
                out.push_str(&format!("{indent}///\n"));
            } else {
                out.push_str(&format!("{indent}/// {}\n", escape_xml(line)));
            }
        }
        out.push_str(&format!("{indent}/// </summary>\n"));
        out
    }

    fn enum_directive(&self) -> &'static str {
        "[JsonConverter(typeof(StringEnumConverter))]"
    }

    fn declaration(&self, role: Role, name: &str, interfaces: &[&str]) -> String {
        let keyword = match role {
            Role::Class => "class",
            Role::Interface => "interface",
            Role::Enumeration => "enum",
        };
        if interfaces.is_empty() {
            format!("public {keyword} {name}")
        } else {
            format!("public {keyword} {name} : {}", interfaces.join(", "))
        }
    }

    fn property(&self, name: &str, ty: &str, style: MemberStyle, indent: &str) -> String {
        let visibility = match style {
            MemberStyle::Storage => "public ",
            MemberStyle::Signature => "",
        };
        format!(
            "{indent}{visibility}{ty} {} {{ get; set; }}\n",
            pascal_case(name)
        )
    }

    fn enum_value(&self, name: &str) -> String {
        pascal_case(name)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(CSharp.convert_scalar("ID", false), Some("string"));
        assert_eq!(CSharp.convert_scalar("Boolean", true), Some("bool"));
        assert_eq!(CSharp.convert_scalar("Float", false), Some("double"));
        assert_eq!(CSharp.convert_scalar("Json", false), None);
    }

    #[test]
    fn test_declaration_interface_counts() {
        assert_eq!(
            CSharp.declaration(Role::Class, "Page", &[]),
            "public class Page"
        );
        assert_eq!(
            CSharp.declaration(Role::Class, "Page", &["Item"]),
            "public class Page : Item"
        );
        assert_eq!(
            CSharp.declaration(Role::Class, "Page", &["Item", "Node", "Entity"]),
            "public class Page : Item, Node, Entity"
        );
        assert_eq!(
            CSharp.declaration(Role::Enumeration, "ItemType", &[]),
            "public enum ItemType"
        );
    }

    #[test]
    fn test_property_styles() {
        assert_eq!(
            CSharp.property("itemId", "int", MemberStyle::Storage, "\t\t"),
            "\t\tpublic int ItemId { get; set; }\n"
        );
        assert_eq!(
            CSharp.property("itemId", "int", MemberStyle::Signature, "\t\t"),
            "\t\tint ItemId { get; set; }\n"
        );
    }

    #[test]
    fn test_multiline_comment() {
        assert_eq!(
            CSharp.comment("First line\nSecond <b>line</b>", "\t"),
            "\t/// <summary>\n\t/// First line\n\t/// Second &lt;b&gt;line&lt;/b&gt;\n\t/// </summary>\n"
        );
    }

    #[test]
    fn test_blank_comment_line_has_no_trailing_space() {
        assert_eq!(
            CSharp.comment("Title\n\nBody", ""),
            "/// <summary>\n/// Title\n///\n/// Body\n/// </summary>\n"
        );
    }
}
