//! Per-type dispatch and emission.
//!
//! Each function here returns a finished text fragment; [`generate`] only
//! concatenates them in schema order.

use crate::render::render_type;
use crate::target::{MemberStyle, Role, Target};
use crate::{CodegenOptions, GenerateError, Generated};
use gqlmodel_core::diagnostics::codes;
use gqlmodel_core::DiagnosticBag;
use gqlmodel_schema::{EnumValue, Field, FullType, InputValue, Schema, TypeKind, TypeRef};
use rustc_hash::FxHashSet;

/// A field or input field, reduced to what emission needs.
struct Member<'a> {
    name: &'a str,
    description: Option<&'a str>,
    ty: &'a TypeRef,
}

impl<'a> From<&'a Field> for Member<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            name: &field.name,
            description: field.description.as_deref(),
            ty: &field.ty,
        }
    }
}

impl<'a> From<&'a InputValue> for Member<'a> {
    fn from(value: &'a InputValue) -> Self {
        Self {
            name: &value.name,
            description: value.description.as_deref(),
            ty: &value.ty,
        }
    }
}

pub(crate) fn generate<T: Target>(
    target: &T,
    schema: &Schema,
    options: &CodegenOptions,
) -> Result<Generated, GenerateError> {
    check_names(schema)?;

    let emitter = Emitter { target, options };
    let mut diagnostics = DiagnosticBag::new();
    let mut code = target.header(options);
    let mut emitted = 0;

    for ty in &schema.types {
        if let Some(fragment) = emitter.emit_type(ty, 1, &mut diagnostics)? {
            code.push_str(&fragment);
            emitted += 1;
        }
    }
    code.push_str(&target.footer());

    tracing::info!(
        types = schema.types.len(),
        emitted,
        diagnostics = diagnostics.len(),
        "Generated model"
    );

    Ok(Generated {
        code,
        diagnostics,
        emitted,
    })
}

/// Type names must be non-empty and unique.
fn check_names(schema: &Schema) -> Result<(), GenerateError> {
    let mut seen = FxHashSet::default();
    for (index, ty) in schema.types.iter().enumerate() {
        if ty.name.trim().is_empty() {
            return Err(GenerateError::EmptyTypeName { index });
        }
        if !seen.insert(ty.name.as_str()) {
            return Err(GenerateError::DuplicateType {
                type_name: ty.name.clone(),
            });
        }
    }
    Ok(())
}

struct Emitter<'a, T> {
    target: &'a T,
    options: &'a CodegenOptions,
}

impl<T: Target> Emitter<'_, T> {
    fn indent(&self, depth: usize) -> String {
        self.options.indent.unit().repeat(depth)
    }

    /// Emits one type definition, or `None` when the type has no generated
    /// representation.
    fn emit_type(
        &self,
        ty: &FullType,
        depth: usize,
        diagnostics: &mut DiagnosticBag,
    ) -> Result<Option<String>, GenerateError> {
        if ty.is_introspection_type() {
            tracing::trace!(name = %ty.name, "Skipping introspection type");
            return Ok(None);
        }

        let inner = self.indent(depth + 1);
        let (role, body) = match ty.kind {
            TypeKind::Scalar => return Ok(None),
            TypeKind::Object => {
                let fields = required(ty.fields.as_deref()).ok_or_else(|| {
                    GenerateError::MissingFields {
                        type_name: ty.name.clone(),
                        kind: ty.kind,
                    }
                })?;
                let members = fields.iter().map(Member::from);
                let body =
                    self.emit_members(ty, members, MemberStyle::Storage, &inner, diagnostics)?;
                (Role::Class, body)
            }
            TypeKind::InputObject => {
                let fields = required(ty.input_fields.as_deref()).ok_or_else(|| {
                    GenerateError::MissingInputFields {
                        type_name: ty.name.clone(),
                    }
                })?;
                let members = fields.iter().map(Member::from);
                let body =
                    self.emit_members(ty, members, MemberStyle::Storage, &inner, diagnostics)?;
                (Role::Class, body)
            }
            TypeKind::Interface if ty.has_implementors() => {
                let fields = ty.fields.as_deref().ok_or_else(|| GenerateError::MissingFields {
                    type_name: ty.name.clone(),
                    kind: ty.kind,
                })?;
                let members = fields.iter().map(Member::from);
                let body =
                    self.emit_members(ty, members, MemberStyle::Signature, &inner, diagnostics)?;
                (Role::Interface, body)
            }
            TypeKind::Interface => {
                diagnostics.info(
                    codes::INTERFACE_WITHOUT_IMPLEMENTORS,
                    "Interface has no implementors",
                    &ty.name,
                    "emitted with an empty body",
                );
                (Role::Interface, Vec::new())
            }
            TypeKind::Enum => {
                let values = required(ty.enum_values.as_deref()).ok_or_else(|| {
                    GenerateError::MissingEnumValues {
                        type_name: ty.name.clone(),
                    }
                })?;
                (Role::Enumeration, self.emit_enum_values(values, &inner))
            }
            kind @ (TypeKind::Union | TypeKind::List | TypeKind::NonNull | TypeKind::Unknown) => {
                if self.options.skip_unsupported {
                    tracing::warn!(name = %ty.name, %kind, "Skipping type of unsupported kind");
                    diagnostics.warning(
                        codes::SKIPPED_UNSUPPORTED_KIND,
                        format!("Skipped {kind} type"),
                        &ty.name,
                        "no definition is generated for this kind",
                    );
                    return Ok(None);
                }
                return Err(GenerateError::UnsupportedKind {
                    type_name: ty.name.clone(),
                    kind,
                });
            }
        };

        let outer = self.indent(depth);
        let mut out = self.emit_comment(ty.description.as_deref(), &outer);
        if ty.kind == TypeKind::Enum {
            out.push_str(&format!("{outer}{}\n", self.target.enum_directive()));
        }
        let interfaces = self.interface_names(ty)?;
        out.push_str(&format!(
            "{outer}{}\n{outer}{{\n",
            self.target.declaration(role, &ty.name, &interfaces)
        ));
        out.push_str(&body.join("\n"));
        out.push_str(&format!("{outer}}}\n\n"));

        tracing::debug!(name = %ty.name, kind = %ty.kind, members = body.len(), "Emitted type");
        Ok(Some(out))
    }

    /// Names listed after the declaration. Only objects implement interfaces.
    fn interface_names<'t>(&self, ty: &'t FullType) -> Result<Vec<&'t str>, GenerateError> {
        if ty.kind != TypeKind::Object {
            return Ok(Vec::new());
        }
        ty.interfaces()
            .iter()
            .enumerate()
            .map(|(index, iface)| {
                iface
                    .name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| GenerateError::UnresolvedInterface {
                        type_name: ty.name.clone(),
                        index,
                    })
            })
            .collect()
    }

    fn emit_members<'m>(
        &self,
        owner: &FullType,
        members: impl Iterator<Item = Member<'m>>,
        style: MemberStyle,
        indent: &str,
        diagnostics: &mut DiagnosticBag,
    ) -> Result<Vec<String>, GenerateError> {
        // Interface members and the classes implementing them must agree on
        // a member's type even when an object narrows a field to non-null.
        let boxed = owner.kind == TypeKind::Interface || !owner.interfaces().is_empty();
        members
            .map(|member| {
                let ty = self.options.remap.apply(member.name, member.ty);
                if self.options.remap.get(member.name).is_some() {
                    diagnostics.info(
                        codes::FIELD_REMAPPED,
                        "Field type remapped",
                        format!("{}.{}", owner.name, member.name),
                        "declared type replaced by a remap rule",
                    );
                }
                let rendered = render_type(self.target, ty, boxed).map_err(|reason| {
                    GenerateError::UnresolvedType {
                        type_name: owner.name.clone(),
                        field_name: member.name.to_string(),
                        reason,
                    }
                })?;

                let mut out = self.emit_comment(member.description, indent);
                out.push_str(&self.target.property(member.name, &rendered, style, indent));
                Ok(out)
            })
            .collect()
    }

    /// Every value but the last carries a trailing separator.
    fn emit_enum_values(&self, values: &[EnumValue], indent: &str) -> Vec<String> {
        let last = values.len().saturating_sub(1);
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let separator = if i == last { "" } else { "," };
                let mut out = self.emit_comment(value.description.as_deref(), indent);
                out.push_str(&format!(
                    "{indent}{}{separator}\n",
                    self.target.enum_value(&value.name)
                ));
                out
            })
            .collect()
    }

    fn emit_comment(&self, text: Option<&str>, indent: &str) -> String {
        match text.map(str::trim) {
            Some(text) if !text.is_empty() => self.target.comment(text, indent),
            _ => String::new(),
        }
    }
}

/// A collection that must be present and non-empty.
fn required<T>(items: Option<&[T]>) -> Option<&[T]> {
    items.filter(|items| !items.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csharp::CSharp;
    use crate::test_support::*;

    fn emit(ty: &FullType) -> Result<Option<String>, GenerateError> {
        let options = CodegenOptions::default();
        let emitter = Emitter {
            target: &CSharp,
            options: &options,
        };
        emitter.emit_type(ty, 1, &mut DiagnosticBag::new())
    }

    #[test]
    fn test_skips_scalars_and_meta_types() {
        assert_eq!(emit(&scalar("String")).unwrap(), None);
        assert_eq!(emit(&scalar("DateTime")).unwrap(), None);

        let meta = object("__Type", vec![field("name", TypeRef::scalar("String"))]);
        assert_eq!(emit(&meta).unwrap(), None);
    }

    #[test]
    fn test_object_with_fields() {
        let ty = object(
            "Page",
            vec![
                field("title", TypeRef::scalar("String")),
                field("itemId", TypeRef::non_null(TypeRef::scalar("Int"))),
            ],
        );
        assert_eq!(
            emit(&ty).unwrap().unwrap(),
            "\tpublic class Page\n\
             \t{\n\
             \t\tpublic string Title { get; set; }\n\
             \n\
             \t\tpublic int ItemId { get; set; }\n\
             \t}\n\n"
        );
    }

    #[test]
    fn test_single_interface_is_listed() {
        let mut ty = object("Page", vec![field("id", TypeRef::scalar("ID"))]);
        ty.interfaces = Some(vec![TypeRef::named(TypeKind::Interface, "Item")]);
        let out = emit(&ty).unwrap().unwrap();
        assert!(out.starts_with("\tpublic class Page : Item\n"));
    }

    #[test]
    fn test_two_interfaces_are_listed() {
        let mut ty = object("Page", vec![field("id", TypeRef::scalar("ID"))]);
        ty.interfaces = Some(vec![
            TypeRef::named(TypeKind::Interface, "Item"),
            TypeRef::named(TypeKind::Interface, "Node"),
        ]);
        let out = emit(&ty).unwrap().unwrap();
        assert!(out.starts_with("\tpublic class Page : Item, Node\n"));
    }

    #[test]
    fn test_nameless_interface_is_an_error() {
        let mut ty = object("Page", vec![field("id", TypeRef::scalar("ID"))]);
        ty.interfaces = Some(vec![TypeRef {
            kind: TypeKind::Interface,
            name: None,
            of_type: None,
        }]);
        assert_eq!(
            emit(&ty).unwrap_err(),
            GenerateError::UnresolvedInterface {
                type_name: "Page".into(),
                index: 0
            }
        );
    }

    #[test]
    fn test_enum_separators() {
        let ty = enumeration("ContentType", &["PAGE", "COMPONENT", "KEYWORD"]);
        let out = emit(&ty).unwrap().unwrap();
        assert_eq!(
            out,
            "\t[JsonConverter(typeof(StringEnumConverter))]\n\
             \tpublic enum ContentType\n\
             \t{\n\
             \t\tPAGE,\n\
             \n\
             \t\tCOMPONENT,\n\
             \n\
             \t\tKEYWORD\n\
             \t}\n\n"
        );
    }

    #[test]
    fn test_single_value_enum_has_no_separator() {
        let out = emit(&enumeration("Only", &["ONE"])).unwrap().unwrap();
        assert!(out.contains("\t\tONE\n"));
        assert!(!out.contains("ONE,"));
    }

    #[test]
    fn test_interface_body_depends_on_implementors() {
        let mut iface = interface("Item", vec![field("id", TypeRef::scalar("ID"))]);
        let out = emit(&iface).unwrap().unwrap();
        assert_eq!(out, "\tpublic interface Item\n\t{\n\t}\n\n");

        iface.possible_types = Some(vec![TypeRef::object("Page")]);
        let out = emit(&iface).unwrap().unwrap();
        assert!(out.contains("\t\tstring Id { get; set; }\n"));
        assert!(!out.contains("public string Id"));
    }

    #[test]
    fn test_description_becomes_comment() {
        let mut ty = enumeration("Flag", &["ON"]);
        ty.description = Some("A switch".into());
        let out = emit(&ty).unwrap().unwrap();
        assert!(out.starts_with(
            "\t/// <summary>\n\t/// A switch\n\t/// </summary>\n\t[JsonConverter"
        ));

        ty.description = Some("   ".into());
        let out = emit(&ty).unwrap().unwrap();
        assert!(out.starts_with("\t[JsonConverter"));
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(
            emit(&object("Empty", Vec::new())).unwrap_err(),
            GenerateError::MissingFields {
                type_name: "Empty".into(),
                kind: TypeKind::Object
            }
        );

        let input = FullType::new(TypeKind::InputObject, "Filter");
        assert_eq!(
            emit(&input).unwrap_err(),
            GenerateError::MissingInputFields {
                type_name: "Filter".into()
            }
        );

        assert_eq!(
            emit(&enumeration("Nothing", &[])).unwrap_err(),
            GenerateError::MissingEnumValues {
                type_name: "Nothing".into()
            }
        );

        let mut iface = FullType::new(TypeKind::Interface, "Item");
        iface.possible_types = Some(vec![TypeRef::object("Page")]);
        assert!(matches!(
            emit(&iface).unwrap_err(),
            GenerateError::MissingFields { .. }
        ));
    }

    #[test]
    fn test_union_is_unsupported() {
        let union = FullType::new(TypeKind::Union, "SearchResult");
        assert_eq!(
            emit(&union).unwrap_err(),
            GenerateError::UnsupportedKind {
                type_name: "SearchResult".into(),
                kind: TypeKind::Union
            }
        );
    }

    #[test]
    fn test_unresolved_field_type() {
        let broken = TypeRef {
            kind: TypeKind::List,
            name: None,
            of_type: None,
        };
        let ty = object("Page", vec![field("children", broken)]);
        assert!(matches!(
            emit(&ty).unwrap_err(),
            GenerateError::UnresolvedType { ref type_name, ref field_name, .. }
                if type_name == "Page" && field_name == "children"
        ));
    }

    #[test]
    fn test_check_names() {
        let duplicated = schema(vec![scalar("String"), scalar("String")]);
        assert_eq!(
            check_names(&duplicated).unwrap_err(),
            GenerateError::DuplicateType {
                type_name: "String".into()
            }
        );

        let unnamed = schema(vec![scalar("String"), scalar("")]);
        assert_eq!(
            check_names(&unnamed).unwrap_err(),
            GenerateError::EmptyTypeName { index: 1 }
        );
    }
}
