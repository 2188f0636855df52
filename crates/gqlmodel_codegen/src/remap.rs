//! Field type remapping.
//!
//! A few well-known content fields are declared as plain integers in the
//! schema but are far nicer to work with as enums. Rules match on the field
//! name alone and replace the declared type outright.

use crate::Language;
use gqlmodel_schema::TypeRef;
use indexmap::IndexMap;

/// Enum bound to `namespaceId` and `namespaceIds`.
pub const CONTENT_NAMESPACE: &str = "ContentNamespace";

/// Ordered set of field-name to replacement-type rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapTable {
    rules: IndexMap<String, TypeRef>,
}

impl RemapTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rules for a target language.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        let item_type = match language {
            Language::CSharp => "Sdl.Web.PublicContentApi.ItemType",
            Language::Java => "com.sdl.web.pca.client.contentmodel.enums.ItemType",
        };

        Self::new()
            .rule(
                "namespaceIds",
                TypeRef::list(TypeRef::enumeration(CONTENT_NAMESPACE)),
            )
            .rule("namespaceId", TypeRef::enumeration(CONTENT_NAMESPACE))
            .rule("itemType", TypeRef::enumeration(item_type))
    }

    /// Adds or replaces a rule, builder style.
    #[must_use]
    pub fn rule(mut self, field_name: impl Into<String>, replacement: TypeRef) -> Self {
        self.insert(field_name, replacement);
        self
    }

    /// Adds or replaces a rule.
    pub fn insert(&mut self, field_name: impl Into<String>, replacement: TypeRef) {
        self.rules.insert(field_name.into(), replacement);
    }

    /// Returns the replacement for `field_name`, if any.
    pub fn get(&self, field_name: &str) -> Option<&TypeRef> {
        self.rules.get(field_name)
    }

    /// Returns the type to emit for a field: the rule's replacement on a
    /// name match, otherwise the declared type.
    pub fn apply<'a>(&'a self, field_name: &str, declared: &'a TypeRef) -> &'a TypeRef {
        self.get(field_name).unwrap_or(declared)
    }

    /// Iterates rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeRef)> {
        self.rules.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlmodel_schema::TypeKind;

    #[test]
    fn test_builtin_rules_in_order() {
        let table = RemapTable::for_language(Language::CSharp);
        let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["namespaceIds", "namespaceId", "itemType"]);
    }

    #[test]
    fn test_hit_ignores_declared_type() {
        let table = RemapTable::for_language(Language::CSharp);
        let declared = TypeRef::non_null(TypeRef::scalar("Int"));

        let ty = table.apply("namespaceId", &declared);
        assert_eq!(ty, &TypeRef::enumeration(CONTENT_NAMESPACE));

        let ty = table.apply("namespaceIds", &declared);
        assert_eq!(ty.kind, TypeKind::List);
    }

    #[test]
    fn test_miss_returns_declared() {
        let table = RemapTable::for_language(Language::Java);
        let declared = TypeRef::scalar("Int");
        assert_eq!(table.apply("namespace", &declared), &declared);
        assert_eq!(table.apply("NamespaceId", &declared), &declared);
    }

    #[test]
    fn test_item_type_per_language() {
        let cs = RemapTable::for_language(Language::CSharp);
        let java = RemapTable::for_language(Language::Java);
        assert_eq!(
            cs.get("itemType").and_then(|t| t.name.as_deref()),
            Some("Sdl.Web.PublicContentApi.ItemType")
        );
        assert_eq!(
            java.get("itemType").and_then(|t| t.name.as_deref()),
            Some("com.sdl.web.pca.client.contentmodel.enums.ItemType")
        );
    }

    #[test]
    fn test_custom_table() {
        let table = RemapTable::new().rule("status", TypeRef::enumeration("Status"));
        assert_eq!(table.len(), 1);
        assert!(table.get("namespaceId").is_none());
        assert!(RemapTable::new().is_empty());
    }
}
