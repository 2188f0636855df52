//! Identifier normalization.
//!
//! Both helpers split on whitespace, drop empty words and join the survivors
//! with a single space. A camelCase schema name is a single word, so
//! `pascal_case("namespaceId")` only raises its first letter.

/// Upper-cases the first character of every word, leaving the rest untouched.
///
/// ```
/// use gqlmodel_core::pascal_case;
///
/// assert_eq!(pascal_case("my field name"), "My Field Name");
/// assert_eq!(pascal_case("namespaceId"), "NamespaceId");
/// ```
#[must_use]
pub fn pascal_case(input: &str) -> String {
    join_words(input, |rest| rest.to_string())
}

/// Upper-cases the first character of every word and lower-cases the rest.
///
/// ```
/// use gqlmodel_core::capitalize;
///
/// assert_eq!(capitalize("content MODEL"), "Content Model");
/// ```
#[must_use]
pub fn capitalize(input: &str) -> String {
    join_words(input, str::to_lowercase)
}

fn join_words(input: &str, rest: impl Fn(&str) -> String) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &rest(chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_words() {
        assert_eq!(pascal_case("my field name"), "My Field Name");
        assert_eq!(pascal_case("itemType"), "ItemType");
        assert_eq!(pascal_case("PUBLICATION"), "PUBLICATION");
    }

    #[test]
    fn test_pascal_case_empty() {
        assert_eq!(pascal_case(""), "");
        assert_eq!(pascal_case("   "), "");
    }

    #[test]
    fn test_pascal_case_collapses_whitespace() {
        assert_eq!(pascal_case("  my   field\tname "), "My Field Name");
    }

    #[test]
    fn test_capitalize_lowers_rest() {
        assert_eq!(capitalize("hELLO wORLD"), "Hello World");
        assert_eq!(capitalize("namespaceId"), "Namespaceid");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_non_ascii_first_letter() {
        assert_eq!(pascal_case("élan vital"), "Élan Vital");
    }
}
