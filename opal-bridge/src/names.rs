//!
//! Name Translation
//!
//! Opal identifiers flow into the host language as-is except when they
//! collide with a host reserved word, in which case a single underscore
//! is appended. The escaping is deliberately minimal and not injective:
//! an Opal name that already ends in `_` can collide with the escaped
//! form of a reserved word. That ambiguity is inherited from the upstream
//! naming contract and is left unresolved here.
//!
//! Qualified names follow the native `namespace::name` convention of the
//! Opal-generated C++ wrappers, with an optional trailing `*` on pointer
//! types.
//!

use std::borrow::Cow;

use crate::config::ReservedWords;

/// Namespace separator in native qualified names.
const NAMESPACE_SEPARATOR: &str = "::";

/// A qualified name split into its namespace and bare-name portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub namespace: Option<&'a str>,
    pub name: &'a str,
}

/// Escape `name` if it is a reserved word in the host language.
pub fn to_host_identifier<'a>(name: &'a str, reserved: &ReservedWords) -> Cow<'a, str> {
    if reserved.contains(name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Split a native qualified name into its namespace and name portions,
/// stripping a trailing pointer marker from the name.
pub fn parse_qualified_name(qual_name: &str) -> QualifiedName<'_> {
    let (namespace, name) = match qual_name.find(NAMESPACE_SEPARATOR) {
        Some(pos) if pos > 0 => (
            Some(&qual_name[..pos]),
            &qual_name[pos + NAMESPACE_SEPARATOR.len()..],
        ),
        _ => (None, qual_name),
    };
    let name = name.strip_suffix('*').unwrap_or(name);
    QualifiedName { namespace, name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_word_gets_suffix() {
        let reserved: ReservedWords = ["class", "def"].into_iter().collect();
        assert_eq!(to_host_identifier("class", &reserved), "class_");
        assert_eq!(to_host_identifier("foo", &reserved), "foo");
    }

    #[test]
    fn escaping_is_not_injective() {
        // "class_" passes through unchanged and collides with the escaped
        // form of "class". Documented upstream contract, kept as-is.
        let reserved: ReservedWords = ["class"].into_iter().collect();
        assert_eq!(to_host_identifier("class", &reserved), "class_");
        assert_eq!(to_host_identifier("class_", &reserved), "class_");
    }

    #[test]
    fn qualified_name_with_namespace() {
        let parsed = parse_qualified_name("ns::Name*");
        assert_eq!(parsed.namespace, Some("ns"));
        assert_eq!(parsed.name, "Name");
    }

    #[test]
    fn bare_name() {
        let parsed = parse_qualified_name("Name");
        assert_eq!(parsed.namespace, None);
        assert_eq!(parsed.name, "Name");
    }

    #[test]
    fn bare_pointer_name() {
        let parsed = parse_qualified_name("Name*");
        assert_eq!(parsed.namespace, None);
        assert_eq!(parsed.name, "Name");
    }

    #[test]
    fn leading_separator_is_not_a_namespace() {
        let parsed = parse_qualified_name("::Name");
        assert_eq!(parsed.namespace, None);
        assert_eq!(parsed.name, "::Name");
    }
}
