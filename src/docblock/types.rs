//! Type name classification for `@var` annotations.
//!
//! This submodule knows the primitive type table and the two syntactic
//! markers the resolver cares about: the leading `\` of a fully-qualified
//! class name and the `[]` suffix of array-of notation.

/// Type names treated as primitives.  Tokens matching one of these (in any
/// case) are lower-cased; everything else is a class reference.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "bool", "boolean", "string", "true", "false", "null", "int", "float", "double", "array",
    "callable", "mixed", "resource", "number", "object",
];

/// Prefix marking a fully-qualified class name.
pub const FQN_MARKER: char = '\\';

/// Return the canonical (lower-case) primitive name if `type_name` is one.
pub fn primitive_name(type_name: &str) -> Option<&'static str> {
    PRIMITIVE_TYPES
        .iter()
        .copied()
        .find(|p| p.eq_ignore_ascii_case(type_name))
}

/// Check whether a type name is in the primitive table.
pub fn is_primitive(type_name: &str) -> bool {
    primitive_name(type_name).is_some()
}

/// Check whether a type name is already fully qualified (`\App\User`).
pub fn is_fully_qualified(type_name: &str) -> bool {
    type_name.starts_with(FQN_MARKER)
}

/// Check for `X[]` array-of notation with a non-empty `X`.
///
/// Nested notation such as `string[][]` matches as well.
pub fn is_array_notation(type_name: &str) -> bool {
    type_name
        .strip_suffix("[]")
        .is_some_and(|element| !element.is_empty())
}

/// Strip every trailing `[]` from array-of notation.
///
/// `Item[][]` → `Item`, `Item` → `Item`.
pub fn strip_array_suffixes(type_name: &str) -> &str {
    let mut s = type_name;
    while let Some(element) = s.strip_suffix("[]") {
        s = element;
    }
    s
}
