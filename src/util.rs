//! Small name helpers shared across modules.

/// Return the last segment of a namespace-qualified name.
///
/// `"App\\Models\\User"` → `"User"`, `"User"` → `"User"`.
pub fn short_name(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}

/// Strip the leading `\` of a fully-qualified name.
pub fn normalize_class_name(name: &str) -> &str {
    name.strip_prefix('\\').unwrap_or(name)
}

/// PHP class names are case-insensitive.
pub fn same_class(a: &str, b: &str) -> bool {
    normalize_class_name(a).eq_ignore_ascii_case(normalize_class_name(b))
}
