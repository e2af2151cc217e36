//! `@var` annotation → property type model.
//!
//! [`TypeAnnotation::parse`] turns the raw text written after a `@var` tag
//! into an ordered list of type tokens, a nullability flag, and at most one
//! *primary type*:
//!
//! | tokens                  | primary      | nullable |
//! |-------------------------|--------------|----------|
//! | `Foo`                   | `Foo`        | no       |
//! | `Foo\|null`, `null\|Foo` | `Foo`        | yes      |
//! | `Foo\|Bar`               | unknown      | no       |
//! | `Foo\|Bar\|null`          | unknown      | yes      |
//! | `null`                  | error        |          |
//! | (nothing)               | error        |          |
//!
//! Unions of two non-null members or three or more members are left
//! unknown; callers must branch on [`TypeAnnotation::is_unknown_type`].

use std::fmt;

use crate::docblock::{self, FQN_MARKER};
use crate::error::TypeError;
use crate::value::PhpValue;

/// The classified type information of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    /// All type tokens in written order, e.g. `["string", "null"]`.
    types: Vec<String>,
    /// The single dominant type, `None` when the union is ambiguous.
    primary: Option<String>,
    nullable: bool,
    default_value: Option<PhpValue>,
}

impl TypeAnnotation {
    /// Parse the raw text following a `@var` tag.
    ///
    /// Anything after the first whitespace is a description and is ignored.
    pub fn parse(raw: &str, default_value: Option<PhpValue>) -> Result<Self, TypeError> {
        let types = parse_types(raw);
        let (primary, nullable) = select_primary(&types)?;
        Ok(Self {
            types,
            primary,
            nullable,
            default_value,
        })
    }

    /// All parsed type tokens in written order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// The primary type, or `None` when it cannot be inferred.
    pub fn primary_type(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> Option<&PhpValue> {
        self.default_value.as_ref()
    }

    /// The tokens joined back with `|`, case rules applied.
    pub fn render_types(&self) -> String {
        self.types.join("|")
    }

    /// Whether the primary type is in the primitive table.
    pub fn is_primitive_type(&self) -> bool {
        self.primary.as_deref().is_some_and(docblock::is_primitive)
    }

    /// Whether the primary type needs no namespace expansion: it is either
    /// a primitive or already fully qualified (`\App\Model`).
    pub fn is_resolved_type(&self) -> bool {
        self.primary
            .as_deref()
            .is_some_and(|t| docblock::is_primitive(t) || t.starts_with(FQN_MARKER))
    }

    /// Whether the primary type is `array` or `X[]` notation.
    pub fn is_array_type(&self) -> bool {
        self.primary
            .as_deref()
            .is_some_and(|t| t == "array" || docblock::is_array_notation(t))
    }

    pub fn is_unknown_type(&self) -> bool {
        self.primary.is_none()
    }

    pub fn is_int(&self) -> bool {
        self.primary.as_deref() == Some("int")
    }

    pub fn is_string(&self) -> bool {
        self.primary.as_deref() == Some("string")
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_types())
    }
}

/// Split the type expression of a raw annotation into tokens.
///
/// Primitive names are lower-cased; class references keep their case.
/// Empty pieces (`string|`) are dropped, so the result may be empty.
pub fn parse_types(raw: &str) -> Vec<String> {
    let expression = raw.split_whitespace().next().unwrap_or("");

    expression
        .split('|')
        .filter(|token| !token.is_empty())
        .map(|token| match docblock::primitive_name(token) {
            Some(primitive) => primitive.to_string(),
            None => token.to_string(),
        })
        .collect()
}

/// Pick the primary type and nullability for a token list.
fn select_primary(types: &[String]) -> Result<(Option<String>, bool), TypeError> {
    let null_pos = types.iter().position(|t| t == "null");
    let nullable = null_pos.is_some();

    let primary = match (types, null_pos) {
        ([], _) => return Err(TypeError::MissingType),
        ([_], Some(_)) => return Err(TypeError::NullOnlyType),
        ([only], None) => Some(only.clone()),
        ([first, second], Some(pos)) => {
            let other = if pos == 0 { second } else { first };
            Some(other.clone())
        }
        _ => None,
    };

    Ok((primary, nullable))
}
