//! Error types for annotation parsing and class inspection.

use thiserror::Error;

/// Failures while turning a raw `@var` annotation into a type model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The annotation yielded no type tokens at all.
    #[error("property type is missing")]
    MissingType,

    /// The only type token is `null`.
    #[error("property type cannot be null only")]
    NullOnlyType,
}

/// Errors surfaced by [`ClassInspector`](crate::ClassInspector) and
/// [`ReflectionSource`](crate::ReflectionSource) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// A property carries an annotation that cannot be typed.
    #[error("invalid @var annotation on property `{property}`: {source}")]
    Type {
        property: String,
        #[source]
        source: TypeError,
    },

    /// A caller handed in data this inspector did not produce.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The reflection source knows nothing about the requested class.
    #[error("class not found: {0}")]
    ClassNotFound(String),
}

pub type Result<T, E = InspectError> = std::result::Result<T, E>;
