//! PHPDoc block support.
//!
//! This module finds the docblock attached to a declaration, answers
//! "does this docblock carry annotation X", reads the raw text of a tag
//! such as `@var`, and classifies the type names found there.
//!
//! # Submodules
//!
//! - [`tags`]: docblock lookup through parser trivia and tag extraction
//!   (`has_annotation`, `annotation_value`, `extract_var_annotation`).
//! - [`types`]: the primitive type table and type-name markers
//!   (`is_primitive`, `is_fully_qualified`, `is_array_notation`).

mod tags;
pub mod types;

pub use tags::{annotation_value, extract_var_annotation, get_docblock_text_for_node, has_annotation};

pub use types::{
    FQN_MARKER, PRIMITIVE_TYPES, is_array_notation, is_fully_qualified, is_primitive,
    primitive_name, strip_array_suffixes,
};
