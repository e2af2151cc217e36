//! Docblock-driven property reflection for PHP classes.
//!
//! The crate reads the `@var` annotations of a class's properties and turns
//! them into a normalized type model ([`TypeAnnotation`]): the type tokens,
//! whether the property is nullable, and a single primary type when one can
//! be inferred.  [`ClassInspector`] walks a class (and optionally its
//! ancestors) through a [`ReflectionSource`], filters properties by
//! annotation, and collects the fully-qualified names a generated file would
//! need to import.
//!
//! [`Workspace`] is the bundled [`ReflectionSource`]: it parses PHP source
//! with mago and can find classes on disk through Composer PSR-4 mappings.
//!
//! ```no_run
//! use phpantom_reflection::{ClassInspector, Workspace};
//!
//! let workspace = Workspace::new();
//! workspace.add_file(
//!     "file:///Post.php",
//!     "<?php namespace App; class Post { /** @var Author|null */ public $author; }",
//! );
//! let inspector = ClassInspector::new(&workspace, "App\\Post");
//! let properties = inspector.filter_properties(None, false)?;
//! let uses = inspector.use_statements(&properties)?;
//! assert_eq!(uses.first().map(String::as_str), Some("App\\Author"));
//! # Ok::<(), phpantom_reflection::InspectError>(())
//! ```

pub mod composer;
pub mod docblock;
pub mod error;
pub mod inheritance;
pub mod inspector;
pub mod parser;
pub mod reflection;
pub mod resolution;
pub mod type_annotation;
pub mod types;
pub mod util;
pub mod value;
pub mod workspace;

pub use docblock::PRIMITIVE_TYPES;
pub use error::{InspectError, Result, TypeError};
pub use inspector::{ClassInspector, PropertyDescriptor};
pub use reflection::ReflectionSource;
pub use resolution::FileContext;
pub use type_annotation::TypeAnnotation;
pub use types::{
    ClassInfo, ClassLikeKind, MethodInfo, MethodModifiers, MethodReflection, PropertyInfo,
    PropertyReflection, Visibility,
};
pub use value::PhpValue;
pub use workspace::Workspace;
