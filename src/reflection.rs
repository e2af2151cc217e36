//! The reflection capability the inspector is built on.
//!
//! [`ReflectionSource`] is the whole surface [`ClassInspector`] needs from
//! a host's reflection facility.  [`Workspace`] implements it over parsed
//! PHP files; tests and embedders can implement it over anything else
//! that knows classes, properties, and methods.
//!
//! Class names are passed fully qualified, with or without a leading `\`.
//!
//! [`ClassInspector`]: crate::ClassInspector
//! [`Workspace`]: crate::Workspace

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{MethodModifiers, MethodReflection, PropertyReflection};
use crate::value::PhpValue;

pub trait ReflectionSource {
    /// Properties declared by `class` itself, in declaration order.
    fn properties(&self, class: &str) -> Result<Vec<PropertyReflection>>;

    /// Declared default values of `class`'s properties, keyed by name.
    /// Properties without a default are absent from the map.
    fn default_properties(&self, class: &str) -> Result<HashMap<String, PhpValue>>;

    /// A single property handle, `None` when `class` has no such property.
    fn property(&self, class: &str, name: &str) -> Result<Option<PropertyReflection>>;

    /// The fully-qualified parent of `class`, if it has one the source
    /// can reflect.
    fn parent_class(&self, class: &str) -> Result<Option<String>>;

    /// Methods visible on `class` (own and inherited) passing `filter`.
    fn methods(&self, class: &str, filter: MethodModifiers) -> Result<Vec<MethodReflection>>;

    /// Expand a type name as written inside `context_class` into a
    /// fully-qualified class name, using that class's namespace and
    /// imports.
    fn expand_class_name(&self, name: &str, context_class: &str) -> Result<String>;
}
