//! Property inspection for a single class.
//!
//! [`ClassInspector`] pairs a class name with a [`ReflectionSource`] and
//! answers the questions code generators ask about it:
//!
//! - which properties (optionally only those carrying some annotation,
//!   optionally including inherited ones) exist, and what their `@var`
//!   types, nullability, and defaults are ([`ClassInspector::filter_properties`]);
//! - which methods are declared here versus inherited
//!   ([`ClassInspector::methods`]);
//! - which fully-qualified classes a generated file must import to refer
//!   to those property types by short name ([`ClassInspector::use_statements`]).
//!
//! An inspector caches the property handles and the default-value snapshot
//! it fetches; the caches live as long as the inspector and are never
//! shared.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::docblock;
use crate::error::{InspectError, Result};
use crate::inheritance;
use crate::reflection::ReflectionSource;
use crate::type_annotation::TypeAnnotation;
use crate::types::{MethodModifiers, MethodReflection, PropertyReflection};
use crate::util::{normalize_class_name, same_class};
use crate::value::PhpValue;

/// One property together with its parsed `@var` type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    name: String,
    declaring_class: String,
    doc_comment: Option<String>,
    var_type: TypeAnnotation,
}

impl PropertyDescriptor {
    /// Build a descriptor from a property handle, parsing its `@var` tag.
    fn from_reflection(
        property: PropertyReflection,
        default_value: Option<PhpValue>,
    ) -> Result<Self> {
        let raw = property
            .doc_comment
            .as_deref()
            .and_then(docblock::extract_var_annotation)
            .unwrap_or("");

        let var_type =
            TypeAnnotation::parse(raw, default_value).map_err(|source| InspectError::Type {
                property: property.name.clone(),
                source,
            })?;

        Ok(Self {
            name: property.name,
            declaring_class: normalize_class_name(&property.declaring_class).to_string(),
            doc_comment: property.doc_comment,
            var_type,
        })
    }

    /// The property name without `$`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name of the declaring class.
    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    pub fn doc_comment(&self) -> Option<&str> {
        self.doc_comment.as_deref()
    }

    /// The parsed `@var` type model.
    pub fn var_type(&self) -> &TypeAnnotation {
        &self.var_type
    }

    pub fn default_value(&self) -> Option<&PhpValue> {
        self.var_type.default_value()
    }

    /// Whether the property's docblock carries the named annotation.
    pub fn has_annotation(&self, name: &str) -> bool {
        self.doc_comment
            .as_deref()
            .is_some_and(|doc| docblock::has_annotation(doc, name))
    }

    /// The text following the named annotation in the docblock.
    pub fn annotation_value(&self, name: &str) -> Option<&str> {
        self.doc_comment
            .as_deref()
            .and_then(|doc| docblock::annotation_value(doc, name))
    }
}

/// Inspects the properties and methods of one class through a
/// [`ReflectionSource`].
pub struct ClassInspector<'s, S: ReflectionSource + ?Sized> {
    source: &'s S,
    class_name: String,
    /// Snapshot of the class's default property values, fetched once.
    default_values: OnceCell<HashMap<String, PhpValue>>,
    /// Property handles fetched for ad-hoc annotation checks.
    property_handles: RefCell<HashMap<String, Option<PropertyReflection>>>,
}

impl<'s, S: ReflectionSource + ?Sized> ClassInspector<'s, S> {
    pub fn new(source: &'s S, class_name: &str) -> Self {
        Self {
            source,
            class_name: normalize_class_name(class_name).to_string(),
            default_values: OnceCell::new(),
            property_handles: RefCell::new(HashMap::new()),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Properties of the class, optionally only those whose docblock
    /// carries `annotation`.
    ///
    /// With `include_ancestors`, matching properties of every ancestor are
    /// prepended, oldest ancestor first, so the result reads top-down
    /// through the hierarchy.
    pub fn filter_properties(
        &self,
        annotation: Option<&str>,
        include_ancestors: bool,
    ) -> Result<Vec<PropertyDescriptor>> {
        let mut properties = Vec::new();

        if include_ancestors {
            let ancestors = inheritance::ancestor_chain(self.source, &self.class_name)?;
            for ancestor in ancestors.iter().rev() {
                let inspector = ClassInspector::new(self.source, ancestor);
                properties.extend(inspector.own_properties(annotation)?);
            }
        }

        properties.extend(self.own_properties(annotation)?);
        Ok(properties)
    }

    /// Matching properties declared by this class only.
    fn own_properties(&self, annotation: Option<&str>) -> Result<Vec<PropertyDescriptor>> {
        let mut descriptors = Vec::new();

        for property in self.source.properties(&self.class_name)? {
            if let Some(annotation) = annotation
                && !carries_annotation(&property, annotation)
            {
                trace!(
                    class = %self.class_name,
                    property = %property.name,
                    annotation,
                    "property skipped by annotation filter"
                );
                continue;
            }

            let default_value = self.default_value(&property.name)?;
            descriptors.push(PropertyDescriptor::from_reflection(property, default_value)?);
        }

        debug!(
            class = %self.class_name,
            count = descriptors.len(),
            "collected properties"
        );
        Ok(descriptors)
    }

    /// The declared default of a property.
    ///
    /// A `null` default counts as no default, like PHP's `isset` on the
    /// default-property map.
    pub fn default_value(&self, property: &str) -> Result<Option<PhpValue>> {
        Ok(self
            .default_values()?
            .get(property)
            .filter(|value| !value.is_null())
            .cloned())
    }

    fn default_values(&self) -> Result<&HashMap<String, PhpValue>> {
        if let Some(values) = self.default_values.get() {
            return Ok(values);
        }
        let loaded = self.source.default_properties(&self.class_name)?;
        Ok(self.default_values.get_or_init(|| loaded))
    }

    /// Look up a property handle, caching the answer.
    pub fn property(&self, name: &str) -> Result<Option<PropertyReflection>> {
        if let Some(cached) = self.property_handles.borrow().get(name) {
            return Ok(cached.clone());
        }
        let handle = self.source.property(&self.class_name, name)?;
        self.property_handles
            .borrow_mut()
            .insert(name.to_string(), handle.clone());
        Ok(handle)
    }

    /// Whether the named property's docblock carries `annotation`.
    /// Unknown properties carry nothing.
    pub fn has_annotation(&self, property: &str, annotation: &str) -> Result<bool> {
        Ok(self
            .property(property)?
            .is_some_and(|p| carries_annotation(&p, annotation)))
    }

    /// Methods passing `filter`.  Without `include_inherited`, only methods
    /// whose declaring class is this class are kept.
    pub fn methods(
        &self,
        filter: MethodModifiers,
        include_inherited: bool,
    ) -> Result<Vec<MethodReflection>> {
        let methods = self.source.methods(&self.class_name, filter)?;
        if include_inherited {
            return Ok(methods);
        }
        Ok(methods
            .into_iter()
            .filter(|m| same_class(&m.declaring_class, &self.class_name))
            .collect())
    }

    /// The fully-qualified class names the given properties' types refer
    /// to, in first-seen order without duplicates.
    ///
    /// Properties with an unknown or already-resolved type contribute
    /// nothing; `X[]` contributes `X` unless `X` is a primitive.  Every
    /// property must have been declared by this class or one of its
    /// ancestors, since its type is expanded in the declaring class's
    /// namespace.
    pub fn use_statements(&self, properties: &[PropertyDescriptor]) -> Result<IndexSet<String>> {
        let lineage = inheritance::lineage(self.source, &self.class_name)?;
        let mut uses = IndexSet::new();

        for property in properties {
            if !lineage
                .iter()
                .any(|class| same_class(class, property.declaring_class()))
            {
                return Err(InspectError::InvalidInput(format!(
                    "property `{}` is declared by `{}`, which is not `{}` or one of its ancestors",
                    property.name(),
                    property.declaring_class(),
                    self.class_name
                )));
            }

            let var_type = property.var_type();
            if var_type.is_resolved_type() {
                continue;
            }
            let Some(primary) = var_type.primary_type() else {
                continue;
            };

            let element = docblock::strip_array_suffixes(primary);
            if element.is_empty()
                || docblock::is_primitive(element)
                || docblock::is_fully_qualified(element)
            {
                continue;
            }

            let fqn = self
                .source
                .expand_class_name(element, property.declaring_class())?;
            trace!(property = property.name(), %fqn, "use statement");
            uses.insert(fqn);
        }

        Ok(uses)
    }
}

fn carries_annotation(property: &PropertyReflection, annotation: &str) -> bool {
    property
        .doc_comment
        .as_deref()
        .is_some_and(|doc| docblock::has_annotation(doc, annotation))
}
