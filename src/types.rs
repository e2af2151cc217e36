//! Data types used throughout phpantom_reflection.
//!
//! Two families live here: the reflection handles a
//! [`ReflectionSource`](crate::ReflectionSource) hands out
//! ([`PropertyReflection`], [`MethodReflection`]) and the owned model
//! extracted from parsed PHP files ([`ClassInfo`], [`PropertyInfo`],
//! [`MethodInfo`]).

use bitflags::bitflags;

use crate::util::normalize_class_name;

/// Visibility of a class member (method or property).
///
/// In PHP, members without an explicit visibility modifier default to `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

bitflags! {
    /// Method modifier bits, numbered like PHP's `ReflectionMethod::IS_*`
    /// constants.
    ///
    /// Used both to describe a method and as a filter: a method passes a
    /// filter when the two share at least one bit, so
    /// [`MethodModifiers::all()`] selects every method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodModifiers: u32 {
        const PUBLIC = 1;
        const PROTECTED = 2;
        const PRIVATE = 4;
        const STATIC = 16;
        const FINAL = 32;
        const ABSTRACT = 64;
    }
}

impl MethodModifiers {
    pub fn from_visibility(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => Self::PUBLIC,
            Visibility::Protected => Self::PROTECTED,
            Visibility::Private => Self::PRIVATE,
        }
    }

    /// Whether a method carrying `self` passes `filter`.
    pub fn matches(self, filter: MethodModifiers) -> bool {
        self.intersects(filter)
    }
}

/// A property handle as reported by a reflection source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyReflection {
    /// The property name WITHOUT the `$` prefix.
    pub name: String,
    /// The raw doc comment attached to the declaration, if any.
    pub doc_comment: Option<String>,
    /// Fully-qualified name of the class that declares the property.
    pub declaring_class: String,
    pub visibility: Visibility,
    pub is_static: bool,
}

/// A method handle as reported by a reflection source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodReflection {
    pub name: String,
    /// Fully-qualified name of the class that declares the method.
    pub declaring_class: String,
    pub modifiers: MethodModifiers,
}

impl MethodReflection {
    pub fn visibility(&self) -> Visibility {
        if self.modifiers.contains(MethodModifiers::PRIVATE) {
            Visibility::Private
        } else if self.modifiers.contains(MethodModifiers::PROTECTED) {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MethodModifiers::STATIC)
    }
}

/// The kind of class-like declaration a [`ClassInfo`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLikeKind {
    Class,
    Interface,
    Trait,
}

/// Stores extracted property information from a parsed PHP class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// The property name WITHOUT the `$` prefix (e.g. "name", "age").
    pub name: String,
    /// The `/** ... */` comment preceding the declaration.
    pub doc_comment: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Source text of the default value expression (e.g. `"[]"`, `"'a'"`).
    pub default_value: Option<String>,
}

/// Stores extracted method information from a parsed PHP class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl MethodInfo {
    pub fn modifiers(&self) -> MethodModifiers {
        let mut modifiers = MethodModifiers::from_visibility(self.visibility);
        modifiers.set(MethodModifiers::STATIC, self.is_static);
        modifiers.set(MethodModifiers::ABSTRACT, self.is_abstract);
        modifiers.set(MethodModifiers::FINAL, self.is_final);
        modifiers
    }
}

/// Stores extracted class information from a parsed PHP file.
/// All data is owned so we don't depend on the parser's arena lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub kind: ClassLikeKind,
    /// The short name of the class (e.g. "User").
    pub name: String,
    /// The enclosing namespace, if any (e.g. "App\\Models").
    pub namespace: Option<String>,
    /// The parent class, fully qualified once the file has been resolved.
    pub parent_class: Option<String>,
    /// Traits pulled in with `use`, fully qualified once resolved.
    pub used_traits: Vec<String>,
    /// The properties declared directly in this class, in source order.
    pub properties: Vec<PropertyInfo>,
    /// The methods declared directly in this class, in source order.
    pub methods: Vec<MethodInfo>,
}

impl ClassInfo {
    /// The fully-qualified name, without a leading `\`.
    pub fn fqn(&self) -> String {
        match self.namespace.as_deref().map(normalize_class_name) {
            Some(ns) if !ns.is_empty() => format!("{}\\{}", ns, self.name),
            _ => self.name.clone(),
        }
    }
}
