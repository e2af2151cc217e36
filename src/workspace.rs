//! A [`ReflectionSource`] over parsed PHP files.
//!
//! Files are added explicitly with [`Workspace::add_file`] /
//! [`Workspace::load_file`], or found on demand through the project's
//! Composer PSR-4 mappings when the workspace was created with
//! [`Workspace::with_composer`].  Classes are keyed by their
//! fully-qualified name, case-insensitively, as PHP does.
//!
//! Members brought in by traits are reported as declared by the using
//! class; the class's own members win over trait members of the same name.
//! A parent class that cannot be found (e.g. a built-in like `\Exception`)
//! is treated as absent, so walks up the hierarchy end there.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::composer::{self, Psr4Mapping};
use crate::error::{InspectError, Result};
use crate::inheritance::MAX_INHERITANCE_DEPTH;
use crate::parser;
use crate::reflection::ReflectionSource;
use crate::resolution::FileContext;
use crate::types::*;
use crate::util::normalize_class_name;
use crate::value::PhpValue;

/// One registered class together with the name context it was declared in.
#[derive(Debug)]
struct ClassEntry {
    info: ClassInfo,
    fqn: String,
    context: FileContext,
    uri: String,
}

#[derive(Debug, Default)]
pub struct Workspace {
    /// Lower-cased FQN → class.
    classes: RefCell<HashMap<String, Rc<ClassEntry>>>,
    project_root: Option<PathBuf>,
    psr4_mappings: Vec<Psr4Mapping>,
    /// Lower-cased FQNs already looked up on disk without success.
    autoload_misses: RefCell<HashSet<String>>,
}

fn class_key(name: &str) -> String {
    normalize_class_name(name).to_ascii_lowercase()
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace that loads unknown classes from `project_root` using the
    /// PSR-4 mappings of its `composer.json`.
    pub fn with_composer(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let psr4_mappings = composer::parse_composer_json(&project_root);
        debug!(
            root = %project_root.display(),
            mappings = psr4_mappings.len(),
            "composer workspace"
        );
        Self {
            project_root: Some(project_root),
            psr4_mappings,
            ..Self::default()
        }
    }

    /// Parse `content` and register its classes under `uri`.
    ///
    /// Returns the fully-qualified names registered.  A class declared
    /// again replaces the earlier declaration.
    pub fn add_file(&self, uri: &str, content: &str) -> Vec<String> {
        let parsed = parser::parse_php(content);
        let mut names = Vec::with_capacity(parsed.classes.len());
        let mut classes = self.classes.borrow_mut();
        let mut misses = self.autoload_misses.borrow_mut();

        for (class, context) in parsed.classes_with_context() {
            let fqn = class.fqn();
            let key = class_key(&fqn);
            let entry = ClassEntry {
                info: class.clone(),
                fqn: fqn.clone(),
                context: context.clone(),
                uri: uri.to_string(),
            };
            if classes.insert(key.clone(), Rc::new(entry)).is_some() {
                debug!(class = %fqn, uri, "class redeclared, replacing");
            }
            misses.remove(&key);
            names.push(fqn);
        }

        debug!(uri, count = names.len(), "registered classes");
        names
    }

    /// Read a PHP file from disk and register its classes.
    pub fn load_file(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let content = std::fs::read_to_string(path)?;
        let uri = format!("file://{}", path.display());
        Ok(self.add_file(&uri, &content))
    }

    /// The extracted declaration of a class, loading it if needed.
    pub fn class_info(&self, name: &str) -> Option<ClassInfo> {
        self.lookup(name).map(|entry| entry.info.clone())
    }

    /// The URI of the file that declared a class.
    pub fn class_uri(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|entry| entry.uri.clone())
    }

    /// Fully-qualified names of every class registered so far, sorted.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .classes
            .borrow()
            .values()
            .map(|entry| entry.fqn.clone())
            .collect();
        names.sort();
        names
    }

    fn lookup(&self, name: &str) -> Option<Rc<ClassEntry>> {
        let key = class_key(name);
        if let Some(entry) = self.classes.borrow().get(&key) {
            return Some(Rc::clone(entry));
        }
        if self.autoload(name) {
            return self.classes.borrow().get(&key).cloned();
        }
        None
    }

    fn require(&self, name: &str) -> Result<Rc<ClassEntry>> {
        self.lookup(name)
            .ok_or_else(|| InspectError::ClassNotFound(normalize_class_name(name).to_string()))
    }

    /// Try to load `name` through PSR-4.  Returns whether a file was loaded.
    fn autoload(&self, name: &str) -> bool {
        let Some(root) = self.project_root.as_deref() else {
            return false;
        };
        let key = class_key(name);
        if self.autoload_misses.borrow().contains(&key) {
            return false;
        }

        let Some(path) = composer::resolve_class_path(&self.psr4_mappings, root, name) else {
            self.autoload_misses.borrow_mut().insert(key);
            return false;
        };

        match self.load_file(&path) {
            Ok(_) => {
                debug!(class = name, path = %path.display(), "autoloaded class");
                true
            }
            Err(err) => {
                warn!(class = name, path = %path.display(), %err, "failed to read class file");
                self.autoload_misses.borrow_mut().insert(key);
                false
            }
        }
    }

    /// Own members of a class followed by members of the traits it uses
    /// (transitively) that the class does not declare itself.
    fn members(&self, entry: &ClassEntry) -> (Vec<PropertyInfo>, Vec<MethodInfo>) {
        let mut properties = entry.info.properties.clone();
        let mut methods = entry.info.methods.clone();

        let mut seen = HashSet::new();
        let mut queue: VecDeque<String> = entry.info.used_traits.iter().cloned().collect();
        while let Some(trait_name) = queue.pop_front() {
            if !seen.insert(class_key(&trait_name)) {
                continue;
            }
            let Some(trait_entry) = self.lookup(&trait_name) else {
                debug!(class = %entry.fqn, trait_name = %trait_name, "trait not found");
                continue;
            };

            for property in &trait_entry.info.properties {
                if !properties.iter().any(|p| p.name == property.name) {
                    properties.push(property.clone());
                }
            }
            for method in &trait_entry.info.methods {
                if !methods.iter().any(|m| m.name.eq_ignore_ascii_case(&method.name)) {
                    methods.push(method.clone());
                }
            }
            queue.extend(trait_entry.info.used_traits.iter().cloned());
        }

        (properties, methods)
    }
}

impl ReflectionSource for Workspace {
    fn properties(&self, class: &str) -> Result<Vec<PropertyReflection>> {
        let entry = self.require(class)?;
        let (properties, _) = self.members(&entry);
        Ok(properties
            .into_iter()
            .map(|p| PropertyReflection {
                name: p.name,
                doc_comment: p.doc_comment,
                declaring_class: entry.fqn.clone(),
                visibility: p.visibility,
                is_static: p.is_static,
            })
            .collect())
    }

    fn default_properties(&self, class: &str) -> Result<HashMap<String, PhpValue>> {
        let entry = self.require(class)?;
        let (properties, _) = self.members(&entry);
        Ok(properties
            .into_iter()
            .filter_map(|p| {
                let value = PhpValue::from_source(p.default_value.as_deref()?);
                Some((p.name, value))
            })
            .collect())
    }

    fn property(&self, class: &str, name: &str) -> Result<Option<PropertyReflection>> {
        Ok(self.properties(class)?.into_iter().find(|p| p.name == name))
    }

    fn parent_class(&self, class: &str) -> Result<Option<String>> {
        let entry = self.require(class)?;
        let Some(parent) = entry.info.parent_class.as_deref() else {
            return Ok(None);
        };
        match self.lookup(parent) {
            Some(parent_entry) => Ok(Some(parent_entry.fqn.clone())),
            None => {
                warn!(class = %entry.fqn, parent, "parent class not found, treating as root");
                Ok(None)
            }
        }
    }

    fn methods(&self, class: &str, filter: MethodModifiers) -> Result<Vec<MethodReflection>> {
        let mut visible: Vec<MethodReflection> = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(self.require(class)?);
        let mut depth = 0;

        while let Some(entry) = current {
            if depth > MAX_INHERITANCE_DEPTH || !visited.insert(class_key(&entry.fqn)) {
                break;
            }
            let inherited = depth > 0;
            let (_, methods) = self.members(&entry);

            for method in methods {
                // Private methods are never inherited.
                if inherited && method.visibility == Visibility::Private {
                    continue;
                }
                if visible.iter().any(|m| m.name.eq_ignore_ascii_case(&method.name)) {
                    continue;
                }
                visible.push(MethodReflection {
                    modifiers: method.modifiers(),
                    name: method.name,
                    declaring_class: entry.fqn.clone(),
                });
            }

            current = entry
                .info
                .parent_class
                .as_deref()
                .and_then(|parent| self.lookup(parent));
            depth += 1;
        }

        Ok(visible
            .into_iter()
            .filter(|m| m.modifiers.matches(filter))
            .collect())
    }

    fn expand_class_name(&self, name: &str, context_class: &str) -> Result<String> {
        let entry = self.require(context_class)?;
        Ok(entry.context.expand(name, &entry.fqn))
    }
}
