//! Class name expansion.
//!
//! A [`FileContext`] captures what PHP needs to turn a name as written in
//! source (or in a docblock) into a fully-qualified class name: the
//! enclosing namespace and the file's `use` import table.
//!
//! # Expansion rules ([`FileContext::expand`])
//!
//!   1. **Fully-qualified**: `\PDO` → `PDO` (leading `\` dropped)
//!   2. **Self references**: `self`, `static`, `$this` → the context class
//!   3. **Namespace-relative**: `namespace\Foo` → `<current ns>\Foo`
//!   4. **Imported**: the first segment matches a `use` alias
//!      (case-insensitively): `Carbon` → `Carbon\Carbon`,
//!      `Models\User` with `use App\Models` → `App\Models\User`
//!   5. **Relative**: anything else is prefixed with the current namespace
//!
//! Results never carry a leading `\`.

use std::collections::HashMap;

use crate::util::short_name;

/// Namespace and import table of the file a class was declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContext {
    pub namespace: Option<String>,
    /// Lower-cased alias → fully-qualified name.
    imports: HashMap<String, String>,
}

impl FileContext {
    pub fn new(namespace: Option<String>) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()),
            imports: HashMap::new(),
        }
    }

    /// Register `use <fqn> as <alias>`.  Without an alias the last segment
    /// of the name is used.
    pub fn add_import(&mut self, fqn: &str, alias: Option<&str>) {
        let fqn = fqn.strip_prefix('\\').unwrap_or(fqn);
        let alias = alias.unwrap_or_else(|| short_name(fqn));
        self.imports
            .insert(alias.to_ascii_lowercase(), fqn.to_string());
    }

    /// Look up the fully-qualified name imported under `alias`.
    pub fn import(&self, alias: &str) -> Option<&str> {
        self.imports
            .get(&alias.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Expand a name against this context.  `self_class` is the
    /// fully-qualified class that `self`/`static`/`$this` refer to.
    pub fn expand(&self, name: &str, self_class: &str) -> String {
        if matches!(name.to_ascii_lowercase().as_str(), "self" | "static" | "$this") {
            return self_class.strip_prefix('\\').unwrap_or(self_class).to_string();
        }
        self.resolve_name(name)
    }

    /// Expand a name that cannot be a self reference (e.g. an `extends`
    /// clause).
    pub fn resolve_name(&self, name: &str) -> String {
        if let Some(fqn) = name.strip_prefix('\\') {
            return fqn.to_string();
        }

        if let Some(rest) = strip_prefix_ignore_case(name, "namespace\\") {
            return self.qualify(rest);
        }

        let (first, rest) = match name.find('\\') {
            Some(pos) => (&name[..pos], &name[pos..]),
            None => (name, ""),
        };
        if let Some(fqn) = self.import(first) {
            return format!("{}{}", fqn, rest);
        }

        self.qualify(name)
    }

    fn qualify(&self, name: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{}\\{}", ns, name),
            None => name.to_string(),
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
