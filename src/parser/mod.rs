//! PHP parsing and AST extraction.
//!
//! This module parses PHP source text with the mago_syntax parser and
//! extracts class-like declarations together with the name context they
//! were declared in.  Every `namespace` block is its own scope with its
//! own `use` imports; statements outside any namespace share the global
//! scope.  Parent and trait names are resolved to fully qualified names
//! before [`parse_php`] returns, so a [`ParsedFile`] no longer depends on
//! the file it came from.
//!
//! Sub-modules:
//! - [`classes`]: class, interface, and trait extraction
//! - [`use_statements`]: `use` statement extraction

mod classes;
mod use_statements;

use mago_syntax::ast::*;
use tracing::{debug, error};

use crate::resolution::FileContext;
use crate::types::*;
use crate::util::same_class;

/// Context for looking up docblock comments.
///
/// Bundles the program's trivia (comments/whitespace) and the raw source
/// text so that extraction functions can find the `/** ... */` comment
/// preceding any AST node.
pub(crate) struct DocblockCtx<'a> {
    pub trivias: &'a [Trivia<'a>],
    pub content: &'a str,
}

/// Everything extracted from one PHP file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub classes: Vec<ClassInfo>,
    /// The name context of each class, index-aligned with `classes`.
    contexts: Vec<FileContext>,
}

impl ParsedFile {
    /// The namespace and imports in scope where `class` was declared.
    pub fn context_for(&self, class: &ClassInfo) -> Option<&FileContext> {
        let fqn = class.fqn();
        let index = self.classes.iter().position(|c| same_class(&c.fqn(), &fqn))?;
        self.contexts.get(index)
    }

    /// Each class with the name context it was declared in.
    pub fn classes_with_context(&self) -> impl Iterator<Item = (&ClassInfo, &FileContext)> {
        self.classes.iter().zip(&self.contexts)
    }

    fn push_scope(&mut self, classes: Vec<ClassInfo>, context: &FileContext) {
        self.contexts
            .extend(std::iter::repeat_n(context, classes.len()).cloned());
        self.classes.extend(classes);
    }
}

/// Extract visibility from a set of modifiers.
/// Defaults to `Public` if no visibility modifier is present.
pub(crate) fn extract_visibility<'a>(
    modifiers: impl Iterator<Item = &'a Modifier<'a>>,
) -> Visibility {
    for m in modifiers {
        if m.is_private() {
            return Visibility::Private;
        }
        if m.is_protected() {
            return Visibility::Protected;
        }
        if m.is_public() {
            return Visibility::Public;
        }
    }
    Visibility::Public
}

/// Parse PHP source text and extract its classes and name context.
///
/// The parser recovers from syntax errors on its own; should it panic, the
/// panic is logged and an empty [`ParsedFile`] is returned.
pub fn parse_php(content: &str) -> ParsedFile {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let arena = bumpalo::Bump::new();
        let file_id = mago_database::file::FileId::new("input.php");
        let program = mago_syntax::parser::parse_file_content(&arena, file_id, content);

        let doc_ctx = DocblockCtx {
            trivias: program.trivia.as_slice(),
            content,
        };

        let mut parsed = ParsedFile::default();
        let mut global = FileContext::new(None);
        use_statements::extract_use_statements_from_statements(
            program.statements.iter(),
            &mut global,
        );

        for statement in program.statements.iter() {
            let mut classes = Vec::new();
            match statement {
                Statement::Namespace(ns) => {
                    let name = ns.name.as_ref().map(|ident| ident.value().to_string());
                    let mut context = FileContext::new(name);
                    use_statements::extract_use_statements_from_statements(
                        ns.statements().iter(),
                        &mut context,
                    );
                    classes::extract_classes_from_statements(
                        ns.statements().iter(),
                        &mut classes,
                        &doc_ctx,
                        context.namespace.as_deref(),
                    );
                    parsed.push_scope(classes, &context);
                }
                other => {
                    classes::extract_classes_from_statements(
                        std::iter::once(other),
                        &mut classes,
                        &doc_ctx,
                        None,
                    );
                    parsed.push_scope(classes, &global);
                }
            }
        }

        parsed
    }));

    match result {
        Ok(mut parsed) => {
            resolve_class_names(&mut parsed);
            debug!(classes = parsed.classes.len(), "parsed PHP file");
            parsed
        }
        Err(_) => {
            error!("parser panicked in parse_php");
            ParsedFile::default()
        }
    }
}

/// Rewrite `extends` and trait `use` names into fully-qualified form.
fn resolve_class_names(parsed: &mut ParsedFile) {
    for (class, context) in parsed.classes.iter_mut().zip(&parsed.contexts) {
        class.parent_class = class
            .parent_class
            .as_deref()
            .map(|parent| context.resolve_name(parent));
        class.used_traits = class
            .used_traits
            .iter()
            .map(|name| context.resolve_name(name))
            .collect();
    }
}
