/// `use` statement extraction.
///
/// This module walks the PHP `use` statements of one namespace scope,
/// recording each class import into that scope's [`FileContext`].
use mago_syntax::ast::*;

use crate::resolution::FileContext;

/// Register every class import among `statements` in `context`.
///
/// Namespace blocks are not entered: each one is a separate import scope.
pub(crate) fn extract_use_statements_from_statements<'a>(
    statements: impl Iterator<Item = &'a Statement<'a>>,
    context: &mut FileContext,
) {
    for statement in statements {
        if let Statement::Use(use_stmt) = statement {
            extract_use_items(&use_stmt.items, context);
        }
    }
}

/// Extract individual use items from a `UseItems` node.
fn extract_use_items(items: &UseItems, context: &mut FileContext) {
    match items {
        UseItems::Sequence(seq) => {
            // `use Foo\Bar;` or `use Foo\Bar, Baz\Qux;`
            for item in seq.items.iter() {
                register_use_item(item, None, context);
            }
        }
        UseItems::TypedSequence(seq) => {
            // `use function Foo\bar;` / `use const Foo\BAR;` import no classes
            if seq.r#type.is_function() || seq.r#type.is_const() {
                return;
            }
            for item in seq.items.iter() {
                register_use_item(item, None, context);
            }
        }
        UseItems::TypedList(list) => {
            if list.r#type.is_function() || list.r#type.is_const() {
                return;
            }
            let prefix = list.namespace.value();
            for item in list.items.iter() {
                register_use_item(item, Some(prefix), context);
            }
        }
        UseItems::MixedList(list) => {
            // `use Foo\{Bar, function baz, const QUX};`
            let prefix = list.namespace.value();
            for maybe_typed in list.items.iter() {
                if let Some(ref t) = maybe_typed.r#type
                    && (t.is_function() || t.is_const())
                {
                    continue;
                }
                register_use_item(&maybe_typed.item, Some(prefix), context);
            }
        }
    }
}

/// Register a single `UseItem`, prefixing grouped items with their group
/// namespace (`use Foo\{Bar}` imports `Foo\Bar`).
fn register_use_item(item: &UseItem, group_prefix: Option<&str>, context: &mut FileContext) {
    let item_name = item.name.value();

    let fqn = match group_prefix {
        Some(prefix) => format!("{}\\{}", prefix.trim_end_matches('\\'), item_name),
        None => item_name.to_string(),
    };

    let alias = item.alias.as_ref().map(|a| a.identifier.value);
    context.add_import(&fqn, alias);
}
