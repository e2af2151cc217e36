//! PHPDoc tag lookup.
//!
//! Only what property reflection needs: locating the doc comment that
//! precedes an AST node, checking whether a named annotation is present,
//! and reading the text that follows a tag (e.g. the `string|null Name`
//! after `@var`).

use mago_span::HasSpan;
use mago_syntax::ast::*;

// ─── Public API ─────────────────────────────────────────────────────────────

/// Check whether a docblock carries the named annotation.
///
/// The name may be given with or without its `@` (`"var"` and `"@var"` are
/// equivalent).  The tag must be followed by whitespace, `(`, or the end of
/// the line, so `@column` does not match `@columns`.
pub fn has_annotation(docblock: &str, name: &str) -> bool {
    annotation_value(docblock, name).is_some()
}

/// Return the text following the first occurrence of the named tag.
///
/// - `@var string|null The name` → `Some("string|null The name")`
/// - `@internal`                 → `Some("")`
/// - tag absent                  → `None`
///
/// Only the tag's own line is returned.
pub fn annotation_value<'a>(docblock: &'a str, name: &str) -> Option<&'a str> {
    let name = name.strip_prefix('@').unwrap_or(name);
    if name.is_empty() {
        return None;
    }

    for line in docblock_lines(docblock) {
        let Some(rest) = line.strip_prefix('@').and_then(|r| r.strip_prefix(name)) else {
            continue;
        };
        match rest.chars().next() {
            None => return Some(""),
            Some(c) if c.is_whitespace() || c == '(' => return Some(rest.trim()),
            Some(_) => continue,
        }
    }
    None
}

/// Return the raw `@var` annotation text of a property docblock.
pub fn extract_var_annotation(docblock: &str) -> Option<&str> {
    annotation_value(docblock, "var")
}

/// Find the `/** ... */` docblock that directly precedes `node`.
///
/// Only whitespace and ordinary comments may sit between the docblock and
/// the node; any other content means the node is undocumented.
pub fn get_docblock_text_for_node<'a>(
    trivia: &'a [Trivia<'a>],
    content: &str,
    node: &impl HasSpan,
) -> Option<&'a str> {
    let node_start = node.span().start.offset;
    let candidate_idx = trivia.partition_point(|t| t.span.start.offset < node_start);
    if candidate_idx == 0 {
        return None;
    }

    let content_bytes = content.as_bytes();
    let mut covered_from = node_start;

    for i in (0..candidate_idx).rev() {
        let t = &trivia[i];
        let t_end = t.span.end.offset;

        let gap = content_bytes
            .get(t_end as usize..covered_from as usize)
            .unwrap_or(&[]);
        if !gap.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        match t.kind {
            TriviaKind::DocBlockComment => return Some(t.value),
            TriviaKind::WhiteSpace
            | TriviaKind::SingleLineComment
            | TriviaKind::MultiLineComment
            | TriviaKind::HashComment => {
                covered_from = t.span.start.offset;
            }
        }
    }

    None
}

// ─── Helpers ────────────────────────────────────────────────────────────────

/// Iterate the content lines of a docblock with the `/**`, `*/`, and
/// leading `*` decoration removed.
///
/// Text without the comment delimiters is accepted as-is, so sources that
/// store bare annotation text work too.
fn docblock_lines(docblock: &str) -> impl Iterator<Item = &str> {
    let s = docblock.trim();
    let s = s.strip_prefix("/**").unwrap_or(s);
    let s = s.strip_suffix("*/").unwrap_or(s);
    s.lines().map(|line| line.trim().trim_start_matches('*').trim())
}
