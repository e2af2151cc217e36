/// Class inheritance walking.
///
/// The parent chain is walked iteratively rather than recursively so that
/// deep hierarchies cannot exhaust the stack.  A depth limit and a visited
/// set guard against circular `extends` declarations, which PHP rejects at
/// runtime but which can still appear in source being analysed.
use tracing::warn;

use crate::error::Result;
use crate::reflection::ReflectionSource;
use crate::util::{normalize_class_name, same_class};

/// Maximum number of `extends` hops followed before giving up.
pub const MAX_INHERITANCE_DEPTH: usize = 20;

/// Return the ancestors of `class`, nearest parent first.
///
/// The class itself is not included.  The walk stops at the first class
/// without a parent, on a cycle, or after [`MAX_INHERITANCE_DEPTH`] hops.
pub fn ancestor_chain<S>(source: &S, class: &str) -> Result<Vec<String>>
where
    S: ReflectionSource + ?Sized,
{
    let mut chain: Vec<String> = Vec::new();
    let mut current = normalize_class_name(class).to_string();

    while let Some(parent) = source.parent_class(&current)? {
        if same_class(&parent, class) || chain.iter().any(|seen| same_class(seen, &parent)) {
            warn!(class, parent = %parent, "circular inheritance detected, stopping walk");
            break;
        }
        if chain.len() >= MAX_INHERITANCE_DEPTH {
            warn!(class, depth = chain.len(), "inheritance chain too deep, truncating");
            break;
        }
        let parent = normalize_class_name(&parent).to_string();
        chain.push(parent.clone());
        current = parent;
    }

    Ok(chain)
}

/// Return `class` followed by its ancestors, nearest first.
pub fn lineage<S>(source: &S, class: &str) -> Result<Vec<String>>
where
    S: ReflectionSource + ?Sized,
{
    let mut lineage = vec![normalize_class_name(class).to_string()];
    lineage.extend(ancestor_chain(source, class)?);
    Ok(lineage)
}
