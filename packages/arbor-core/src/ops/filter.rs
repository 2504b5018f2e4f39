use serde_json::Value;

use crate::ops::retain::retain_nodes;
use crate::options::{TraversalOptions, TreeOptions};
use crate::shape::{NodeShape, Position};
use crate::traverse::traverse;

/// Keep the nodes matching `predicate`, preserving nesting.
///
/// An unmatched node cuts its branch: descendants are dropped even if they would
/// match. Use [`crate::search`] to keep matching descendants.
pub fn filter_nested<P>(forest: &[Value], predicate: P, options: &TreeOptions) -> Vec<Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    retain_nodes(forest, predicate, options)
}

/// Matching nodes in traversal order. Every node is tested, matched or not.
pub fn filter_flat<'a, P>(
    forest: &'a [Value],
    mut predicate: P,
    options: &TraversalOptions,
) -> Vec<&'a Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let shape = NodeShape::new(&options.children_key);
    traverse(
        options.strategy,
        forest,
        |node, position| predicate(node, position).then_some(node),
        &shape,
    )
    .into_iter()
    .flatten()
    .collect()
}
