use serde_json::Value;

use crate::ops::retain::retain_nodes;
use crate::options::TreeOptions;
use crate::shape::Position;

/// Remove every node matching `predicate` together with its subtree.
///
/// Surviving nodes are copies; a node whose children were all removed loses its
/// children property.
pub fn delete_nodes<P>(forest: &[Value], mut predicate: P, options: &TreeOptions) -> Vec<Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    retain_nodes(forest, |node, position| !predicate(node, position), options)
}
