use serde_json::Value;

use crate::options::TreeOptions;
use crate::shape::{child_list, rebuild, EmptyChildren, NodeShape, Position};

/// Pre-order rebuild keeping the nodes `keep` accepts.
///
/// A rejected node takes its whole subtree with it; its children are never offered to
/// `keep`. Kept nodes are copied, and a children list that ends up empty is removed.
pub(crate) fn retain_nodes<K>(forest: &[Value], mut keep: K, options: &TreeOptions) -> Vec<Value>
where
    K: FnMut(&Value, &Position<'_>) -> bool,
{
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    retain_level(forest, &mut ancestors, &shape, &mut keep)
}

fn retain_level<'a, K>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    keep: &mut K,
) -> Vec<Value>
where
    K: FnMut(&Value, &Position<'_>) -> bool,
{
    let mut kept = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        if !keep(node, &position) {
            continue;
        }
        let key = shape.children_key(node, &position);
        let copy = match child_list(node, &key) {
            Some(children) => {
                ancestors.push(node);
                let children = retain_level(children, ancestors, shape, keep);
                ancestors.pop();
                rebuild(node, &key, children, EmptyChildren::Drop)
            }
            None => node.clone(),
        };
        kept.push(copy);
    }
    kept
}
