use serde_json::Value;
use tracing::trace;

use crate::compare::SortKey;
use crate::options::SortOptions;
use crate::shape::{child_list, rebuild, EmptyChildren, NodeShape, Position};

/// Copy the forest with every sibling list ordered by `options.sort_key`.
///
/// The sort is stable. Nodes whose key is missing or `null` go last in either
/// direction. The position handed to the children-key getter carries the node's index
/// in the unsorted list. Empty children lists are kept.
pub fn sort(forest: &[Value], options: &SortOptions) -> Vec<Value> {
    trace!(roots = forest.len(), sort_key = %options.sort_key, order = %options.order, "sorting forest");
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    sort_level(forest, &mut ancestors, &shape, options)
}

fn sort_level<'a>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    options: &SortOptions,
) -> Vec<Value> {
    let keys: Vec<SortKey> = nodes
        .iter()
        .map(|node| SortKey::of(node.get(&options.sort_key)))
        .collect();
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| keys[a].compare(&keys[b], options.order));

    let mut sorted = Vec::with_capacity(nodes.len());
    for index in order {
        let node = &nodes[index];
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        let key = shape.children_key(node, &position);
        let copy = match child_list(node, &key) {
            Some(children) if !children.is_empty() => {
                ancestors.push(node);
                let children = sort_level(children, ancestors, shape, options);
                ancestors.pop();
                rebuild(node, &key, children, EmptyChildren::Keep)
            }
            _ => node.clone(),
        };
        sorted.push(copy);
    }
    sorted
}
