use serde_json::Value;

use crate::options::{TraversalOptions, TreeOptions};
use crate::shape::{attach_children, child_list, EmptyChildren, NodeShape, Position};
use crate::traverse::traverse;

/// Transform every node, keeping the nesting.
///
/// When the source node has children, the mapped children are stored on the
/// transformed node under the key resolved for the source node, replacing whatever the
/// transform put there. Childless nodes are returned exactly as the transform built
/// them, so an empty list copied by the transform stays empty. Transforms that return
/// a non-object have nowhere to hold children; their subtrees are still visited but
/// the mapped children are discarded.
pub fn map_nested<F>(forest: &[Value], mut transform: F, options: &TreeOptions) -> Vec<Value>
where
    F: FnMut(&Value, &Position<'_>) -> Value,
{
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    map_level(forest, &mut ancestors, &shape, &mut transform)
}

fn map_level<'a, F>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    transform: &mut F,
) -> Vec<Value>
where
    F: FnMut(&Value, &Position<'_>) -> Value,
{
    let mut mapped = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        let mut out = transform(node, &position);
        let key = shape.children_key(node, &position);
        let children = child_list(node, &key).unwrap_or(&[]);
        if !children.is_empty() {
            ancestors.push(node);
            let children = map_level(children, ancestors, shape, transform);
            ancestors.pop();
            attach_children(&mut out, &key, children, EmptyChildren::Keep);
        }
        mapped.push(out);
    }
    mapped
}

/// Transform results in traversal order.
pub fn map_flat<'a, R, F>(forest: &'a [Value], transform: F, options: &TraversalOptions) -> Vec<R>
where
    F: FnMut(&'a Value, &Position<'_>) -> R,
{
    let shape = NodeShape::new(&options.children_key);
    traverse(options.strategy, forest, transform, &shape)
}
