use serde_json::Value;

use crate::options::TreeOptions;
use crate::shape::{NodeShape, Position};

/// Number of nodes in the forest.
pub fn count(forest: &[Value], options: &TreeOptions) -> usize {
    count_where(forest, |_, _| true, options)
}

/// Number of nodes for which `predicate` holds. Every node is visited, pre-order.
pub fn count_where<P>(forest: &[Value], mut predicate: P, options: &TreeOptions) -> usize
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    tally(forest, &mut ancestors, &shape, &mut predicate)
}

fn tally<'a, P>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    predicate: &mut P,
) -> usize
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let mut total = 0;
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        if predicate(node, &position) {
            total += 1;
        }
        let children = shape.children(node, &position);
        if !children.is_empty() {
            ancestors.push(node);
            total += tally(children, ancestors, shape, predicate);
            ancestors.pop();
        }
    }
    total
}
