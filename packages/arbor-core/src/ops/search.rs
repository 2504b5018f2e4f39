use serde_json::Value;

use crate::options::TreeOptions;
use crate::shape::{child_list, rebuild, EmptyChildren, NodeShape, Position};

/// Kept subtrees of one sibling list, and whether anything in them matched.
struct Pruned {
    kept: Vec<Value>,
    matched: bool,
}

/// Keep the nodes that match `predicate` and the ancestors connecting them to a root.
///
/// Children are resolved before their parent is tested, so `predicate` sees nodes in
/// post-order. A non-matching node survives only when some descendant matches, and
/// then only with the children that lead to matches.
pub fn search<P>(forest: &[Value], mut predicate: P, options: &TreeOptions) -> Vec<Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    prune(forest, &mut ancestors, &shape, &mut predicate).kept
}

fn prune<'a, P>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    predicate: &mut P,
) -> Pruned
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let mut branch = Pruned {
        kept: Vec::new(),
        matched: false,
    };
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        let key = shape.children_key(node, &position);
        let (copy, descendant_matched) = match child_list(node, &key) {
            Some(children) => {
                ancestors.push(node);
                let below = prune(children, ancestors, shape, predicate);
                ancestors.pop();
                (rebuild(node, &key, below.kept, EmptyChildren::Drop), below.matched)
            }
            None => (node.clone(), false),
        };

        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        if predicate(node, &position) || descendant_matched {
            branch.matched = true;
            branch.kept.push(copy);
        }
    }
    branch
}
