use serde_json::Value;

use crate::options::{Strategy, TraversalOptions};
use crate::shape::{NodeShape, Position};
use crate::traverse::BreadthQueue;

/// First node matching `predicate` in the configured order.
///
/// The walk stops at the match: no later sibling, subtree, or root is offered to
/// `predicate`. The returned reference points into `forest`.
pub fn find<'a, P>(forest: &'a [Value], mut predicate: P, options: &TraversalOptions) -> Option<&'a Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    match options.strategy {
        Strategy::PreOrder => find_pre_order(forest, &mut ancestors, &shape, &mut predicate),
        Strategy::PostOrder => find_post_order(forest, &mut ancestors, &shape, &mut predicate),
        Strategy::BreadthFirst => find_breadth_first(forest, &shape, &mut predicate),
    }
}

pub(crate) fn find_pre_order<'a, P>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    predicate: &mut P,
) -> Option<&'a Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        if predicate(node, &position) {
            return Some(node);
        }
        let children = shape.children(node, &position);
        if !children.is_empty() {
            ancestors.push(node);
            let found = find_pre_order(children, ancestors, shape, predicate);
            ancestors.pop();
            if found.is_some() {
                return found;
            }
        }
    }
    None
}

fn find_post_order<'a, P>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    predicate: &mut P,
) -> Option<&'a Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        let children = shape.children(node, &position);
        if !children.is_empty() {
            ancestors.push(node);
            let found = find_post_order(children, ancestors, shape, predicate);
            ancestors.pop();
            if found.is_some() {
                return found;
            }
        }
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        if predicate(node, &position) {
            return Some(node);
        }
    }
    None
}

fn find_breadth_first<'a, P>(
    forest: &'a [Value],
    shape: &NodeShape<'_>,
    predicate: &mut P,
) -> Option<&'a Value>
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let mut queue = BreadthQueue::new(forest);
    while let Some(pending) = queue.pop() {
        let position = pending.position();
        if predicate(pending.node, &position) {
            return Some(pending.node);
        }
        queue.enqueue_children(&pending, shape.children(pending.node, &position));
    }
    None
}
