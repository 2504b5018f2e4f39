//! Flat walks over a forest. Every reachable node is visited exactly once; there is no early exit.

use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use crate::options::Strategy;
use crate::shape::{NodeShape, Position};

/// Visit each node before its descendants, siblings left to right.
pub fn pre_order<'a, R, F>(forest: &'a [Value], mut visit: F, shape: &NodeShape<'_>) -> Vec<R>
where
    F: FnMut(&'a Value, &Position<'_>) -> R,
{
    let mut out = Vec::new();
    let mut ancestors = Vec::new();
    pre_order_walk(forest, &mut ancestors, shape, &mut visit, &mut out);
    out
}

fn pre_order_walk<'a, R, F>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    visit: &mut F,
    out: &mut Vec<R>,
) where
    F: FnMut(&'a Value, &Position<'_>) -> R,
{
    for (index, node) in nodes.iter().enumerate() {
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        out.push(visit(node, &position));
        let children = shape.children(node, &position);
        if !children.is_empty() {
            ancestors.push(node);
            pre_order_walk(children, ancestors, shape, visit, out);
            ancestors.pop();
        }
    }
}

/// Visit each node after all of its descendants.
pub fn post_order<'a, R, F>(forest: &'a [Value], mut visit: F, shape: &NodeShape<'_>) -> Vec<R>
where
    F: FnMut(&'a Value, &Position<'_>) -> R,
{
    let mut out = Vec::new();
    let mut ancestors = Vec::new();
    post_order_walk(forest, &mut ancestors, shape, &mut visit, &mut out);
    out
}

fn post_order_walk<'a, R, F>(
    nodes: &'a [Value],
    ancestors: &mut Vec<&'a Value>,
    shape: &NodeShape<'_>,
    visit: &mut F,
    out: &mut Vec<R>,
) where
    F: FnMut(&'a Value, &Position<'_>) -> R,
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
            post_order_walk(children, ancestors, shape, visit, out);
            ancestors.pop();
        }
        let position = Position {
            depth: ancestors.len(),
            index,
            parents: ancestors.as_slice(),
        };
        out.push(visit(node, &position));
    }
}

/// Visit every node at depth `d` before any node at depth `d + 1`.
pub fn breadth_first<'a, R, F>(forest: &'a [Value], mut visit: F, shape: &NodeShape<'_>) -> Vec<R>
where
    F: FnMut(&'a Value, &Position<'_>) -> R,
{
    let mut out = Vec::new();
    let mut queue = BreadthQueue::new(forest);
    while let Some(pending) = queue.pop() {
        let position = pending.position();
        out.push(visit(pending.node, &position));
        queue.enqueue_children(&pending, shape.children(pending.node, &position));
    }
    out
}

/// Dispatch to the walk selected by `strategy`.
pub fn traverse<'a, R, F>(
    strategy: Strategy,
    forest: &'a [Value],
    visit: F,
    shape: &NodeShape<'_>,
) -> Vec<R>
where
    F: FnMut(&'a Value, &Position<'_>) -> R,
{
    match strategy {
        Strategy::PreOrder => pre_order(forest, visit, shape),
        Strategy::PostOrder => post_order(forest, visit, shape),
        Strategy::BreadthFirst => breadth_first(forest, visit, shape),
    }
}

/// A node waiting in the breadth-first queue with the metadata it will be visited with.
pub(crate) struct Pending<'a> {
    pub(crate) node: &'a Value,
    index: usize,
    depth: usize,
    // Siblings share one ancestor chain.
    parents: Rc<[&'a Value]>,
}

impl<'a> Pending<'a> {
    pub(crate) fn position(&self) -> Position<'_> {
        Position {
            depth: self.depth,
            index: self.index,
            parents: &self.parents,
        }
    }
}

pub(crate) struct BreadthQueue<'a> {
    queue: VecDeque<Pending<'a>>,
}

impl<'a> BreadthQueue<'a> {
    pub(crate) fn new(forest: &'a [Value]) -> Self {
        let no_parents: Rc<[&'a Value]> = Rc::from(Vec::new());
        let queue = forest
            .iter()
            .enumerate()
            .map(|(index, node)| Pending {
                node,
                index,
                depth: 0,
                parents: Rc::clone(&no_parents),
            })
            .collect();
        Self { queue }
    }

    pub(crate) fn pop(&mut self) -> Option<Pending<'a>> {
        self.queue.pop_front()
    }

    pub(crate) fn enqueue_children(&mut self, parent: &Pending<'a>, children: &'a [Value]) {
        if children.is_empty() {
            return;
        }
        let mut chain = Vec::with_capacity(parent.parents.len() + 1);
        chain.extend_from_slice(&parent.parents);
        chain.push(parent.node);
        let chain: Rc<[&'a Value]> = Rc::from(chain);
        for (index, node) in children.iter().enumerate() {
            self.queue.push_back(Pending {
                node,
                index,
                depth: parent.depth + 1,
                parents: Rc::clone(&chain),
            });
        }
    }
}
