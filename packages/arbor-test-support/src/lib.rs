#![forbid(unsafe_code)]
//! Fixtures shared by the arbor test suites and benches.

use arbor_core::{KeyGetter, Position};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Two-level tree with numeric ids under `children`:
/// `1 -> [2 -> [4, 5], 3]`.
pub fn sample_tree() -> Vec<Value> {
    vec![json!({
        "id": 1,
        "name": "Node 1",
        "children": [
            {
                "id": 2,
                "name": "Node 1.1",
                "children": [
                    { "id": 4, "name": "Node 1.1.1" },
                    { "id": 5, "name": "Node 1.1.2" }
                ]
            },
            { "id": 3, "name": "Node 1.2" }
        ]
    })]
}

/// [`sample_tree`] with children stored under `items`.
pub fn items_tree() -> Vec<Value> {
    vec![json!({
        "id": 1,
        "name": "Node 1",
        "items": [
            {
                "id": 2,
                "name": "Node 1.1",
                "items": [
                    { "id": 4, "name": "Node 1.1.1" },
                    { "id": 5, "name": "Node 1.1.2" }
                ]
            },
            { "id": 3, "name": "Node 1.2" }
        ]
    })]
}

/// Children under `level1Children` at depth 0 and `level2Children` below:
/// `1 -> [2 -> [4, 5], 3 -> [6]]`.
pub fn level_keyed_tree() -> Vec<Value> {
    vec![json!({
        "id": 1,
        "level1Children": [
            {
                "id": 2,
                "level2Children": [{ "id": 4 }, { "id": 5 }]
            },
            {
                "id": 3,
                "level2Children": [{ "id": 6 }]
            }
        ]
    })]
}

/// Children key getter matching [`level_keyed_tree`].
pub fn level_key() -> KeyGetter {
    KeyGetter::dynamic(|_, position| {
        if position.depth == 0 {
            "level1Children".to_owned()
        } else {
            "level2Children".to_owned()
        }
    })
}

/// The `id` of every node, as a JSON array, in the given order.
pub fn ids<'a>(nodes: impl IntoIterator<Item = &'a Value>) -> Value {
    Value::Array(
        nodes
            .into_iter()
            .map(|node| node.get("id").cloned().unwrap_or(Value::Null))
            .collect(),
    )
}

/// One callback invocation, reduced to ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Visit {
    pub id: Value,
    pub depth: usize,
    pub index: usize,
    pub parent_ids: Vec<Value>,
}

impl Visit {
    pub fn record(node: &Value, position: &Position<'_>) -> Self {
        Self {
            id: node.get("id").cloned().unwrap_or(Value::Null),
            depth: position.depth,
            index: position.index,
            parent_ids: position
                .parents
                .iter()
                .map(|parent| parent.get("id").cloned().unwrap_or(Value::Null))
                .collect(),
        }
    }

    pub fn new(id: i64, depth: usize, index: usize, parent_ids: &[i64]) -> Self {
        Self {
            id: json!(id),
            depth,
            index,
            parent_ids: parent_ids.iter().map(|id| json!(id)).collect(),
        }
    }
}

/// Visits expected from any pre-order walk over [`sample_tree`].
pub fn sample_tree_pre_order_visits() -> Vec<Visit> {
    vec![
        Visit::new(1, 0, 0, &[]),
        Visit::new(2, 1, 0, &[1]),
        Visit::new(4, 2, 0, &[1, 2]),
        Visit::new(5, 2, 1, &[1, 2]),
        Visit::new(3, 1, 1, &[1]),
    ]
}

/// A forest of `count` nodes where every node has up to `fanout` children, filled
/// level by level. Every node carries an `id` and a `value` to sort on.
pub fn synthetic_forest(count: usize, fanout: usize) -> Vec<Value> {
    let fanout = fanout.max(1);
    // children[i] lists the ids placed below node i, in order
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    let roots: Vec<usize> = (0..count.min(fanout)).collect();
    for id in roots.len()..count {
        let parent = (id - roots.len()) / fanout;
        children[parent].push(id);
    }
    roots
        .iter()
        .map(|&root| synthetic_node(root, &children))
        .collect()
}

fn synthetic_node(id: usize, children: &[Vec<usize>]) -> Value {
    let mut node = json!({ "id": id, "value": (id * 7919) % 1000 });
    if !children[id].is_empty() {
        node["children"] = Value::Array(
            children[id]
                .iter()
                .map(|&child| synthetic_node(child, children))
                .collect(),
        );
    }
    node
}

/// Nesting of a generated tree, before ids are assigned.
#[derive(Clone, Debug)]
pub struct Shape(pub Vec<Shape>);

pub fn arb_shapes() -> impl Strategy<Value = Vec<Shape>> {
    let leaf = Just(Shape(Vec::new()));
    let node = leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Shape)
    });
    prop::collection::vec(node, 0..4)
}

/// Forests with unique integer ids assigned in pre-order.
///
/// Nodes carry a `value` that is sometimes `null`, and some leaves hold an explicit
/// empty `children` array.
pub fn arb_forest() -> impl Strategy<Value = Vec<Value>> {
    (arb_shapes(), 0u64..1_000).prop_map(|(shapes, seed)| {
        let mut next_id = 0;
        build_level(&shapes, seed, &mut next_id)
    })
}

fn build_level(shapes: &[Shape], seed: u64, next_id: &mut u64) -> Vec<Value> {
    shapes
        .iter()
        .map(|Shape(children)| {
            *next_id += 1;
            let id = *next_id;
            let mix = id.wrapping_mul(31).wrapping_add(seed);
            let value = if mix % 4 == 0 {
                Value::Null
            } else {
                json!(mix % 10)
            };
            let mut node = json!({ "id": id, "value": value });
            if !children.is_empty() {
                node["children"] = Value::Array(build_level(children, seed, next_id));
            } else if mix % 5 == 0 {
                node["children"] = json!([]);
            }
            node
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_forest_has_requested_size() {
        let forest = synthetic_forest(100, 3);
        assert_eq!(arbor_core::count(&forest, &Default::default()), 100);
        assert_eq!(forest.len(), 3);
    }
}
