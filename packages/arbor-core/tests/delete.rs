use arbor_core::{delete_nodes, KeyGetter, TreeOptions};
use arbor_test_support::{
    items_tree, level_key, level_keyed_tree, sample_tree, sample_tree_pre_order_visits, Visit,
};
use serde_json::{json, Value};

fn id(node: &Value) -> i64 {
    node["id"].as_i64().unwrap_or_default()
}

#[test]
fn deletes_a_leaf() {
    let result = delete_nodes(&sample_tree(), |n, _| id(n) == 4, &TreeOptions::default());
    assert_eq!(
        result,
        vec![json!({
            "id": 1,
            "name": "Node 1",
            "children": [
                {
                    "id": 2,
                    "name": "Node 1.1",
                    "children": [{ "id": 5, "name": "Node 1.1.2" }]
                },
                { "id": 3, "name": "Node 1.2" }
            ]
        })]
    );
}

#[test]
fn deleting_a_node_drops_its_subtree() {
    let result = delete_nodes(
        &sample_tree(),
        |n, _| n["name"].as_str().is_some_and(|name| name.contains("1.1")),
        &TreeOptions::default(),
    );
    assert_eq!(
        result,
        vec![json!({
            "id": 1,
            "name": "Node 1",
            "children": [{ "id": 3, "name": "Node 1.2" }]
        })]
    );
}

#[test]
fn no_match_returns_an_equal_forest() {
    let forest = sample_tree();
    assert_eq!(delete_nodes(&forest, |n, _| id(n) > 5, &TreeOptions::default()), forest);
}

#[test]
fn removes_children_property_when_all_children_go() {
    let forest = vec![json!({
        "id": 1,
        "children": [
            { "id": 2, "children": [{ "id": 4 }, { "id": 5 }] },
            { "id": 3 }
        ]
    })];
    let result = delete_nodes(&forest, |n, _| id(n) == 2 || id(n) == 3, &TreeOptions::default());
    assert_eq!(result, vec![json!({ "id": 1 })]);
    assert!(result[0].get("children").is_none());
}

#[test]
fn deleting_roots() {
    assert!(delete_nodes(&sample_tree(), |n, _| id(n) == 1, &TreeOptions::default()).is_empty());
    let forest = vec![json!({ "id": 1 }), json!({ "id": 2 }), json!({ "id": 3 })];
    let result = delete_nodes(&forest, |n, _| id(n) == 2, &TreeOptions::default());
    assert_eq!(result, vec![json!({ "id": 1 }), json!({ "id": 3 })]);
}

#[test]
fn deletes_several_nodes() {
    let result = delete_nodes(&sample_tree(), |n, _| id(n) % 2 == 0, &TreeOptions::default());
    assert_eq!(
        result,
        vec![json!({
            "id": 1,
            "name": "Node 1",
            "children": [{ "id": 3, "name": "Node 1.2" }]
        })]
    );
}

#[test]
fn custom_children_key() {
    let as_string = TreeOptions::new().with_children_key("items");
    let as_function =
        TreeOptions::new().with_children_key(KeyGetter::dynamic(|_, _| "items".to_owned()));
    for options in [as_string, as_function] {
        let result = delete_nodes(&items_tree(), |n, _| id(n) == 2, &options);
        assert_eq!(
            result,
            vec![json!({
                "id": 1,
                "name": "Node 1",
                "items": [{ "id": 3, "name": "Node 1.2" }]
            })]
        );
    }
}

#[test]
fn dynamic_children_key_by_depth() {
    let options = TreeOptions::new().with_children_key(level_key());
    let forest = level_keyed_tree();
    assert_eq!(delete_nodes(&forest, |n, _| id(n) > 6, &options), forest);

    let result = delete_nodes(&forest, |n, _| id(n) == 6, &options);
    assert_eq!(
        result,
        vec![json!({
            "id": 1,
            "level1Children": [
                { "id": 2, "level2Children": [{ "id": 4 }, { "id": 5 }] },
                { "id": 3 }
            ]
        })]
    );
}

#[test]
fn predicate_sees_positions_in_pre_order() {
    let mut visits = Vec::new();
    delete_nodes(
        &sample_tree(),
        |node, position| {
            visits.push(Visit::record(node, position));
            false
        },
        &TreeOptions::default(),
    );
    assert_eq!(visits, sample_tree_pre_order_visits());
}

#[test]
fn deleted_subtrees_are_not_visited() {
    let mut seen = Vec::new();
    delete_nodes(
        &sample_tree(),
        |node, _| {
            seen.push(id(node));
            id(node) == 2
        },
        &TreeOptions::default(),
    );
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn empty_children_list_is_normalized_away() {
    let forest = vec![json!({ "id": 1, "name": "Node 1", "children": [] })];
    assert!(delete_nodes(&forest, |n, _| id(n) == 1, &TreeOptions::default()).is_empty());
    assert_eq!(
        delete_nodes(&forest, |n, _| id(n) == 2, &TreeOptions::default()),
        vec![json!({ "id": 1, "name": "Node 1" })]
    );
}

#[test]
fn input_is_left_untouched() {
    let forest = sample_tree();
    let before = forest.clone();
    let _ = delete_nodes(&forest, |n, _| id(n) == 5, &TreeOptions::default());
    assert_eq!(forest, before);
}
