use arbor_core::{find, some, KeyGetter, Strategy, TraversalOptions, TreeOptions};
use arbor_test_support::{
    items_tree, level_key, level_keyed_tree, sample_tree, sample_tree_pre_order_visits, Visit,
};
use serde_json::{json, Value};

fn id(node: &Value) -> i64 {
    node["id"].as_i64().unwrap_or_default()
}

fn strategy(strategy: Strategy) -> TraversalOptions {
    TraversalOptions::new().with_strategy(strategy)
}

#[test]
fn find_pre_order() {
    let forest = sample_tree();
    let found = find(&forest, |n, _| id(n) > 1, &TraversalOptions::default());
    assert_eq!(found.map(id), Some(2));
    assert!(std::ptr::eq(found.unwrap(), &forest[0]["children"][0]));
}

#[test]
fn find_post_order() {
    let forest = sample_tree();
    let found = find(&forest, |n, _| id(n) != 1, &strategy(Strategy::PostOrder));
    assert_eq!(found.map(id), Some(4));
}

#[test]
fn find_breadth_first() {
    let forest = sample_tree();
    let found = find(&forest, |n, _| id(n) >= 3, &strategy(Strategy::BreadthFirst));
    assert_eq!(found.map(id), Some(3));
}

#[test]
fn find_returns_none_without_match() {
    for s in [Strategy::PreOrder, Strategy::PostOrder, Strategy::BreadthFirst] {
        assert!(find(&sample_tree(), |n, _| id(n) == 42, &strategy(s)).is_none());
    }
    assert!(find(&[], |_, _| true, &TraversalOptions::default()).is_none());
}

#[test]
fn find_with_custom_children_key() {
    let forest = items_tree();
    let as_string = TraversalOptions::new().with_children_key("items");
    assert_eq!(find(&forest, |n, _| id(n) == 5, &as_string).map(id), Some(5));
    let as_function =
        TraversalOptions::new().with_children_key(KeyGetter::dynamic(|_, _| "items".to_owned()));
    assert_eq!(find(&forest, |n, _| id(n) == 5, &as_function).map(id), Some(5));
}

#[test]
fn find_with_dynamic_children_key() {
    let forest = level_keyed_tree();
    for s in [Strategy::PreOrder, Strategy::PostOrder, Strategy::BreadthFirst] {
        let options = TraversalOptions::new()
            .with_children_key(level_key())
            .with_strategy(s);
        assert_eq!(find(&forest, |n, _| id(n) == 6, &options).map(id), Some(6));
    }
}

#[test]
fn find_reports_positions() {
    let mut visits = Vec::new();
    find(
        &sample_tree(),
        |n, p| {
            visits.push(Visit::record(n, p));
            false
        },
        &TraversalOptions::default(),
    );
    assert_eq!(visits, sample_tree_pre_order_visits());

    let mut visits = Vec::new();
    find(
        &sample_tree(),
        |n, p| {
            visits.push(Visit::record(n, p));
            false
        },
        &strategy(Strategy::BreadthFirst),
    );
    assert_eq!(
        visits,
        vec![
            Visit::new(1, 0, 0, &[]),
            Visit::new(2, 1, 0, &[1]),
            Visit::new(3, 1, 1, &[1]),
            Visit::new(4, 2, 0, &[1, 2]),
            Visit::new(5, 2, 1, &[1, 2]),
        ]
    );
}

#[test]
fn find_stops_after_a_match() {
    let forest = vec![sample_tree()[0].clone(), json!({ "id": 6 })];
    let cases = [
        (Strategy::PreOrder, vec![1, 2, 4]),
        (Strategy::PostOrder, vec![4]),
        (Strategy::BreadthFirst, vec![1, 6, 2, 3, 4]),
    ];
    for (s, expected) in cases {
        let mut visited = Vec::new();
        let found = find(
            &forest,
            |n, _| {
                visited.push(id(n));
                id(n) == 4
            },
            &strategy(s),
        );
        assert_eq!(found.map(id), Some(4));
        assert_eq!(visited, expected, "strategy {s}");
    }
}

#[test]
fn find_handles_empty_and_missing_children() {
    let forest = vec![json!({ "id": 1, "children": [] }), json!({ "id": 2 })];
    assert_eq!(find(&forest, |n, _| id(n) == 2, &TraversalOptions::default()).map(id), Some(2));
}

#[test]
fn some_matches_anywhere() {
    let options = TreeOptions::default();
    assert!(some(&sample_tree(), |n, _| id(n) == 5, &options));
    assert!(!some(&sample_tree(), |n, _| id(n) == 6, &options));
    assert!(!some(&[], |_, _| true, &options));
}

#[test]
fn some_with_custom_children_keys() {
    let options = TreeOptions::new().with_children_key("items");
    assert!(some(&items_tree(), |n, _| id(n) == 4, &options));
    let by_depth = TreeOptions::new().with_children_key(level_key());
    assert!(some(&level_keyed_tree(), |n, _| id(n) == 6, &by_depth));
    assert!(!some(&level_keyed_tree(), |n, _| id(n) == 6, &TreeOptions::default()));
}

#[test]
fn some_reports_positions() {
    let mut visits = Vec::new();
    some(
        &sample_tree(),
        |n, p| {
            visits.push(Visit::record(n, p));
            false
        },
        &TreeOptions::default(),
    );
    assert_eq!(visits, sample_tree_pre_order_visits());
}

#[test]
fn some_stops_after_a_match() {
    let forest = vec![sample_tree()[0].clone(), json!({ "id": 6 })];
    let mut visited = Vec::new();
    let matched = some(
        &forest,
        |n, _| {
            visited.push(id(n));
            id(n) == 4
        },
        &TreeOptions::default(),
    );
    assert!(matched);
    assert_eq!(visited, vec![1, 2, 4]);
}

#[test]
fn some_with_complex_predicate() {
    let matched = some(
        &sample_tree(),
        |n, p| p.depth == 2 && n["name"].as_str().is_some_and(|s| s.ends_with(".2")),
        &TreeOptions::default(),
    );
    assert!(matched);
}
