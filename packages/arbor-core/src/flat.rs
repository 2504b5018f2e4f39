//! Conversion between flat, parent-referencing record lists and nested forests.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::options::{FromFlatListOptions, ToFlatListOptions};
use crate::shape::{copy_without, NodeShape, Position};
use crate::traverse::traverse;

/// Link flat records into a forest through their parent references.
///
/// A record without the parent-key property is a root. A record with one has the
/// property stripped and is appended to its parent's children, or becomes a root when
/// no record carries that id. Roots and siblings keep input order; children are
/// appended after any array the parent already holds under the children key. Later
/// records win when ids repeat.
///
/// Records that are their own ancestor are never reachable from a root and do not
/// appear in the output.
pub fn from_flat_list(records: Vec<Value>, options: &FromFlatListOptions) -> Result<Vec<Value>> {
    if let Some(index) = records.iter().position(|record| !record.is_object()) {
        return Err(Error::NotAnObject { index });
    }
    let mut records = records;
    trace!(records = records.len(), "linking flat records");

    let mut by_id: HashMap<String, usize> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let position = Position::root(index);
        let id_key = options.id_key.resolve(record, &position);
        match record.get(id_key.as_ref()) {
            Some(id) => {
                if let Some(previous) = by_id.insert(id_token(id), index) {
                    debug!(%id, previous, index, "duplicate record id; the later record wins");
                }
            }
            None => trace!(index, id_key = %id_key, "record has no id"),
        }
    }

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    for index in 0..records.len() {
        let position = Position::root(index);
        let parent_key = options.parent_key.resolve(&records[index], &position);
        let parent_id = records[index]
            .as_object_mut()
            .and_then(|map| map.remove(parent_key.as_ref()));
        let Some(parent_id) = parent_id else {
            roots.push(index);
            continue;
        };
        match by_id.get(&id_token(&parent_id)) {
            Some(&parent) => children[parent].push(index),
            None => {
                debug!(index, %parent_id, "parent not found; promoting record to root");
                roots.push(index);
            }
        }
    }

    let mut slots: Vec<Option<Value>> = records.into_iter().map(Some).collect();
    Ok(roots
        .into_iter()
        .filter_map(|root| assemble(root, &mut slots, &children, options))
        .collect())
}

/// Hashable identity of an id value. Distinguishes `1` from `"1"`.
fn id_token(id: &Value) -> String {
    id.to_string()
}

fn assemble(
    index: usize,
    slots: &mut [Option<Value>],
    children: &[Vec<usize>],
    options: &FromFlatListOptions,
) -> Option<Value> {
    let mut record = slots[index].take()?;
    if children[index].is_empty() {
        return Some(record);
    }
    let linked: Vec<Value> = children[index]
        .iter()
        .filter_map(|&child| assemble(child, slots, children, options))
        .collect();
    let key = options
        .children_key
        .resolve(&record, &Position::root(index))
        .into_owned();
    if let Value::Object(map) = &mut record {
        match map.get_mut(&key) {
            Some(Value::Array(existing)) => existing.extend(linked),
            _ => {
                map.insert(key, Value::Array(linked));
            }
        }
    }
    Some(record)
}

/// Flatten a forest into records that reference their parent by id.
///
/// Each record is a copy of its node without the children property. Non-root records
/// gain `parent_key -> id of the parent`, where the parent key is resolved on the node
/// and the id key on the parent, both at the node's position. A parent without an id
/// yields `null`.
pub fn to_flat_list(forest: &[Value], options: &ToFlatListOptions) -> Result<Vec<Value>> {
    trace!(roots = forest.len(), strategy = %options.strategy, "flattening forest");
    let shape = NodeShape::new(&options.children_key);
    let rows = traverse(
        options.strategy,
        forest,
        |node, position| flatten_node(node, position, &shape, options),
        &shape,
    );
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.ok_or(Error::NotAnObject { index }))
        .collect()
}

fn flatten_node(
    node: &Value,
    position: &Position<'_>,
    shape: &NodeShape<'_>,
    options: &ToFlatListOptions,
) -> Option<Value> {
    if !node.is_object() {
        return None;
    }
    let children_key = shape.children_key(node, position);
    let mut row = copy_without(node, &children_key);
    if let (Some(parent), Value::Object(map)) = (position.parent(), &mut row) {
        let parent_key = options.parent_key.resolve(node, position);
        let id_key = options.id_key.resolve(parent, position);
        let parent_id = parent.get(id_key.as_ref()).cloned().unwrap_or(Value::Null);
        map.insert(parent_key.into_owned(), parent_id);
    }
    Some(row)
}
