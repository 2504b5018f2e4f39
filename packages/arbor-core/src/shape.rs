//! Node-shape resolution: which property of a node holds its children.

use std::borrow::Cow;

use serde_json::Value;

use crate::options::KeyGetter;

/// Where a node sits during a walk. Built fresh for every visit, never stored on nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position<'a> {
    /// Roots are depth 0.
    pub depth: usize,
    /// Index among the node's immediate siblings.
    pub index: usize,
    /// Ancestors from the root down to the immediate parent.
    pub parents: &'a [&'a Value],
}

impl<'a> Position<'a> {
    pub fn root(index: usize) -> Self {
        Self {
            depth: 0,
            index,
            parents: &[],
        }
    }

    pub fn parent(&self) -> Option<&'a Value> {
        self.parents.last().copied()
    }
}

/// Resolves children for any node and position according to a [`KeyGetter`].
///
/// Absent or non-array children degrade to "no children"; resolution never fails.
#[derive(Clone, Copy, Debug)]
pub struct NodeShape<'o> {
    children_key: &'o KeyGetter,
}

impl<'o> NodeShape<'o> {
    pub fn new(children_key: &'o KeyGetter) -> Self {
        Self { children_key }
    }

    pub fn children_key(&self, node: &Value, position: &Position<'_>) -> Cow<'o, str> {
        self.children_key.resolve(node, position)
    }

    pub fn children<'n>(&self, node: &'n Value, position: &Position<'_>) -> &'n [Value] {
        let key = self.children_key(node, position);
        child_list(node, &key).unwrap_or(&[])
    }

    pub fn has_children(&self, node: &Value, position: &Position<'_>) -> bool {
        !self.children(node, position).is_empty()
    }
}

/// The array stored under `key`, if the property exists and is an array.
pub(crate) fn child_list<'n>(node: &'n Value, key: &str) -> Option<&'n [Value]> {
    node.get(key).and_then(Value::as_array).map(Vec::as_slice)
}

/// What to do with a rebuilt children list that ended up empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EmptyChildren {
    Drop,
    Keep,
}

/// Copy of `node` without the `key` property. Non-objects are cloned as-is.
pub(crate) fn copy_without(node: &Value, key: &str) -> Value {
    match node {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(name, _)| name.as_str() != key)
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

pub(crate) fn attach_children(node: &mut Value, key: &str, children: Vec<Value>, empty: EmptyChildren) {
    let Value::Object(map) = node else {
        return;
    };
    if children.is_empty() && empty == EmptyChildren::Drop {
        map.remove(key);
    } else {
        map.insert(key.to_owned(), Value::Array(children));
    }
}

/// Copy of `node` whose `key` property is replaced by `children`.
pub(crate) fn rebuild(node: &Value, key: &str, children: Vec<Value>, empty: EmptyChildren) -> Value {
    let mut copy = copy_without(node, key);
    attach_children(&mut copy, key, children, empty);
    copy
}
