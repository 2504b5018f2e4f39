use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::shape::Position;

pub const DEFAULT_CHILDREN_KEY: &str = "children";
pub const DEFAULT_ID_KEY: &str = "id";
pub const DEFAULT_PARENT_KEY: &str = "pid";

type KeyFn = dyn Fn(&Value, &Position<'_>) -> String;

/// Names a node property, either fixed or computed per node and position.
///
/// Dynamic getters are evaluated at every node visited, so the resolved name may
/// differ between siblings or between depths.
#[derive(Clone)]
pub enum KeyGetter {
    Fixed(String),
    Dynamic(Rc<KeyFn>),
}

impl KeyGetter {
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::Fixed(name.into())
    }

    pub fn dynamic<F>(resolve: F) -> Self
    where
        F: Fn(&Value, &Position<'_>) -> String + 'static,
    {
        Self::Dynamic(Rc::new(resolve))
    }

    /// Resolve the property name for `node` at `position`.
    pub fn resolve(&self, node: &Value, position: &Position<'_>) -> Cow<'_, str> {
        match self {
            Self::Fixed(name) => Cow::Borrowed(name.as_str()),
            Self::Dynamic(resolve) => Cow::Owned(resolve(node, position)),
        }
    }
}

impl fmt::Debug for KeyGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for KeyGetter {
    fn from(name: &str) -> Self {
        Self::fixed(name)
    }
}

impl From<String> for KeyGetter {
    fn from(name: String) -> Self {
        Self::Fixed(name)
    }
}

/// Walk order used by flat-producing operations and `find`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    #[serde(rename = "pre")]
    PreOrder,
    #[serde(rename = "post")]
    PostOrder,
    #[serde(rename = "breadth")]
    BreadthFirst,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreOrder => "pre",
            Self::PostOrder => "post",
            Self::BreadthFirst => "breadth",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pre" => Ok(Self::PreOrder),
            "post" => Ok(Self::PostOrder),
            "breadth" => Ok(Self::BreadthFirst),
            other => Err(Error::UnknownStrategy(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(Error::UnknownSortOrder(other.to_owned())),
        }
    }
}

/// Options shared by every operation: where children live.
#[derive(Clone, Debug)]
pub struct TreeOptions {
    pub children_key: KeyGetter,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            children_key: KeyGetter::fixed(DEFAULT_CHILDREN_KEY),
        }
    }
}

impl TreeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.children_key = key.into();
        self
    }
}

/// Options for operations that can walk in any [`Strategy`].
#[derive(Clone, Debug)]
pub struct TraversalOptions {
    pub children_key: KeyGetter,
    pub strategy: Strategy,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            children_key: KeyGetter::fixed(DEFAULT_CHILDREN_KEY),
            strategy: Strategy::default(),
        }
    }
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.children_key = key.into();
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Options for [`crate::sort`]. The sort key has no default.
#[derive(Clone, Debug)]
pub struct SortOptions {
    pub sort_key: String,
    pub order: SortOrder,
    pub children_key: KeyGetter,
}

impl SortOptions {
    pub fn new(sort_key: impl Into<String>) -> Self {
        Self {
            sort_key: sort_key.into(),
            order: SortOrder::default(),
            children_key: KeyGetter::fixed(DEFAULT_CHILDREN_KEY),
        }
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_children_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.children_key = key.into();
        self
    }
}

/// Options for [`crate::from_flat_list`].
///
/// Getters are called with a position whose `index` is the record's index in the
/// input list, `depth` 0, and no parents.
#[derive(Clone, Debug)]
pub struct FromFlatListOptions {
    pub id_key: KeyGetter,
    pub parent_key: KeyGetter,
    pub children_key: KeyGetter,
}

impl Default for FromFlatListOptions {
    fn default() -> Self {
        Self {
            id_key: KeyGetter::fixed(DEFAULT_ID_KEY),
            parent_key: KeyGetter::fixed(DEFAULT_PARENT_KEY),
            children_key: KeyGetter::fixed(DEFAULT_CHILDREN_KEY),
        }
    }
}

impl FromFlatListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.id_key = key.into();
        self
    }

    pub fn with_parent_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.parent_key = key.into();
        self
    }

    pub fn with_children_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.children_key = key.into();
        self
    }
}

/// Options for [`crate::to_flat_list`].
#[derive(Clone, Debug)]
pub struct ToFlatListOptions {
    pub id_key: KeyGetter,
    pub parent_key: KeyGetter,
    pub children_key: KeyGetter,
    pub strategy: Strategy,
}

impl Default for ToFlatListOptions {
    fn default() -> Self {
        Self {
            id_key: KeyGetter::fixed(DEFAULT_ID_KEY),
            parent_key: KeyGetter::fixed(DEFAULT_PARENT_KEY),
            children_key: KeyGetter::fixed(DEFAULT_CHILDREN_KEY),
            strategy: Strategy::default(),
        }
    }
}

impl ToFlatListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.id_key = key.into();
        self
    }

    pub fn with_parent_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.parent_key = key.into();
        self
    }

    pub fn with_children_key(mut self, key: impl Into<KeyGetter>) -> Self {
        self.children_key = key.into();
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strategy_parses_and_serializes_short_names() {
        assert_eq!("breadth".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!(
            "sideways".parse::<Strategy>(),
            Err(Error::UnknownStrategy("sideways".into()))
        );
        assert_eq!(serde_json::to_value(Strategy::PostOrder).unwrap(), json!("post"));
        let parsed: Strategy = serde_json::from_value(json!("pre")).unwrap();
        assert_eq!(parsed, Strategy::PreOrder);
    }

    #[test]
    fn sort_order_round_trips_through_display() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            assert_eq!(order.to_string().parse::<SortOrder>().unwrap(), order);
        }
        assert!(matches!(
            "up".parse::<SortOrder>(),
            Err(Error::UnknownSortOrder(s)) if s == "up"
        ));
    }

    #[test]
    fn dynamic_getter_sees_position() {
        let getter = KeyGetter::dynamic(|_, position| format!("level{}", position.depth));
        let node = json!({});
        let parents = [&node];
        let position = Position {
            depth: 1,
            index: 0,
            parents: &parents,
        };
        assert_eq!(getter.resolve(&node, &position), "level1");
        assert_eq!(KeyGetter::from("items").resolve(&node, &position), "items");
    }
}
