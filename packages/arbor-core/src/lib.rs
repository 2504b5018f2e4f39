#![forbid(unsafe_code)]
//! Traversal, search, and rewriting of forests made of JSON-shaped nodes.
//!
//! A node is any [`serde_json::Value`]; object nodes may hold their children in an array under
//! a key that is fixed or resolved per node and position. Operations borrow their input forest
//! and return freshly built nodes, flat sequences, or scalars.

pub mod compare;
pub mod error;
pub mod flat;
pub mod ops;
pub mod options;
pub mod shape;
pub mod traverse;

pub use compare::compare_values;
pub use error::{Error, Result};
pub use flat::{from_flat_list, to_flat_list};
pub use ops::{
    count, count_where, delete_nodes, filter_flat, filter_nested, find, for_each, map_flat,
    map_nested, search, some, sort,
};
pub use options::{
    FromFlatListOptions, KeyGetter, SortOptions, SortOrder, Strategy, ToFlatListOptions,
    TraversalOptions, TreeOptions, DEFAULT_CHILDREN_KEY, DEFAULT_ID_KEY, DEFAULT_PARENT_KEY,
};
pub use shape::{NodeShape, Position};
pub use traverse::{breadth_first, post_order, pre_order, traverse};
