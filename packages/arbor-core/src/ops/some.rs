use serde_json::Value;

use crate::ops::find::find_pre_order;
use crate::options::TreeOptions;
use crate::shape::{NodeShape, Position};

/// Whether any node matches `predicate`. Pre-order; stops at the first match.
pub fn some<P>(forest: &[Value], mut predicate: P, options: &TreeOptions) -> bool
where
    P: FnMut(&Value, &Position<'_>) -> bool,
{
    let shape = NodeShape::new(&options.children_key);
    let mut ancestors = Vec::new();
    find_pre_order(forest, &mut ancestors, &shape, &mut predicate).is_some()
}
