use serde_json::Value;

use crate::options::TraversalOptions;
use crate::shape::{NodeShape, Position};
use crate::traverse::traverse;

/// Call `visit` once for every node, in the configured order.
pub fn for_each<'a, F>(forest: &'a [Value], visit: F, options: &TraversalOptions)
where
    F: FnMut(&'a Value, &Position<'_>),
{
    let shape = NodeShape::new(&options.children_key);
    traverse(options.strategy, forest, visit, &shape);
}
