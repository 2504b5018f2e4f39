//! Operations that walk a forest on their own terms: short-circuiting, rebuilding, or tallying.

pub mod count;
pub mod delete;
pub mod filter;
pub mod find;
pub mod for_each;
pub mod map;
mod retain;
pub mod search;
pub mod some;
pub mod sort;

pub use count::{count, count_where};
pub use delete::delete_nodes;
pub use filter::{filter_flat, filter_nested};
pub use find::find;
pub use for_each::for_each;
pub use map::{map_flat, map_nested};
pub use search::search;
pub use some::some;
pub use sort::sort;
