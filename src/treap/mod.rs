//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::TreapMap;
pub use self::set::TreapSet;
