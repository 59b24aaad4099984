//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one, instrumented with comparison and rotation counters.

mod node;
mod tree;

pub use self::tree::AvlTree;
