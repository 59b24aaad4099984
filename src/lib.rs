//! Instrumented self-balancing binary search trees.
//!
//! This crate implements an AVL tree and a red-black tree over `i32` keys. Every key comparison
//! and every single rotation performed by an operation is recorded in counters owned by the tree,
//! so the two balancing strategies can be compared on identical workloads. Equal keys are routed
//! into the right subtree on insertion, so duplicates coexist in both trees.

pub mod arena;
pub mod avl_tree;
pub mod metrics;
pub mod red_black_tree;
