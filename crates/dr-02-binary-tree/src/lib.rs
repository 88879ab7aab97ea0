//! # DR-02 Binary Tree
//!
//! Unbalanced binary search tree over `i64` values.
//!
//! - Smaller values go left, larger values go right.
//! - Inserting a value that is already present leaves the tree unchanged.
//! - The first value inserted becomes the root.
//!
//! Insertion, lookup, traversal and drop are iterative, so a degenerate tree
//! (sorted input) does not exhaust the stack.

pub mod tree;

pub use tree::{BinaryTree, Node};
