//! An ordered key-value container backed by a plain (unbalanced) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances, so its height depends entirely on
//! the order keys arrive in: sorted input builds a chain of height `N - 1`.
//!
//! ## Layout
//!
//! Nodes live in an index-addressed arena and link to each other (children and parent) by
//! [`NodeId`]. The root is the first node in the arena and keeps its id for the life of the
//! [`Tree`], even while the tree is empty or after the key it held is removed.
//!
//! # Examples
//!
//! ```
//! use rooted_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9].iter() {
//!     tree.insert(*key, key.to_string());
//! }
//!
//! assert_eq!(tree.find(&4), Ok(&"4".to_string()));
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.find_kth_largest_value(2), Ok(&"8".to_string()));
//!
//! tree.remove(&3).unwrap();
//! assert_eq!(tree.find(&3), Err(Error::KeyNotFound));
//! assert!(tree.is_bst());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod analytics;
mod error;
mod node;
pub mod queue;
mod slab;
mod traversal;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use node::{NodeId, NodeRef};
pub use tree::Tree;
