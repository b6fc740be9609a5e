//! This crate exposes an unbalanced Binary Search Tree (BST) keyed by
//! integers along with the small stack and linked list it uses to walk
//! itself without recursion.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an `i32` key,
//! an associated value and up to two child `Node`s. The invariants kept by
//! [`Tree`] are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have
//!    a key strictly less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have
//!    a key greater than or equal to its own key.
//!
//! > The second rule means duplicate keys are allowed. They pile up to the
//! > right of the first node holding that key, so lookups and removals always
//! > hit the occurrence nearest the root.
//!
//! Searching takes `O(height)`. Nothing here rebalances the tree so inserting
//! keys in sorted order produces a chain with a height of `N - 1`. Every
//! operation that visits the whole tree (size, height, teardown, iteration)
//! uses an explicit [`Stack`] so such chains can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [64, 32, 96, 16, 48] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.get(48), Some(&"48".to_string()));
//! assert_eq!(tree.range_sum(30, 70), 144);
//!
//! assert_eq!(tree.remove(32), Some("32".to_string()));
//! assert_eq!(tree.get(32), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod list;
pub mod map;
pub mod stack;

pub use error::Error;
pub use map::{Iter, Tree};
pub use stack::Stack;
