// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Retree
//!
//! A binary tree rebuilt from two enumerations of its values: the in-order and
//! the pre-order traversal. Once built the tree is read-only and exposes its
//! in-order, pre-order and level-order enumerations.
//!
//! ```
//! use retree::BinaryTree;
//!
//! let tree = BinaryTree::new([4, 2, 1, 6, 3, 7], [1, 2, 4, 3, 6, 7]).unwrap();
//! assert_eq!(tree.level_order_values(), vec![1, 2, 3, 4, 6, 7]);
//! ```

pub mod bt;

pub use bt::{BinaryTree, BinaryTreeError, SequenceError, Traversal};
