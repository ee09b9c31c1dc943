// SPDX-License-Identifier: MPL-2.0

//! A binary tree rebuilt from two of its traversals.
//!
//! ## Properties:
//! - Binary tree: nodes have either 0, 1, or 2 child nodes.
//! - Distinct values: no value occurs twice in the tree.
//! - Read-only: once built, the shape and values never change.
//!
//! ## Creation
//! [`BinaryTree::new`] takes the in-order and pre-order enumerations of a tree
//! and rebuilds the unique tree that has both. The sequences must have equal
//! lengths, hold no duplicates and contain the same values; otherwise
//! [`BinaryTreeError::InvalidArgument`] is returned and nothing is built.
//!
//! ## Query
//! [`BinaryTree::in_order_values`], [`BinaryTree::pre_order_values`] and
//! [`BinaryTree::level_order_values`] return the values of the tree in the
//! corresponding order.
//!
//! ## Copy and assignment
//! [`Clone`] produces an independent deep copy. [`BinaryTree::assign_from`]
//! builds the copy of its source completely before it replaces the current
//! tree, so a failed copy leaves the target unchanged.
//!
//! ## Example
//! This binary tree:
//!
//! ```txt
//!             1
//!          /     \
//!        2         3
//!      /         /   \
//!     4         6     7
//! ```
//!
//! is rebuilt with:
//!
//! ```
//! use retree::BinaryTree;
//!
//! let tree = BinaryTree::new([4, 2, 1, 6, 3, 7], [1, 2, 4, 3, 6, 7]).unwrap();
//! assert_eq!(tree.level_order_values(), vec![1, 2, 3, 4, 6, 7]);
//! ```

mod reconstruct;
mod traversal;
mod validate;

use std::{collections::TryReserveError, hash::Hash, mem};

use log::{debug, trace};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use traversal::Traversal;
pub use validate::{validate_sequences, SequenceError};

/// Errors triggered when building or copying a binary tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BinaryTreeError {
    /// The traversal sequences were rejected before reconstruction.
    #[error("invalid traversal sequences: {0}")]
    InvalidArgument(#[from] SequenceError),
    /// A subtree root claimed by the pre-order sequence does not lie inside
    /// its in-order segment, so no tree has both enumerations.
    #[error("pre-order value at index {pre_order_index} lies outside its in-order segment")]
    InternalConsistency {
        /// Index into the pre-order sequence of the misplaced root.
        pre_order_index: usize,
    },
    /// Storage for the nodes could not be allocated.
    #[error("node allocation failed")]
    AllocationFailure(#[from] TryReserveError),
}

impl BinaryTreeError {
    /// Returns `true` when the input sequences were rejected by validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BinaryTreeError::InvalidArgument(_))
    }
}

/// Represents a node of a binary tree.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Node<V> {
    value: V,
    left: Option<usize>,
    right: Option<usize>,
}

/// Represents a read-only binary tree of distinct values.
///
/// Nodes are stored in pre-order, so two trees with the same shape and values
/// have identical storage and compare equal.
#[derive(Debug, PartialEq, Eq)]
pub struct BinaryTree<V> {
    nodes: Vec<Node<V>>,
    root: Option<usize>,
}

impl<V: Eq + Hash> BinaryTree<V> {
    /// Rebuilds the tree whose in-order and pre-order enumerations are the
    /// given sequences.
    ///
    /// # Returns
    /// - `Ok(tree)` with `tree.in_order_values() == in_order` and
    ///   `tree.pre_order_values() == pre_order`.
    /// - `Err(InvalidArgument(_))` when the sequences differ in length, either
    ///   one holds a duplicate, or they do not hold the same values.
    /// - `Err(InternalConsistency { .. })` when the sequences hold the same
    ///   values but no tree has both enumerations.
    /// - `Err(AllocationFailure(_))` when the nodes cannot be allocated.
    pub fn new<I, P>(in_order: I, pre_order: P) -> Result<Self, BinaryTreeError>
    where
        I: IntoIterator<Item = V>,
        P: IntoIterator<Item = V>,
    {
        let in_order: Vec<V> = in_order.into_iter().collect();
        let pre_order: Vec<V> = pre_order.into_iter().collect();

        let positions = validate::in_order_positions(&in_order, &pre_order)
            .inspect_err(|err| debug!("rejected traversal sequences: {err}"))?;
        let (nodes, root) = reconstruct::reconstruct(pre_order, &positions)?;

        Ok(Self { nodes, root })
    }
}

impl<V> BinaryTree<V> {
    /// Returns the tree with no nodes.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Value stored at the root, if any.
    pub fn root(&self) -> Option<&V> {
        self.root.map(|i| &self.nodes[i].value)
    }

    /// Makes an independent deep copy of the tree, reporting allocation
    /// failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, BinaryTreeError>
    where
        V: Clone,
    {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.nodes.len())?;
        nodes.extend(self.nodes.iter().cloned());
        trace!("copied binary tree with {} nodes", nodes.len());

        Ok(Self {
            nodes,
            root: self.root,
        })
    }

    /// Replaces this tree with a deep copy of `source`.
    ///
    /// The copy is built in full before it is swapped in, and the previous
    /// nodes are released afterwards. On error `self` is unchanged.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), BinaryTreeError>
    where
        V: Clone,
    {
        let mut copy = source.try_clone()?;
        mem::swap(self, &mut copy);
        Ok(())
    }
}

impl<V> Default for BinaryTree<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Clone> Clone for BinaryTree<V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        mem::swap(self, &mut copy);
    }
}

/// Serialized form of a tree: its two defining traversals.
#[derive(Serialize)]
struct TraversalsRef<'a, V> {
    in_order: Vec<&'a V>,
    pre_order: Vec<&'a V>,
}

#[derive(Deserialize)]
struct Traversals<V> {
    in_order: Vec<V>,
    pre_order: Vec<V>,
}

impl<V: Serialize> Serialize for BinaryTree<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TraversalsRef {
            in_order: self.traverse(Traversal::InOrder),
            pre_order: self.traverse(Traversal::PreOrder),
        }
        .serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de> + Eq + Hash> Deserialize<'de> for BinaryTree<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let traversals = Traversals::<V>::deserialize(deserializer)?;
        BinaryTree::new(traversals.in_order, traversals.pre_order).map_err(de::Error::custom)
    }
}

#[cfg(feature = "test-util")]
impl<V: core::fmt::Display> core::fmt::Display for Node<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} L: {:?} R: {:?}", self.value, self.left, self.right)
    }
}

#[cfg(feature = "test-util")]
impl<V: core::fmt::Display> core::fmt::Display for BinaryTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Begin Tree ---")?;
        for node in self.nodes.iter() {
            writeln!(f, "{node}")?;
        }
        write!(f, "--- End Tree ---")
    }
}
