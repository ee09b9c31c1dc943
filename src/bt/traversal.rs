// SPDX-License-Identifier: MPL-2.0

//! In-order, pre-order and level-order walks.
//!
//! The walks keep their pending nodes on an explicit stack or queue, so their
//! memory use is bounded by the tree height (depth-first) or width
//! (level-order) rather than by the call stack.

use std::{
    collections::VecDeque,
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

use super::BinaryTree;

/// An order in which the values of a tree are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Left subtree, then the node, then the right subtree.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Breadth-first from the root, left child before right child.
    LevelOrder,
}

impl Traversal {
    /// All traversal orders.
    pub const ALL: [Traversal; 3] = [
        Traversal::InOrder,
        Traversal::PreOrder,
        Traversal::LevelOrder,
    ];
}

impl Display for Traversal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Traversal::InOrder => "in-order",
            Traversal::PreOrder => "pre-order",
            Traversal::LevelOrder => "level-order",
        })
    }
}

impl<V> BinaryTree<V> {
    /// Returns references to the values of the tree in the requested order.
    pub fn traverse(&self, order: Traversal) -> Vec<&V> {
        let mut visited = Vec::with_capacity(self.len());
        match order {
            Traversal::InOrder => self.walk_in_order(|value| visited.push(value)),
            Traversal::PreOrder => self.walk_pre_order(|value| visited.push(value)),
            Traversal::LevelOrder => self.walk_level_order(|value| visited.push(value)),
        }
        visited
    }

    /// Returns a copy of the values of the tree in the requested order.
    pub fn values(&self, order: Traversal) -> Vec<V>
    where
        V: Clone,
    {
        self.traverse(order).into_iter().cloned().collect()
    }

    /// Values visited left subtree first, then node, then right subtree.
    pub fn in_order_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values(Traversal::InOrder)
    }

    /// Values visited node first, then left subtree, then right subtree.
    pub fn pre_order_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values(Traversal::PreOrder)
    }

    /// Values visited level by level from the root, left to right.
    pub fn level_order_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values(Traversal::LevelOrder)
    }

    /// Number of levels in the tree; 0 for the empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<usize> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&i| [self.nodes[i].left, self.nodes[i].right])
                .flatten()
                .collect();
        }
        height
    }

    fn walk_in_order<'a>(&'a self, mut visit: impl FnMut(&'a V)) {
        let mut stack = Vec::new();
        let mut next = self.root;
        loop {
            while let Some(i) = next {
                stack.push(i);
                next = self.nodes[i].left;
            }
            let Some(i) = stack.pop() else {
                break;
            };
            visit(&self.nodes[i].value);
            next = self.nodes[i].right;
        }
    }

    fn walk_pre_order<'a>(&'a self, mut visit: impl FnMut(&'a V)) {
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            visit(&node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    fn walk_level_order<'a>(&'a self, mut visit: impl FnMut(&'a V)) {
        let mut queue: VecDeque<usize> = self.root.into_iter().collect();
        while let Some(i) = queue.pop_front() {
            let node = &self.nodes[i];
            visit(&node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bt::{BinaryTree, Traversal};

    fn sample() -> BinaryTree<u32> {
        BinaryTree::new([4, 2, 1, 6, 3, 7], [1, 2, 4, 3, 6, 7]).unwrap()
    }

    #[test]
    fn walks() {
        let tree = sample();
        assert_eq!(tree.in_order_values(), vec![4, 2, 1, 6, 3, 7]);
        assert_eq!(tree.pre_order_values(), vec![1, 2, 4, 3, 6, 7]);
        assert_eq!(tree.level_order_values(), vec![1, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn traverse_borrows() {
        let tree = BinaryTree::new(["a", "b", "c"], ["b", "a", "c"]).unwrap();
        assert_eq!(tree.traverse(Traversal::LevelOrder), vec![&"b", &"a", &"c"]);
    }

    #[test]
    fn empty_tree_walks() {
        let tree = BinaryTree::<u32>::empty();
        for order in Traversal::ALL {
            assert!(tree.values(order).is_empty(), "{order}");
        }
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn repeated_walks_agree() {
        let tree = sample();
        for order in Traversal::ALL {
            assert_eq!(tree.values(order), tree.values(order));
        }
    }

    #[test]
    fn height() {
        assert_eq!(sample().height(), 3);
        let chain = BinaryTree::new(0..5, (0..5).rev()).unwrap();
        assert_eq!(chain.height(), 5);
        let leaf = BinaryTree::new(['x'], ['x']).unwrap();
        assert_eq!(leaf.height(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Traversal::InOrder.to_string(), "in-order");
        assert_eq!(Traversal::LevelOrder.to_string(), "level-order");
    }
}
