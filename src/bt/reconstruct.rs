// SPDX-License-Identifier: MPL-2.0

//! Rebuilds a tree from its pre-order values and the in-order position of each.
//!
//! The first value of a pre-order segment is the root of that subtree. Its
//! in-order position splits the in-order segment into the left subtree (the
//! `left_len` values before it) and the right subtree (the values after it).
//! The pre-order segment splits the same way: the root, then `left_len` values
//! for the left subtree, then the rest. Segments are kept on an explicit stack
//! so that skewed trees do not exhaust the call stack.

use log::{debug, trace};

use super::{BinaryTreeError, Node};

/// A subtree still to be linked.
struct Segment {
    /// First in-order position covered by the subtree.
    in_start: usize,
    /// First pre-order index covered by the subtree, which is also its root.
    pre_start: usize,
    len: usize,
}

/// Builds the node arena for `pre_order`, where `positions[i]` is the in-order
/// position of `pre_order[i]`.
///
/// Node `i` of the returned arena holds `pre_order[i]`, and the root (if any)
/// is node 0. The arena is reserved in full before any node is written.
pub(super) fn reconstruct<V>(
    pre_order: Vec<V>,
    positions: &[usize],
) -> Result<(Vec<Node<V>>, Option<usize>), BinaryTreeError> {
    debug_assert_eq!(pre_order.len(), positions.len());
    let len = pre_order.len();

    let mut nodes = Vec::new();
    nodes.try_reserve_exact(len)?;
    nodes.extend(pre_order.into_iter().map(|value| Node {
        value,
        left: None,
        right: None,
    }));

    let mut pending = Vec::new();
    if len > 0 {
        pending.push(Segment {
            in_start: 0,
            pre_start: 0,
            len,
        });
    }

    while let Some(segment) = pending.pop() {
        let root = segment.pre_start;
        if segment.len == 1 {
            if positions[root] != segment.in_start {
                return Err(inconsistent(root));
            }
            continue;
        }

        let position = positions[root];
        let left_len = position
            .checked_sub(segment.in_start)
            .filter(|left_len| *left_len < segment.len)
            .ok_or_else(|| inconsistent(root))?;
        let right_len = segment.len - left_len - 1;

        // Right is pushed first so the left subtree is linked first.
        if right_len > 0 {
            nodes[root].right = Some(root + 1 + left_len);
            pending.push(Segment {
                in_start: position + 1,
                pre_start: root + 1 + left_len,
                len: right_len,
            });
        }
        if left_len > 0 {
            nodes[root].left = Some(root + 1);
            pending.push(Segment {
                in_start: segment.in_start,
                pre_start: root + 1,
                len: left_len,
            });
        }
    }

    trace!("reconstructed binary tree with {len} nodes");
    Ok((nodes, (len > 0).then_some(0)))
}

fn inconsistent(pre_order_index: usize) -> BinaryTreeError {
    debug!("pre-order value {pre_order_index} lies outside its in-order segment");
    BinaryTreeError::InternalConsistency { pre_order_index }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::reconstruct;
    use crate::bt::BinaryTreeError;

    fn links<V>(nodes: &[crate::bt::Node<V>]) -> Vec<(Option<usize>, Option<usize>)> {
        nodes.iter().map(|n| (n.left, n.right)).collect()
    }

    #[test]
    fn empty_segment_yields_no_root() {
        let (nodes, root) = reconstruct::<u32>(Vec::new(), &[]).unwrap();
        assert!(nodes.is_empty());
        assert_eq!(root, None);
    }

    #[test]
    fn single_leaf() {
        let (nodes, root) = reconstruct(vec!['x'], &[0]).unwrap();
        assert_eq!(root, Some(0));
        assert_eq!(links(&nodes), vec![(None, None)]);
    }

    #[test]
    fn links_follow_pre_order_layout() {
        // in-order [4, 2, 1, 6, 3, 7], pre-order [1, 2, 4, 3, 6, 7]
        let (nodes, root) = reconstruct(vec![1, 2, 4, 3, 6, 7], &[2, 1, 0, 4, 3, 5]).unwrap();
        assert_eq!(root, Some(0));
        assert_eq!(
            links(&nodes),
            vec![
                (Some(1), Some(3)),
                (Some(2), None),
                (None, None),
                (Some(4), Some(5)),
                (None, None),
                (None, None),
            ]
        );
    }

    #[test]
    fn root_outside_segment() {
        // in-order [1, 2, 3], pre-order [2, 3, 1]: 3 cannot be in the left subtree of 2.
        let err = reconstruct(vec![2, 3, 1], &[1, 2, 0]).unwrap_err();
        assert_matches!(err, BinaryTreeError::InternalConsistency { pre_order_index: 1 });
    }

    #[test]
    fn subtree_root_beyond_segment() {
        // in-order [a, b, c, d, e], pre-order [c, d, a, b, e]: the left segment of c
        // is [a, b] but its claimed root is d.
        let err = reconstruct(vec!['c', 'd', 'a', 'b', 'e'], &[2, 3, 0, 1, 4]).unwrap_err();
        assert_matches!(err, BinaryTreeError::InternalConsistency { pre_order_index: 1 });
    }
}
