// SPDX-License-Identifier: MPL-2.0

//! Checks that a pair of sequences can be the in-order and pre-order
//! enumeration of one tree of distinct values.

use std::{collections::HashMap, hash::Hash};

use super::Traversal;

/// Reasons a pair of traversal sequences is rejected before reconstruction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SequenceError {
    /// The two sequences do not have the same number of values.
    #[error("in-order has {in_order} values but pre-order has {pre_order}")]
    LengthMismatch {
        /// Length of the in-order sequence.
        in_order: usize,
        /// Length of the pre-order sequence.
        pre_order: usize,
    },
    /// A value occurs twice in one sequence.
    #[error("duplicate value at index {index} of the {traversal} sequence")]
    DuplicateValue {
        /// The sequence containing the duplicate.
        traversal: Traversal,
        /// Index of the second occurrence.
        index: usize,
    },
    /// A pre-order value does not occur in the in-order sequence.
    #[error("pre-order value at index {index} is missing from the in-order sequence")]
    MismatchedValues {
        /// Index into the pre-order sequence.
        index: usize,
    },
}

/// Returns `Ok(())` when both sequences have the same length, contain no
/// duplicates and hold the same set of values.
///
/// Passing this check does not guarantee that some tree has these two
/// enumerations; [`BinaryTree::new`](super::BinaryTree::new) reports such
/// pairs as [`InternalConsistency`](super::BinaryTreeError::InternalConsistency).
pub fn validate_sequences<V: Eq + Hash>(
    in_order: &[V],
    pre_order: &[V],
) -> Result<(), SequenceError> {
    in_order_positions(in_order, pre_order).map(|_| ())
}

/// Validates the sequences and maps every pre-order index to the position of
/// the same value in the in-order sequence.
pub(super) fn in_order_positions<V: Eq + Hash>(
    in_order: &[V],
    pre_order: &[V],
) -> Result<Vec<usize>, SequenceError> {
    if in_order.len() != pre_order.len() {
        return Err(SequenceError::LengthMismatch {
            in_order: in_order.len(),
            pre_order: pre_order.len(),
        });
    }

    let mut index = HashMap::with_capacity(in_order.len());
    for (position, value) in in_order.iter().enumerate() {
        if index.insert(value, position).is_some() {
            return Err(SequenceError::DuplicateValue {
                traversal: Traversal::InOrder,
                index: position,
            });
        }
    }

    // Equal lengths and no pre-order duplicates make the value sets equal once
    // every pre-order value is found in the in-order index.
    let mut seen = vec![false; in_order.len()];
    let mut positions = Vec::with_capacity(pre_order.len());
    for (i, value) in pre_order.iter().enumerate() {
        let position = *index
            .get(value)
            .ok_or(SequenceError::MismatchedValues { index: i })?;
        if seen[position] {
            return Err(SequenceError::DuplicateValue {
                traversal: Traversal::PreOrder,
                index: i,
            });
        }
        seen[position] = true;
        positions.push(position);
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{in_order_positions, validate_sequences, SequenceError};
    use crate::bt::Traversal;

    #[test]
    fn accepts_matching_sequences() {
        validate_sequences(&[4, 2, 1, 6, 3, 7], &[1, 2, 4, 3, 6, 7]).unwrap();
        validate_sequences::<u8>(&[], &[]).unwrap();
    }

    #[test]
    fn positions_follow_pre_order() {
        let positions = in_order_positions(&["a", "b", "c"], &["b", "a", "c"]).unwrap();
        assert_eq!(positions, vec![1, 0, 2]);
    }

    #[test]
    fn rejects_length_mismatch() {
        assert_matches!(
            validate_sequences(&["a", "b"], &["a", "b", "c"]),
            Err(SequenceError::LengthMismatch {
                in_order: 2,
                pre_order: 3
            })
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_matches!(
            validate_sequences(&["a", "a"], &["a", "a"]),
            Err(SequenceError::DuplicateValue {
                traversal: Traversal::InOrder,
                index: 1
            })
        );
        assert_matches!(
            validate_sequences(&["a", "b"], &["b", "b"]),
            Err(SequenceError::DuplicateValue {
                traversal: Traversal::PreOrder,
                index: 1
            })
        );
    }

    #[test]
    fn rejects_mismatched_values() {
        assert_matches!(
            validate_sequences(&["a", "b"], &["a", "c"]),
            Err(SequenceError::MismatchedValues { index: 1 })
        );
    }

    #[test]
    fn error_messages() {
        let err = validate_sequences(&[1], &[1, 2]).unwrap_err();
        assert_eq!(err.to_string(), "in-order has 1 values but pre-order has 2");
        let err = validate_sequences(&[1, 2], &[2, 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate value at index 1 of the pre-order sequence"
        );
    }
}
