//! Keyed minimal-diff reconciliation between two rendered sequences.
//!
//! # Responsibility
//! - Compute the insert/remove/update operations that turn one sequence
//!   into another, keyed by a stable per-item identity.
//! - Stay independent of any rendering toolkit.
//!
//! # Invariants
//! - Items present in both sequences with identical fields produce no op.
//! - Items present in both sequences with changed fields produce an
//!   in-place `Update`, never a remove+insert pair.
//! - `Remove` indices refer to the previous sequence and are emitted in
//!   descending order; `Insert`/`Update` indices refer to the next sequence
//!   and ascend. Replaying ops in emitted order is therefore index-safe.
//!
//! # Preconditions
//! - Keys are unique within each sequence.
//! - Items retained across both sequences keep their relative order. The
//!   list view model's append/delete flows guarantee both.

use std::collections::HashMap;
use std::hash::Hash;

/// One render operation produced by [`reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    /// Insert the item at `index` of the next sequence.
    Insert { index: usize },
    /// Remove the item at `index` of the previous sequence.
    Remove { index: usize },
    /// Replace the item in place with the value at `index` of the next
    /// sequence (same identity, changed fields).
    Update { index: usize },
}

/// Computes the minimal operation list turning `previous` into `next`.
///
/// `key_of` extracts the stable identity used to match items across the two
/// sequences; full-field `PartialEq` decides whether a matched item needs an
/// in-place update. Reconciling a sequence with itself yields no ops.
pub fn reconcile<T, K, F>(previous: &[T], next: &[T], key_of: F) -> Vec<ListOp>
where
    T: PartialEq,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let previous_index: HashMap<K, usize> = previous
        .iter()
        .enumerate()
        .map(|(index, item)| (key_of(item), index))
        .collect();
    let next_index: HashMap<K, usize> = next
        .iter()
        .enumerate()
        .map(|(index, item)| (key_of(item), index))
        .collect();

    let mut ops = Vec::new();

    // Removals first, walking the old sequence backwards so earlier indices
    // stay valid while ops are replayed.
    for (index, item) in previous.iter().enumerate().rev() {
        if !next_index.contains_key(&key_of(item)) {
            ops.push(ListOp::Remove { index });
        }
    }

    for (index, item) in next.iter().enumerate() {
        match previous_index.get(&key_of(item)) {
            None => ops.push(ListOp::Insert { index }),
            Some(&previous_position) => {
                if previous[previous_position] != *item {
                    ops.push(ListOp::Update { index });
                }
            }
        }
    }

    ops
}

/// Replays an operation list from [`reconcile`] onto `previous`.
///
/// Render layers use this to mutate their row containers; tests use it to
/// prove the op list reproduces `next` exactly.
pub fn apply_ops<T: Clone>(previous: &[T], next: &[T], ops: &[ListOp]) -> Vec<T> {
    let mut result: Vec<T> = previous.to_vec();

    for op in ops {
        match *op {
            ListOp::Remove { index } => {
                result.remove(index);
            }
            ListOp::Insert { index } => {
                result.insert(index, next[index].clone());
            }
            ListOp::Update { index } => {
                result[index] = next[index].clone();
            }
        }
    }

    result
}
