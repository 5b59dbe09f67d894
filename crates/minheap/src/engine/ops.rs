//! Heap maintenance operations.
//!
//! ## Purpose
//!
//! This module provides the five operations that keep a [`HeapStorage`]
//! container a valid min-heap: building the invariant from arbitrary
//! contents, insertion, removal of the minimum, removal at a position, and
//! repair after a value changed in place.
//!
//! ## Design notes
//!
//! * **Total**: Calls that address nothing (`pop_at` on an empty container,
//!   `remove_at`/`fix_at` past the end) return `None`/`false` and leave the
//!   container untouched.
//! * **One direction**: After an element at `i` is replaced, at most one of
//!   sift-down or sift-up can move it. This holds for any strict weak
//!   ordering and is what `remove_at` and `fix_at` rely on.
//!
//! ## Complexity
//!
//! `init` is O(n); every other operation is O(log n).

// Internal dependencies
use crate::engine::sift::{down, up};
use crate::engine::storage::HeapStorage;
use crate::primitives::index::last_parent;

/// Establish the heap invariant over the current contents.
///
/// Idempotent: on a container that already satisfies the invariant no swap
/// takes place.
pub fn init<H: HeapStorage + ?Sized>(h: &mut H) {
    let n = h.len();
    if let Some(last) = last_parent(n) {
        for i in (0..=last).rev() {
            down(h, i, n);
        }
    }
}

/// Push `item` onto the heap.
pub fn push_at<H: HeapStorage + ?Sized>(h: &mut H, item: H::Item) {
    h.push_last(item);
    if let Some(last) = h.len().checked_sub(1) {
        up(h, last);
    }
}

/// Remove and return the minimum element, or `None` if the heap is empty.
///
/// Equivalent to `remove_at(h, 0)`.
pub fn pop_at<H: HeapStorage + ?Sized>(h: &mut H) -> Option<H::Item> {
    let n = h.len().checked_sub(1)?;
    h.swap(0, n);
    down(h, 0, n);
    h.pop_last()
}

/// Remove and return the element at position `i`, or `None` if `i` is past
/// the end.
pub fn remove_at<H: HeapStorage + ?Sized>(h: &mut H, i: usize) -> Option<H::Item> {
    let len = h.len();
    if i >= len {
        return None;
    }

    let n = len - 1;
    if i != n {
        h.swap(i, n);
        if !down(h, i, n) {
            up(h, i);
        }
    }
    h.pop_last()
}

/// Re-establish the heap ordering after the element at `i` changed value.
///
/// Cheaper than `remove_at(h, i)` followed by `push_at` of the new value.
/// Returns `false` without doing anything if `i` is past the end.
pub fn fix_at<H: HeapStorage + ?Sized>(h: &mut H, i: usize) -> bool {
    let n = h.len();
    if i >= n {
        return false;
    }
    if !down(h, i, n) {
        up(h, i);
    }
    true
}
