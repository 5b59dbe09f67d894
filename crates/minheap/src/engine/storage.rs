//! Capability contract for heap containers.
//!
//! ## Purpose
//!
//! This module defines [`HeapStorage`], the minimal set of operations the
//! heap algorithms need from a container. The algorithms never see the
//! concrete storage layout; they address elements by position only.
//!
//! ## Invariants
//!
//! * Positions passed to `less` and `swap` by the engine are always `< len()`.
//! * `push_last` grows the container by exactly one element at position `len()`.
//! * `pop_last` shrinks it by exactly one, returning the element at `len() - 1`.
//!
//! ## Non-goals
//!
//! * This module does not maintain the heap invariant; see [`ops`](super::ops).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Capability Trait
// ============================================================================

/// A container the heap engine can maintain.
///
/// Once [`init`](super::init) has run (or the container is empty or sorted),
/// the engine keeps the min-heap invariant
///
/// ```text
/// !h.less(j, i)  for 0 <= i < h.len(), j in {2i + 1, 2i + 2}, j < h.len()
/// ```
///
/// `less` must describe a strict weak ordering that does not change for a pair
/// of untouched positions. If it does not, the resulting arrangement is
/// unspecified, but the engine still never addresses a position outside
/// `[0, len())`.
pub trait HeapStorage {
    /// Element type moved in and out of the container.
    type Item;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// Whether the element at `i` sorts strictly before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Append `item` as element `len()`.
    fn push_last(&mut self, item: Self::Item);

    /// Remove and return element `len() - 1`, or `None` if empty.
    fn pop_last(&mut self) -> Option<Self::Item>;

    /// Whether the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Vec Implementation
// ============================================================================

impl<T: Ord> HeapStorage for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    #[inline]
    fn push_last(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn pop_last(&mut self) -> Option<T> {
        self.pop()
    }
}
