//! High-level API for the ordered min-heap.
//!
//! ## Purpose
//!
//! This module provides [`OrderedHeap`], a priority queue over any `Ord`
//! element type backed by a contiguous `Vec`. All structural work is
//! delegated to the [`engine`](crate::engine); this type only owns the
//! storage and turns precondition violations into [`HeapError`]s.
//!
//! ## Design notes
//!
//! * **Checked**: `pop`, `remove`, `fix`, `replace` and `update` return
//!   `Err` on an empty heap or an out-of-range position, and leave the heap
//!   untouched when they do.
//! * **Owned**: The heap exclusively owns its buffer. Values returned by
//!   `pop`/`remove` are moved out; borrowed views (`peek`, `get`, `iter`)
//!   end before the next mutation.
//! * **Max-heap**: Use `core::cmp::Reverse<T>` as the element type.
//!
//! ## Invariants
//!
//! * Between public calls, no element sorts strictly before its parent.
//! * The element at position 0, if any, is a minimum.
//!
//! ## Non-goals
//!
//! * This module does not accept runtime comparators; ordering is `T: Ord`.
//! * This module does not provide internal synchronization.

#[cfg(not(feature = "std"))]
use alloc::vec::{self, Vec};
#[cfg(feature = "std")]
use std::vec;

// External dependencies
use core::mem;
use core::slice;

// Internal dependencies
use crate::engine::{self, HeapStorage};
use crate::primitives::errors::HeapError;

// ============================================================================
// Ordered Heap
// ============================================================================

/// A binary min-heap of totally ordered elements.
///
/// ```rust
/// use minheap::prelude::*;
///
/// let mut heap = OrderedHeap::from_values(0, [2, 1, 3]);
/// heap.push(0);
///
/// assert_eq!(heap.pop()?, 0);
/// assert_eq!(heap.pop()?, 1);
/// assert_eq!(heap.len(), 2);
/// # Result::<(), HeapError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct OrderedHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> OrderedHeap<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty heap.
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty heap with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a heap from an initial batch of values.
    ///
    /// The capacity is at least `max(capacity, number of values)`. The batch
    /// is heapified once, in O(n).
    pub fn from_values<I>(capacity: usize, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut data = Vec::with_capacity(capacity.max(values.size_hint().0));
        data.extend(values);
        data.reserve(capacity.saturating_sub(data.len()));

        let mut heap = Self { data };
        engine::init(&mut heap);
        heap
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Push `item` onto the heap.
    #[inline]
    pub fn push(&mut self, item: T) {
        engine::push_at(self, item);
    }

    /// Remove and return the minimum element.
    #[inline]
    pub fn pop(&mut self) -> Result<T, HeapError> {
        engine::pop_at(self).ok_or(HeapError::Empty)
    }

    /// Remove and return the element currently stored at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.len();
        engine::remove_at(self, index).ok_or_else(|| HeapError::out_of_bounds(index, len))
    }

    /// Restore the heap ordering around `index`.
    ///
    /// Calling this when nothing changed is harmless. Prefer
    /// [`replace`](Self::replace) or [`update`](Self::update), which change
    /// the value and repair the heap in one step.
    pub fn fix(&mut self, index: usize) -> Result<(), HeapError> {
        let len = self.len();
        if engine::fix_at(self, index) {
            Ok(())
        } else {
            Err(HeapError::out_of_bounds(index, len))
        }
    }

    /// Store `item` at `index`, restore the ordering, and return the value
    /// it replaced.
    pub fn replace(&mut self, index: usize, item: T) -> Result<T, HeapError> {
        let old = mem::replace(self.slot_mut(index)?, item);
        engine::fix_at(self, index);
        Ok(old)
    }

    /// Modify the element at `index` in place, then restore the ordering.
    ///
    /// The ordering is restored even if `f` panics.
    ///
    /// ```rust
    /// use minheap::OrderedHeap;
    ///
    /// let mut heap = OrderedHeap::from_values(0, [10, 20, 30]);
    /// heap.update(0, |v| *v += 100)?;
    /// assert_eq!(heap.peek(), Some(&20));
    /// # Result::<(), minheap::HeapError>::Ok(())
    /// ```
    pub fn update<F>(&mut self, index: usize, f: F) -> Result<(), HeapError>
    where
        F: FnOnce(&mut T),
    {
        let len = self.len();
        if index >= len {
            return Err(HeapError::out_of_bounds(index, len));
        }

        let mut slot = FixOnDrop { heap: self, index };
        f(&mut slot.heap.data[index]);
        Ok(())
    }

    /// Re-establish the heap invariant over the whole buffer.
    ///
    /// Never needed after the checked operations above; provided for parity
    /// with the engine's `init`.
    #[inline]
    pub fn rebuild(&mut self) {
        engine::init(self);
    }

    /// Consume the heap and return its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = engine::pop_at(&mut self) {
            sorted.push(item);
        }
        sorted
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut T, HeapError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| HeapError::out_of_bounds(index, len))
    }
}

impl<T> OrderedHeap<T> {
    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The minimum element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The element stored at `index`, in heap order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// The underlying buffer, in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements in heap order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    // ========================================================================
    // Buffer Management
    // ========================================================================

    /// Reserve room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Remove every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consume the heap and return the buffer in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// Repairs the heap around `index` when dropped, including during unwinding.
struct FixOnDrop<'a, T: Ord> {
    heap: &'a mut OrderedHeap<T>,
    index: usize,
}

impl<T: Ord> Drop for FixOnDrop<'_, T> {
    fn drop(&mut self) {
        engine::fix_at(self.heap, self.index);
    }
}

// ============================================================================
// Capability Contract
// ============================================================================

impl<T: Ord> HeapStorage for OrderedHeap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.data[i] < self.data[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    #[inline]
    fn push_last(&mut self, item: T) {
        self.data.push(item);
    }

    #[inline]
    fn pop_last(&mut self) -> Option<T> {
        self.data.pop()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T: Ord> Default for OrderedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for OrderedHeap<T> {
    /// Heapify `data` in place, in O(n).
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        engine::init(&mut heap);
        heap
    }
}

impl<T> From<OrderedHeap<T>> for Vec<T> {
    fn from(heap: OrderedHeap<T>) -> Self {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for OrderedHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for OrderedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for OrderedHeap<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Elements are yielded in heap order, not sorted order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
