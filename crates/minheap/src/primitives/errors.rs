//! Error types for heap operations.
//!
//! ## Purpose
//!
//! This module defines the precondition violations a caller can commit
//! against an [`OrderedHeap`](crate::OrderedHeap): popping from an
//! empty heap and addressing a position past the end.
//!
//! ## Design notes
//!
//! * **Contextual**: Index errors carry both the offending index and the length.
//! * **Non-destructive**: An operation that returns an error has not touched the heap.
//! * **No-std**: Only `core` formatting is used; `std::error::Error` is gated on `std`.
//!
//! ## Non-goals
//!
//! * This module does not perform the bounds checks itself.
//! * Comparator inconsistency is not an error condition; it is not detectable.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements.
    Empty,

    /// The position does not address a stored element.
    IndexOutOfBounds {
        /// Position requested by the caller.
        index: usize,
        /// Number of elements in the heap at the time of the call.
        len: usize,
    },
}

impl HeapError {
    /// Build the error for `index`, or `Empty` when there is nothing to address.
    #[inline]
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else {
            Self::IndexOutOfBounds { index, len }
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Empty => write!(f, "Heap is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Index out of bounds: {index} (heap holds {len} elements)"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for HeapError {}
