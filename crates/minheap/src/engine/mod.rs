//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer implements the binary heap algorithms once, against the
//! [`HeapStorage`] capability trait, so that any container able to compare,
//! swap, and grow or shrink at its end can be maintained as a min-heap.
//! [`OrderedHeap`](crate::OrderedHeap) is one such container; a `Vec<T>` of
//! ordered elements is another, and callers can supply their own (for
//! example a task queue that records each task's position during `swap`).
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! # Example
//!
//! ```rust
//! use minheap::engine::{init, pop_at, push_at};
//!
//! let mut v = vec![5, 3, 8, 1];
//! init(&mut v);
//! push_at(&mut v, 0);
//!
//! assert_eq!(pop_at(&mut v), Some(0));
//! assert_eq!(pop_at(&mut v), Some(1));
//! ```

/// The capability trait the algorithms are written against.
pub mod storage;

// Sift-up and sift-down primitives.
pub(crate) mod sift;

/// Heap maintenance operations.
pub mod ops;

pub use ops::{fix_at, init, pop_at, push_at, remove_at};
pub use storage::HeapStorage;
