//! # minheap — Generic binary min-heap for Rust
//!
//! An array-backed binary min-heap with the heap algorithms written once
//! against a small capability trait, so the same engine maintains an
//! ordered-element heap, a plain `Vec`, or any bespoke container.
//!
//! ## What is in the box?
//!
//! - **[`OrderedHeap`]**: a priority queue over any `T: Ord`, with checked
//!   `push`, `pop`, `remove`, `fix`, `replace` and `update` operations.
//! - **[`engine`]**: the algorithms themselves (`init`, `push_at`, `pop_at`,
//!   `remove_at`, `fix_at`) over any [`HeapStorage`](engine::HeapStorage)
//!   implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use minheap::prelude::*;
//!
//! let mut heap = OrderedHeap::with_capacity(16);
//! for v in (11..=20).rev() {
//!     heap.push(v);
//! }
//!
//! let popped: Vec<i32> = (0..10).map(|_| heap.pop()).collect::<Result<_, _>>()?;
//! assert_eq!(popped, (11..=20).collect::<Vec<_>>());
//! # Result::<(), HeapError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations that address an element return `Result<_, HeapError>`:
//!
//! - **`HeapError::Empty`**: the heap holds no elements.
//! - **`HeapError::IndexOutOfBounds`**: the position is past the end.
//!
//! A failed call never modifies the heap.
//!
//! ```rust
//! use minheap::prelude::*;
//!
//! let mut heap: OrderedHeap<u32> = OrderedHeap::new();
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//!
//! heap.push(7);
//! match heap.remove(3) {
//!     Ok(v) => println!("removed {v}"),
//!     Err(e) => eprintln!("remove failed: {e}"),
//! }
//! assert_eq!(heap.len(), 1);
//! ```
//!
//! ### Max-heap
//!
//! ```rust
//! use core::cmp::Reverse;
//! use minheap::OrderedHeap;
//!
//! let mut heap: OrderedHeap<_> = [3, 9, 1].into_iter().map(Reverse).collect();
//! assert_eq!(heap.pop(), Ok(Reverse(9)));
//! ```
//!
//! ### Custom containers
//!
//! ```rust
//! use minheap::engine::{self, HeapStorage};
//!
//! // Jobs that remember their own position in the queue.
//! struct Jobs {
//!     priority: Vec<u32>,
//!     slot: Vec<usize>,
//!     id: Vec<usize>,
//! }
//!
//! impl HeapStorage for Jobs {
//!     type Item = (u32, usize);
//!     fn len(&self) -> usize { self.priority.len() }
//!     fn less(&self, i: usize, j: usize) -> bool { self.priority[i] < self.priority[j] }
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.priority.swap(i, j);
//!         self.id.swap(i, j);
//!         self.slot[self.id[i]] = i;
//!         self.slot[self.id[j]] = j;
//!     }
//!     fn push_last(&mut self, (p, id): (u32, usize)) {
//!         self.slot[id] = self.priority.len();
//!         self.priority.push(p);
//!         self.id.push(id);
//!     }
//!     fn pop_last(&mut self) -> Option<(u32, usize)> {
//!         Some((self.priority.pop()?, self.id.pop()?))
//!     }
//! }
//!
//! let mut jobs = Jobs { priority: vec![], slot: vec![0; 3], id: vec![] };
//! engine::push_at(&mut jobs, (30, 0));
//! engine::push_at(&mut jobs, (20, 1));
//! engine::push_at(&mut jobs, (10, 2));
//!
//! // Job 0 becomes urgent.
//! let at = jobs.slot[0];
//! jobs.priority[at] = 1;
//! engine::fix_at(&mut jobs, at);
//!
//! assert_eq!(engine::pop_at(&mut jobs), Some((1, 0)));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; the
//! crate then only needs `alloc`:
//!
//! ```toml
//! [dependencies]
//! minheap = { version = "0.1", default-features = false }
//! ```
//!
//! ## Thread safety
//!
//! Operations take `&mut self` and run to completion. There is no internal
//! locking; wrap a shared heap in a mutex.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - index arithmetic and error types.
mod primitives;

// Layer 2: Engine - heap algorithms over the storage contract.
pub mod engine;

// Layer 3: API - the ordered heap.
mod api;

pub use api::OrderedHeap;
pub use primitives::errors::HeapError;

// Standard minheap prelude.
pub mod prelude {
    pub use crate::api::OrderedHeap;
    pub use crate::engine::HeapStorage;
    pub use crate::primitives::errors::HeapError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
