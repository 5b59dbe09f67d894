//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for common
//! use: the heap itself, its error type and the storage trait.

use minheap::prelude::*;

/// Test that prelude imports are usable together.
#[test]
fn test_prelude_imports() {
    let mut heap = OrderedHeap::from_values(4, [3, 1, 2]);
    let first: Result<i32, HeapError> = heap.pop();
    assert_eq!(first, Ok(1));
}

/// Test that the storage trait is in scope for `OrderedHeap`.
#[test]
fn test_prelude_storage_trait() {
    fn smallest_first<H: HeapStorage>(h: &H) -> bool {
        (1..h.len()).all(|j| !h.less(j, (j - 1) / 2))
    }

    let heap: OrderedHeap<u64> = (0..32).rev().collect();
    assert!(smallest_first(&heap));
    assert!(!HeapStorage::is_empty(&heap));
}

/// Test that the engine is reachable from the crate root.
#[test]
fn test_engine_path() {
    let mut v = vec![4, 2, 9];
    minheap::engine::init(&mut v);
    assert_eq!(minheap::engine::pop_at(&mut v), Some(2));
}
