//! Tests for heap error types.
//!
//! These tests verify that `HeapError` values carry their context and render
//! readable messages.

use minheap::HeapError;

/// Test display formatting for each variant.
#[test]
fn test_error_display() {
    assert_eq!(HeapError::Empty.to_string(), "Heap is empty");
    assert_eq!(
        HeapError::IndexOutOfBounds { index: 7, len: 3 }.to_string(),
        "Index out of bounds: 7 (heap holds 3 elements)"
    );
}

/// Test that the error works as a boxed standard error.
#[test]
fn test_error_trait_object() {
    let err: Box<dyn std::error::Error> = Box::new(HeapError::Empty);
    assert_eq!(err.to_string(), "Heap is empty");
}

/// Test equality and copy semantics.
#[test]
fn test_error_equality() {
    let a = HeapError::IndexOutOfBounds { index: 1, len: 1 };
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, HeapError::Empty);
}
