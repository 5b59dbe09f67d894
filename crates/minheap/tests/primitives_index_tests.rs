#![cfg(feature = "dev")]
//! Tests for implicit binary tree index arithmetic.
//!
//! These tests verify the parent/child mapping used by the sift primitives:
//! - Parent and child positions for small trees
//! - Overflow behavior near `usize::MAX`
//! - Heapify start position for various sizes
//!
//! ## Test Organization
//!
//! 1. **Parent/Child Mapping** - Known positions, round trips
//! 2. **Overflow Guard** - Child computation at the top of the range
//! 3. **Heapify Start** - `last_parent` for empty, tiny and odd/even trees

use minheap::internals::primitives::index::{last_parent, left_child, parent, right_child};

// ============================================================================
// Parent/Child Mapping Tests
// ============================================================================

/// Test parent positions for the first levels of the tree.
#[test]
fn test_parent_known_positions() {
    assert_eq!(parent(0), None, "Root has no parent");
    assert_eq!(parent(1), Some(0));
    assert_eq!(parent(2), Some(0));
    assert_eq!(parent(3), Some(1));
    assert_eq!(parent(4), Some(1));
    assert_eq!(parent(5), Some(2));
    assert_eq!(parent(6), Some(2));
    assert_eq!(parent(25), Some(12));
}

/// Test child positions for the first levels of the tree.
#[test]
fn test_children_known_positions() {
    assert_eq!(left_child(0), Some(1));
    assert_eq!(right_child(0), Some(2));
    assert_eq!(left_child(3), Some(7));
    assert_eq!(right_child(6), Some(14));
    assert_eq!(left_child(11), Some(23));
}

/// Test that every child maps back to its parent.
#[test]
fn test_child_parent_round_trip() {
    for i in 0..10_000 {
        let l = left_child(i).expect("small index cannot overflow");
        let r = right_child(i).expect("small index cannot overflow");
        assert_eq!(r, l + 1, "Right child should follow left child");
        assert_eq!(parent(l), Some(i));
        assert_eq!(parent(r), Some(i));
    }
}

// ============================================================================
// Overflow Guard Tests
// ============================================================================

/// Test that child computation refuses to wrap around.
#[test]
fn test_children_overflow() {
    let top = usize::MAX / 2;
    assert_eq!(
        left_child(top),
        Some(usize::MAX),
        "Largest representable child"
    );
    assert_eq!(right_child(top), None, "One past usize::MAX must not wrap");
    assert_eq!(left_child(top + 1), None);
    assert_eq!(right_child(usize::MAX), None);
}

// ============================================================================
// Heapify Start Tests
// ============================================================================

/// Test the last internal node for a range of tree sizes.
#[test]
fn test_last_parent() {
    assert_eq!(last_parent(0), None, "Empty tree has no parent");
    assert_eq!(last_parent(1), None, "Single node has no children");
    assert_eq!(last_parent(2), Some(0));
    assert_eq!(last_parent(3), Some(0));
    assert_eq!(last_parent(4), Some(1));
    assert_eq!(last_parent(7), Some(2));
    assert_eq!(last_parent(8), Some(3));

    for n in 2..500 {
        let p = last_parent(n).unwrap();
        assert!(left_child(p).unwrap() < n, "Last parent must have a child");
        assert!(left_child(p + 1).unwrap() >= n, "Next node must be a leaf");
    }
}
