//! Sift primitives for restoring the heap invariant around one position.
//!
//! Both functions only compare and swap; they never grow or shrink the
//! container. `down` works over a caller-supplied bound so that the
//! operations can exclude the last element before physically removing it.

// Internal dependencies
use crate::engine::storage::HeapStorage;
use crate::primitives::index::{left_child, parent, right_child};

/// Move the element at `j0` towards the root while it sorts before its parent.
///
/// Returns whether the element moved.
pub fn up<H: HeapStorage + ?Sized>(h: &mut H, j0: usize) -> bool {
    let mut j = j0;
    while let Some(i) = parent(j) {
        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        j = i;
    }
    j < j0
}

/// Move the element at `i0` towards the leaves of the tree `[0, n)`.
///
/// At each level the element is swapped with its smaller child (the left one
/// unless the right one sorts strictly before it) as long as that child sorts
/// strictly before the element. Returns whether the element moved.
pub fn down<H: HeapStorage + ?Sized>(h: &mut H, i0: usize, n: usize) -> bool {
    debug_assert!(n <= h.len(), "down: bound exceeds container length");

    let mut i = i0;
    loop {
        let Some(left) = left_child(i).filter(|&l| l < n) else {
            break;
        };

        let j = right_child(i)
            .filter(|&r| r < n && h.less(r, left))
            .unwrap_or(left);

        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        i = j;
    }
    i > i0
}
