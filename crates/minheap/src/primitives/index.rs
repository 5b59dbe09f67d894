//! Index arithmetic for an array-backed binary tree.
//!
//! Node `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`:
//!
//! ```text
//!                 0
//!         1               2
//!     3       4       5       6
//!   7   8   9  10  11  12  13  14
//! ```
//!
//! Child positions are computed with checked arithmetic so that very large
//! positions yield `None` instead of wrapping around to a small index.

/// Parent of `j`, or `None` for the root.
#[inline]
pub fn parent(j: usize) -> Option<usize> {
    if j == 0 { None } else { Some((j - 1) / 2) }
}

/// Left child of `i`, or `None` if it cannot be represented.
#[inline]
pub fn left_child(i: usize) -> Option<usize> {
    i.checked_mul(2)?.checked_add(1)
}

/// Right child of `i`, or `None` if it cannot be represented.
#[inline]
pub fn right_child(i: usize) -> Option<usize> {
    left_child(i)?.checked_add(1)
}

// Last node with at least one child in a tree of `n` nodes.
#[inline]
pub fn last_parent(n: usize) -> Option<usize> {
    (n / 2).checked_sub(1)
}
