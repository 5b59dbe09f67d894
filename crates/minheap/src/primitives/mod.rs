//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the index arithmetic and error types used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Parent/child index arithmetic for the implicit binary tree.
pub mod index;

/// Shared error types.
pub mod errors;
