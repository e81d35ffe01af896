//! Error type for the B+ tree index.
//!
//! Mirrors the shape of `common::api::BpmError`: a small, hand-written enum
//! rather than a `thiserror`-derived one, since the two variants here never
//! need the formatting/`From` machinery that macro buys.

use std::fmt;

/// The only two ways an operation on the index can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The key was not present, the cursor was invalidated, or the cursor
    /// has advanced past the end of the tree.
    NotFound,
    /// The node store or the path-array grower could not satisfy an
    /// allocation. Returned only by `insert` and by the cursor
    /// constructors; never leaves any observable state change behind.
    OutOfMemory,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::NotFound => write!(f, "key or cursor record not found"),
            IndexError::OutOfMemory => write!(f, "allocation failed"),
        }
    }
}

impl std::error::Error for IndexError {}
