//! An in-memory B+ tree index mapping `u64` keys to `u64` values.
//!
//! Supports point lookup, insert/update, delete, full ascending
//! enumeration, and cursors that stay pinned to their record through
//! concurrent structural mutation (splits, merges, rotations) driven by a
//! single logical actor — this crate does not itself provide thread
//! safety, matching the single-actor model it implements.
//!
//! ```
//! use bplus_tree::Tree;
//!
//! let tree = Tree::new();
//! tree.insert(1, 100).unwrap();
//! tree.insert(2, 200).unwrap();
//! assert_eq!(tree.find(1), Ok(100));
//!
//! let cursor = tree.first_record().unwrap();
//! assert_eq!(cursor.get(), Ok((1, 100)));
//! ```

mod cursor;
mod error;
mod node;
mod search;
mod tree;

pub use cursor::Cursor;
pub use error::IndexError;
pub use tree::{Tree, TreeStats};

/// Key type stored by the index.
pub type Key = u64;
/// Value type stored by the index.
pub type Value = u64;
