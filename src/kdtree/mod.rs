//! An implementation of a dynamic, unbalanced K-D Tree.

#![warn(missing_docs)]

pub mod distance;
mod index;
mod r#trait;
mod traversal;

pub use index::{Entry, KDTree};
pub use r#trait::KDTreeIndex;
pub use traversal::Node;
