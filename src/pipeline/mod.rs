//! Raw-tree traversal and bundle output.

pub mod bundle;
pub mod classifier;
pub mod context;
pub mod traversal;
