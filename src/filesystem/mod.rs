//! In-memory snapshots of directory hierarchies.
//!
//! A [`DirectoryTree`] only records directories: files never show up in it.
//! Trees are produced by a [`TreeBuilder`], which asks a [`DirectoryLister`]
//! for the child directories of every node.

mod listing;
mod tree;
mod tree_builder;

pub use listing::{DirectoryLister, ListingError, OsDirectoryLister};
#[cfg(test)]
pub(crate) use tree::dirtree;
pub use tree::{DirectoryTree, Lookup};
pub use tree_builder::TreeBuilder;
