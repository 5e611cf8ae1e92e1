//! Detection of asymmetries between a source tree and a test tree.
//!
//! Every directory of the source tree is expected to have a counterpart in
//! the test tree, at the same position, named according to a
//! [`NameMapping`]. The comparison only runs from source to test: test
//! directories without a source counterpart are never reported.

mod check;
mod comparator;
mod exclusions;
mod mismatch;
mod name_mapping;

pub use check::{DetermineError, MirrorCheck};
pub use comparator::MirrorComparator;
pub use exclusions::ExclusionSet;
pub use mismatch::Mismatch;
pub use name_mapping::{AffixRule, NameMapping};
