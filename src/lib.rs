//! Checks that the directory structure of a test tree mirrors the directory
//! structure of a source tree.
//!
//! The core is split in two steps: a [`filesystem::TreeBuilder`] snapshots
//! each hierarchy into a [`filesystem::DirectoryTree`], then a
//! [`mirror::MirrorComparator`] looks up every source directory in the test
//! tree under a [`mirror::NameMapping`] and collects the ones that are
//! missing. [`mirror::MirrorCheck`] runs both steps for two paths.
#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod config;
pub(crate) mod ext;
pub mod filesystem;
pub mod mirror;
