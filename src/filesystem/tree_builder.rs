use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ext::BestEffortPathExt;
use crate::filesystem::{DirectoryLister, DirectoryTree, ListingError, OsDirectoryLister};

/// Recursively snapshots the directory hierarchy below a root path.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder<L = OsDirectoryLister> {
    lister: L,
}

impl TreeBuilder<OsDirectoryLister> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: DirectoryLister> TreeBuilder<L> {
    pub fn with_lister(lister: L) -> Self {
        Self { lister }
    }

    /// Builds the tree of every directory below `root`.
    ///
    /// Any listing failure, at the root or deeper down, aborts the whole
    /// build. A directory that leads back to one of its own ancestors
    /// (through a symlink) is left out of the tree.
    pub fn build(&self, root: &Path) -> Result<DirectoryTree, ListingError> {
        debug!("Building directory tree of {}", root.best_effort_path_display());

        let identity = self.lister.resolve(root)?;
        let tree = self.build_node(root, identity, &mut Vec::new())?;

        debug!(
            "Found {} directories below {}",
            tree.directory_count(),
            root.best_effort_path_display()
        );
        Ok(tree)
    }

    fn build_node(
        &self,
        path: &Path,
        identity: PathBuf,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<DirectoryTree, ListingError> {
        let names = self.lister.list_child_directories(path)?;
        ancestors.push(identity);

        let mut tree = DirectoryTree::new();
        for raw_name in names {
            let child_path = path.join(&raw_name);
            let name = tree_key(&raw_name, &child_path);
            if tree.contains(&name) {
                warn!(
                    "Skipping {}, another directory is already compared as '{}'",
                    child_path.best_effort_path_display(),
                    name
                );
                continue;
            }

            let child_identity = self.lister.resolve(&child_path)?;
            if ancestors.contains(&child_identity) {
                warn!(
                    "Skipping {}, it loops back to {}",
                    child_path.best_effort_path_display(),
                    child_identity.best_effort_path_display()
                );
                continue;
            }

            let child = self.build_node(&child_path, child_identity, ancestors)?;
            tree.insert(name, child);
        }

        ancestors.pop();
        Ok(tree)
    }
}

/// Names are compared as UTF-8. A name that is not valid UTF-8 is compared
/// by its lossy rendering, while `child_path` keeps addressing the real
/// directory.
fn tree_key(raw_name: &OsStr, child_path: &Path) -> String {
    match raw_name.to_str() {
        Some(name) => name.to_string(),
        None => {
            let lossy = raw_name.to_string_lossy().into_owned();
            warn!(
                "Name of {} is not valid UTF-8, comparing it as '{}'",
                child_path.best_effort_path_display(),
                lossy
            );
            lossy
        }
    }
}
