use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// Source of directory listings for a [`TreeBuilder`](super::TreeBuilder).
pub trait DirectoryLister {
    /// Returns the raw names of the immediate subdirectories of `path`,
    /// sorted. `path.join(name)` addresses each of them.
    ///
    /// Entries that are not directories, including entries whose metadata
    /// cannot be read, are left out rather than reported.
    fn list_child_directories(&self, path: &Path) -> Result<Vec<OsString>, ListingError>;

    /// Returns an identity for the directory at `path`. Two paths with the
    /// same identity refer to the same directory.
    fn resolve(&self, path: &Path) -> Result<PathBuf, ListingError> {
        Ok(path.to_path_buf())
    }
}

/// Lists directories on the real filesystem. Symlinks to directories are
/// treated as directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectoryLister;

impl DirectoryLister for OsDirectoryLister {
    fn list_child_directories(&self, path: &Path) -> Result<Vec<OsString>, ListingError> {
        let metadata = fs::metadata(path).map_err(|source| classify(path, source))?;
        ensure!(
            metadata.is_dir(),
            PathNotADirectorySnafu {
                path: path.to_path_buf()
            }
        );

        let entries = fs::read_dir(path).context(UnreadableSnafu {
            path: path.to_path_buf(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.context(UnreadableSnafu {
                path: path.to_path_buf(),
            })?;
            let entry_path = entry.path();
            match fs::metadata(&entry_path) {
                Ok(metadata) if metadata.is_dir() => names.push(entry.file_name()),
                Ok(_) => {}
                Err(e) => debug!(
                    "Omitting {}, its metadata is unavailable: {}",
                    entry_path.best_effort_path_display(),
                    e
                ),
            }
        }

        names.sort_unstable();
        Ok(names)
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, ListingError> {
        fs::canonicalize(path).map_err(|source| classify(path, source))
    }
}

fn classify(path: &Path, source: io::Error) -> ListingError {
    let path = path.to_path_buf();
    match source.kind() {
        io::ErrorKind::NotFound => ListingError::PathNotFoundError { path },
        io::ErrorKind::NotADirectory => ListingError::PathNotADirectoryError { path },
        _ => ListingError::UnreadableError { path, source },
    }
}

#[derive(Debug, Snafu)]
pub enum ListingError {
    #[snafu(display("Path {} does not exist", path.best_effort_path_display()))]
    PathNotFoundError { path: PathBuf },
    #[snafu(display("Path {} is not a directory", path.best_effort_path_display()))]
    PathNotADirectoryError { path: PathBuf },
    #[snafu(display("Failed to list directory {}", path.best_effort_path_display()))]
    UnreadableError { path: PathBuf, source: io::Error },
}

impl ListingError {
    /// The path the failing listing was asked for.
    pub fn path(&self) -> &Path {
        match self {
            ListingError::PathNotFoundError { path }
            | ListingError::PathNotADirectoryError { path }
            | ListingError::UnreadableError { path, .. } => path,
        }
    }
}
