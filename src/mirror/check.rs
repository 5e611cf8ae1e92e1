use std::path::Path;

use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;
use crate::filesystem::{DirectoryLister, ListingError, OsDirectoryLister, TreeBuilder};
use crate::mirror::{AffixRule, ExclusionSet, Mismatch, MirrorComparator, NameMapping};

/// Checks whether a test directory mirrors a source directory on disk.
#[derive(Debug, Clone)]
pub struct MirrorCheck<R = AffixRule, L = OsDirectoryLister> {
    rule: R,
    exclusions: ExclusionSet,
    builder: TreeBuilder<L>,
}

impl<R: NameMapping> MirrorCheck<R, OsDirectoryLister> {
    pub fn new(rule: R, exclusions: ExclusionSet) -> Self {
        Self::with_builder(rule, exclusions, TreeBuilder::new())
    }
}

impl<R: NameMapping, L: DirectoryLister> MirrorCheck<R, L> {
    pub fn with_builder(rule: R, exclusions: ExclusionSet, builder: TreeBuilder<L>) -> Self {
        Self {
            rule,
            exclusions,
            builder,
        }
    }

    /// Snapshots both directories and returns the source directories that
    /// have no counterpart in the test directory.
    ///
    /// Nothing is compared unless both trees could be built.
    pub fn determine(
        &self,
        source_path: &Path,
        test_path: &Path,
    ) -> Result<Vec<Mismatch>, DetermineError> {
        let source_tree = self.builder.build(source_path).context(SourceTreeSnafu)?;
        let test_tree = self.builder.build(test_path).context(TestTreeSnafu)?;
        debug!(
            "Comparing {} source directories against {} test directories",
            source_tree.directory_count(),
            test_tree.directory_count()
        );

        let mismatches =
            MirrorComparator::new(&self.rule, &self.exclusions).compare(&source_tree, &test_tree);

        info!(
            "Found {} mismatches between {} and {}",
            mismatches.len(),
            source_path.best_effort_path_display(),
            test_path.best_effort_path_display()
        );
        Ok(mismatches)
    }
}

#[derive(Debug, Snafu)]
pub enum DetermineError {
    #[snafu(display("Failed to read the source directory tree"))]
    SourceTreeError { source: ListingError },
    #[snafu(display("Failed to read the test directory tree"))]
    TestTreeError { source: ListingError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir_all};
    use tempfile::TempDir;

    fn layout(root: &Path, directories: &[&str]) {
        for directory in directories {
            create_dir_all(root.join(directory)).expect("Failed to create directories");
        }
    }

    #[test]
    fn test_test_directory_with_counterpart_for_every_source_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let src = temp_dir.path().join("src");
        let test = temp_dir.path().join("test");
        layout(&src, &["core/parser", "cli", "__pycache__"]);
        layout(&test, &["test_core/test_parser", "test_cli", "fixtures"]);
        File::create(src.join("core/parser/lexer.py")).expect("Failed to create file");

        let check = MirrorCheck::new(
            AffixRule::with_prefix("test_"),
            "__pycache__".parse().expect("Parsing never fails"),
        );
        let mismatches = check.determine(&src, &test).expect("Check should succeed");

        assert!(mismatches.is_empty(), "Unexpected mismatches: {mismatches:?}");
    }

    #[test]
    fn test_reports_each_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let src = temp_dir.path().join("src");
        let test = temp_dir.path().join("test");
        layout(&src, &["core/parser", "core/codegen", "cli/commands"]);
        layout(&test, &["core/parser"]);

        let check = MirrorCheck::new(AffixRule::identity(), ExclusionSet::new());
        let mismatches = check.determine(&src, &test).expect("Check should succeed");

        let rendered: Vec<String> = mismatches.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["cli", "core/codegen"]);
    }

    #[test]
    fn test_missing_source_directory_is_a_source_tree_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        layout(temp_dir.path(), &["test"]);

        let check = MirrorCheck::new(AffixRule::identity(), ExclusionSet::new());
        let result = check.determine(&temp_dir.path().join("src"), &temp_dir.path().join("test"));

        assert!(matches!(
            result,
            Err(DetermineError::SourceTreeError {
                source: ListingError::PathNotFoundError { .. }
            })
        ));
    }

    #[test]
    fn test_missing_test_directory_is_a_test_tree_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        layout(temp_dir.path(), &["src/module"]);

        let check = MirrorCheck::new(AffixRule::identity(), ExclusionSet::new());
        let result = check.determine(&temp_dir.path().join("src"), &temp_dir.path().join("test"));

        assert!(matches!(
            result,
            Err(DetermineError::TestTreeError {
                source: ListingError::PathNotFoundError { .. }
            })
        ));
    }

    #[test]
    fn test_error_display() {
        let error = DetermineError::TestTreeError {
            source: ListingError::PathNotFoundError {
                path: "/no/such/tests".into(),
            },
        };

        assert_eq!(format!("{error}"), "Failed to read the test directory tree");
    }
}
