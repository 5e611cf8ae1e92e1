use tracing::trace;

use crate::filesystem::{DirectoryTree, Lookup};
use crate::mirror::{ExclusionSet, Mismatch, NameMapping};

/// Walks a source tree and a test tree in lockstep.
pub struct MirrorComparator<'a, R: ?Sized> {
    rule: &'a R,
    exclusions: &'a ExclusionSet,
}

impl<'a, R: NameMapping + ?Sized> MirrorComparator<'a, R> {
    pub fn new(rule: &'a R, exclusions: &'a ExclusionSet) -> Self {
        Self { rule, exclusions }
    }

    /// Returns every source directory whose mapped name is missing from the
    /// matching position of `test`, in depth-first, lexicographic order.
    ///
    /// A missing directory is reported once and its descendants are not
    /// visited. Excluded names are skipped at every depth.
    pub fn compare(&self, source: &DirectoryTree, test: &DirectoryTree) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();
        self.compare_level(source, test, &mut Vec::new(), &mut mismatches);
        mismatches
    }

    fn compare_level(
        &self,
        source: &DirectoryTree,
        test: &DirectoryTree,
        trail: &mut Vec<String>,
        mismatches: &mut Vec<Mismatch>,
    ) {
        for (name, source_child) in source {
            if self.exclusions.contains(name) {
                trace!("Skipping excluded directory '{}'", name);
                continue;
            }

            let expected = self.rule.map_name(name);
            match test.lookup(&expected) {
                Lookup::Found(test_child) => {
                    trail.push(name.clone());
                    self.compare_level(source_child, test_child, trail, mismatches);
                    trail.pop();
                }
                Lookup::NotFound => {
                    trace!("No '{}' counterpart for '{}'", expected, name);
                    mismatches.push(Mismatch::new(trail, name));
                }
            }
        }
    }
}
