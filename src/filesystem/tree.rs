use std::collections::BTreeMap;
use std::collections::btree_map;

/// A directory and, recursively, all of its subdirectories.
///
/// Children are keyed by name. Keeping them in a sorted map makes every
/// traversal visit siblings in lexicographic order, so anything derived from
/// a walk (e.g. the list of mismatches) is reproducible across runs and
/// platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    children: BTreeMap<String, DirectoryTree>,
}

/// Outcome of looking a child up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a DirectoryTree),
    NotFound,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `child` under `name`, replacing any previous child of that name.
    pub fn insert(&mut self, name: impl Into<String>, child: DirectoryTree) {
        self.children.insert(name.into(), child);
    }

    pub fn get(&self, name: &str) -> Option<&DirectoryTree> {
        self.children.get(name)
    }

    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        match self.children.get(name) {
            Some(child) => Lookup::Found(child),
            None => Lookup::NotFound,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Iterates over the immediate children in lexicographic order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, DirectoryTree> {
        self.children.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Number of immediate children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of directories below this one, at any depth.
    pub fn directory_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.directory_count())
            .sum()
    }
}

impl<S: Into<String>> FromIterator<(S, DirectoryTree)> for DirectoryTree {
    fn from_iter<I: IntoIterator<Item = (S, DirectoryTree)>>(iter: I) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DirectoryTree {
    type Item = (&'a String, &'a DirectoryTree);
    type IntoIter = btree_map::Iter<'a, String, DirectoryTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a [`DirectoryTree`] literal, e.g.
/// `dirtree! { "src" => dirtree! { "core" => dirtree!() } }`.
#[cfg(test)]
macro_rules! dirtree {
    () => {
        $crate::filesystem::DirectoryTree::default()
    };
    ($($name:literal => $child:expr),+ $(,)?) => {
        $crate::filesystem::DirectoryTree::from_iter([$(($name, $child)),+])
    };
}

#[cfg(test)]
pub(crate) use dirtree;
