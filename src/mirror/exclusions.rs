use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use derive_more::{From, IntoIterator};

/// Directory names ignored at every depth of a comparison, along with
/// everything below them.
#[derive(Debug, Clone, Default, PartialEq, Eq, From, IntoIterator)]
pub struct ExclusionSet(#[into_iterator(owned, ref)] BTreeSet<String>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-delimited list of names. Whitespace around names and
    /// empty entries are dropped.
    pub fn from_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Adds every name of `other` to this set.
    pub fn merge(&mut self, other: ExclusionSet) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl FromStr for ExclusionSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_list(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("__pycache__", &["__pycache__"])]
    #[case("__pycache__,.mypy_cache", &[".mypy_cache", "__pycache__"])]
    #[case(" build , dist ", &["build", "dist"])]
    #[case("a,,b,", &["a", "b"])]
    #[case("", &[])]
    #[case("dup,dup", &["dup"])]
    fn test_parses_comma_delimited_list(#[case] input: &str, #[case] expected: &[&str]) {
        let exclusions: ExclusionSet = input.parse().expect("Parsing never fails");

        let names: Vec<&str> = (&exclusions).into_iter().map(String::as_str).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_merge_unites_sets() {
        let mut exclusions: ExclusionSet = ["__pycache__"].into_iter().collect();
        exclusions.merge(["build", "__pycache__"].into_iter().collect());

        assert_eq!(exclusions.len(), 2);
        assert!(exclusions.contains("build"));
        assert!(exclusions.contains("__pycache__"));
        assert!(!exclusions.contains("dist"));
    }

    #[test]
    fn test_names_match_exactly() {
        let mut exclusions = ExclusionSet::new();
        assert!(exclusions.insert("cache"));
        assert!(!exclusions.insert("cache"));

        assert!(exclusions.contains("cache"));
        assert!(!exclusions.contains("Cache"));
        assert!(!exclusions.contains("cache2"));
    }
}
