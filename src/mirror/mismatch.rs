use derive_more::Display;

/// A source directory without a counterpart in the test tree.
///
/// `trail` holds the names leading from the source root down to the
/// offending directory, the last of which is the directory itself.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", trail.join("/"))]
pub struct Mismatch {
    trail: Vec<String>,
}

impl Mismatch {
    /// Creates a mismatch for `name`, found below the directories in
    /// `parents`.
    pub fn new(parents: &[String], name: &str) -> Self {
        let mut trail = Vec::with_capacity(parents.len() + 1);
        trail.extend_from_slice(parents);
        trail.push(name.to_string());
        Self { trail }
    }

    /// Name of the source directory that broke the mirror.
    pub fn name(&self) -> &str {
        self.trail.last().map(String::as_str).unwrap_or_default()
    }
}
