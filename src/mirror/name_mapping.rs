use derive_more::Display;

/// Maps a source directory name to the name its test counterpart must have.
pub trait NameMapping {
    fn map_name(&self, source_name: &str) -> String;
}

impl<F> NameMapping for F
where
    F: Fn(&str) -> String,
{
    fn map_name(&self, source_name: &str) -> String {
        self(source_name)
    }
}

/// Prepends `prefix` and appends `appendix` to the source name. The default
/// rule is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display("{prefix}<name>{appendix}")]
pub struct AffixRule {
    prefix: String,
    appendix: String,
}

impl AffixRule {
    pub fn new(prefix: impl Into<String>, appendix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            appendix: appendix.into(),
        }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(prefix, "")
    }

    pub fn with_appendix(appendix: impl Into<String>) -> Self {
        Self::new("", appendix)
    }

    pub fn is_identity(&self) -> bool {
        self.prefix.is_empty() && self.appendix.is_empty()
    }
}

impl NameMapping for AffixRule {
    fn map_name(&self, source_name: &str) -> String {
        let mut mapped =
            String::with_capacity(self.prefix.len() + source_name.len() + self.appendix.len());
        mapped.push_str(&self.prefix);
        mapped.push_str(source_name);
        mapped.push_str(&self.appendix);
        mapped
    }
}
