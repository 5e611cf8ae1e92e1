use std::path::PathBuf;

use crate::{
    cli::Cli,
    config::FileConfig,
    mirror::{AffixRule, ExclusionSet},
};

/// Settings of a single run, after merging the command line with the config
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub source_directory: PathBuf,
    pub test_directory: PathBuf,
    pub rule: AffixRule,
    pub exclusions: ExclusionSet,
}

impl RuntimeConfig {
    /// Command line prefix and appendix take precedence over the file.
    /// Exclusions from both sources are combined.
    pub fn merge(cli: Cli, file_config: FileConfig) -> Self {
        let prefix = cli.prefix.or(file_config.prefix).unwrap_or_default();
        let appendix = cli.appendix.or(file_config.appendix).unwrap_or_default();

        let mut exclusions = file_config.exclude;
        for list in cli.exclude {
            exclusions.merge(list);
        }

        Self {
            source_directory: cli.source_directory,
            test_directory: cli.test_directory,
            rule: AffixRule::new(prefix, appendix),
            exclusions,
        }
    }
}
