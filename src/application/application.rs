use colored::Colorize;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, error, info};

use crate::application::RuntimeConfig;
use crate::cli::Cli;
use crate::config::{ConfigError, FileConfig};
use crate::ext::BestEffortPathExt;
use crate::mirror::{DetermineError, Mismatch, MirrorCheck};

pub struct Application;

impl Application {
    /// Runs one mirror check. A broken mirror is reported as
    /// [`ApplicationError::MirrorBrokenError`] after every mismatch has been
    /// logged.
    pub async fn run(cli_args: Cli) -> Result<(), ApplicationError> {
        let file_config = FileConfig::read(cli_args.config.as_deref())
            .await
            .context(ConfigurationSnafu)?;
        debug!("Loaded config: {:?}", file_config);

        let RuntimeConfig {
            source_directory,
            test_directory,
            rule,
            exclusions,
        } = RuntimeConfig::merge(cli_args, file_config);
        info!(
            "Checking {} against {}, expecting test directories named {}",
            source_directory.best_effort_path_display(),
            test_directory.best_effort_path_display(),
            rule
        );
        debug!("Excluded directory names: {:?}", exclusions);

        let mismatches = MirrorCheck::new(rule, exclusions)
            .determine(&source_directory, &test_directory)
            .context(MirrorCheckSnafu)?;

        report_mismatches(&mismatches);
        ensure!(
            mismatches.is_empty(),
            MirrorBrokenSnafu {
                count: mismatches.len()
            }
        );

        info!(
            "{} mirrors {}",
            test_directory.best_effort_path_display(),
            source_directory.best_effort_path_display()
        );
        Ok(())
    }
}

fn report_mismatches(mismatches: &[Mismatch]) {
    for mismatch in mismatches {
        error!("{} broke the mirror", mismatch.to_string().bold());
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the configuration"))]
    ConfigurationError { source: ConfigError },
    #[snafu(display("Critical failure encountered while checking the mirror"))]
    MirrorCheckError { source: DetermineError },
    #[snafu(display(
        "{} source {} without a counterpart in the test directory",
        count,
        if *count == 1 { "directory" } else { "directories" }
    ))]
    MirrorBrokenError { count: usize },
}
