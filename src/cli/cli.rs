use std::path::PathBuf;

use clap::Parser;

use crate::{application::data::LogLevel, mirror::ExclusionSet};

/// Ensure that a test directory mirrors the directory structure of a source
/// directory.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Path to the source directory
    pub source_directory: PathBuf,

    /// Path to the test directory
    pub test_directory: PathBuf,

    /// Prefix of the directory names in the test directory
    #[clap(long, short)]
    pub prefix: Option<String>,

    /// Suffix of the directory names in the test directory
    #[clap(long, short)]
    pub appendix: Option<String>,

    /// Comma delimited list of excluded directory names. May be repeated
    #[clap(long, short = 'x', value_name = "LIST")]
    pub exclude: Vec<ExclusionSet>,

    /// Config file to read. Defaults to .dirror.yaml in the working
    /// directory, if there is one
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_directories_with_defaults() {
        let cli = Cli::try_parse_from(["dirror", "src", "tests"]).expect("Arguments should parse");

        assert_eq!(cli.source_directory, PathBuf::from("src"));
        assert_eq!(cli.test_directory, PathBuf::from("tests"));
        assert_eq!(cli.prefix, None);
        assert_eq!(cli.appendix, None);
        assert!(cli.exclude.is_empty());
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_parses_all_options() {
        let cli = Cli::try_parse_from([
            "dirror",
            "lib",
            "spec",
            "--prefix",
            "test_",
            "-a",
            "_spec",
            "--exclude",
            "__pycache__,build",
            "-x",
            "dist",
            "--config",
            "mirror.yaml",
            "-l",
            "debug",
        ])
        .expect("Arguments should parse");

        assert_eq!(cli.prefix.as_deref(), Some("test_"));
        assert_eq!(cli.appendix.as_deref(), Some("_spec"));
        assert_eq!(
            cli.exclude,
            vec![
                ["__pycache__", "build"].into_iter().collect::<ExclusionSet>(),
                ["dist"].into_iter().collect::<ExclusionSet>(),
            ]
        );
        assert_eq!(cli.config, Some(PathBuf::from("mirror.yaml")));
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_requires_both_directories() {
        assert!(Cli::try_parse_from(["dirror", "src"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["dirror", "src", "tests", "-l", "loud"]).is_err());
    }
}
