use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    io,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};
use tracing::{debug, warn};

use crate::{ext::BestEffortPathExt, mirror::ExclusionSet};

const DEFAULT_CONFIG_FILE_NAME: &str = ".dirror.yaml";

const PREFIX_KEY: &str = "prefix";
const APPENDIX_KEY: &str = "appendix";
const EXCLUDE_KEY: &str = "exclude";

fn get_default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
}

/// Settings read from a YAML configuration file. Every setting is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub prefix: Option<String>,
    pub appendix: Option<String>,
    pub exclude: ExclusionSet,
}

impl FileConfig {
    /// Reads `explicit_path` if given. Otherwise reads the default file from
    /// the working directory, falling back to an empty configuration when
    /// that file does not exist.
    pub async fn read(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::from_path(path).await,
            None => Self::read_default().await,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        Self::from_bytes(path, bytes)
    }

    async fn read_default() -> Result<Self, ConfigError> {
        let path = get_default_config_path();
        match fs::read(&path).await {
            Ok(bytes) => {
                debug!("Using config file: {}", path.best_effort_path_display());
                Self::from_bytes(&path, bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE_NAME);
                Ok(Self::default())
            }
            Err(e) => Err(e).context(ReadSnafu {
                file_path: path.best_effort_path_display(),
            }),
        }
    }

    fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, ConfigError> {
        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        contents.as_str().try_into()
    }

    fn from_mapping(mapping: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in mapping {
            let Some(key_name) = key.as_str() else {
                warn!("Ignoring non-string config key: {:?}", key);
                continue;
            };
            match key_name {
                PREFIX_KEY => config.prefix = string_value(PREFIX_KEY, value)?,
                APPENDIX_KEY => config.appendix = string_value(APPENDIX_KEY, value)?,
                EXCLUDE_KEY => config.exclude = exclusions_value(value)?,
                unknown => warn!("Ignoring unknown config key '{}'", unknown),
            }
        }

        Ok(config)
    }
}

impl TryFrom<&str> for FileConfig {
    type Error = ConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };
        if is_null(document) {
            return Ok(Self::default());
        }

        let top_level = document
            .as_mapping()
            .ok_or(ConfigError::TopLevelNotMap)?;
        Self::from_mapping(top_level)
    }
}

fn is_null(value: &Yaml) -> bool {
    matches!(value, Yaml::Value(Scalar::Null))
}

fn string_value(key: &str, value: &Yaml) -> Result<Option<String>, ConfigError> {
    if is_null(value) {
        return Ok(None);
    }
    match value.as_str() {
        Some(s) => Ok(Some(s.to_string())),
        None => InvalidValueSnafu {
            key,
            expected: "a string",
        }
        .fail(),
    }
}

/// Accepts a sequence of names or a comma-delimited string.
fn exclusions_value(value: &Yaml) -> Result<ExclusionSet, ConfigError> {
    if is_null(value) {
        return Ok(ExclusionSet::new());
    }
    if let Some(list) = value.as_str() {
        return Ok(ExclusionSet::from_list(list));
    }

    let invalid = || ConfigError::InvalidValue {
        key: EXCLUDE_KEY.to_string(),
        expected: "a list of directory names",
    };
    value
        .as_sequence()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_str().ok_or_else(invalid))
        .collect()
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: io::Error,
    },
    #[snafu(display("The config file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Config key '{}' should be {}", key, expected))]
    InvalidValue { key: String, expected: &'static str },
}
