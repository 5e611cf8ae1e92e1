mod config;

pub use config::{ConfigError, FileConfig};
