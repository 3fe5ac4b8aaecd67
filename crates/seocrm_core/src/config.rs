//! Runtime configuration.
//!
//! Paths are fixed; there are no flags or environment overrides. The binary
//! roots them at its working directory.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Locations and levels used by one running instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    /// JSON document holding every project.
    pub data_file: PathBuf,
    /// Directory for rotating log files.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: default_log_level(),
        }
    }
}

impl CrmConfig {
    /// Default configuration with relative paths resolved against `base`.
    pub fn rooted_at(base: &Path) -> Self {
        let defaults = Self::default();
        Self {
            data_file: resolve(base, defaults.data_file),
            log_dir: resolve(base, defaults.log_dir),
            ..defaults
        }
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
