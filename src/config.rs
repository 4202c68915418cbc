//! Configuration for StaffDB
//!
//! File locations are always passed in explicitly; nothing reads them from
//! process-wide state.

use std::path::{Path, PathBuf};

/// Main configuration for a StaffDB instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Binary record file (header + records + trailing next_id)
    pub data_file: PathBuf,

    /// Single-credential file guarding the data file
    pub auth_file: PathBuf,

    /// Default CSV export destination
    pub csv_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DATA_FILENAME),
            auth_file: PathBuf::from(Self::AUTH_FILENAME),
            csv_file: PathBuf::from(Self::CSV_FILENAME),
        }
    }
}

impl Config {
    const DATA_FILENAME: &'static str = "employees.db";
    const AUTH_FILENAME: &'static str = "admin.auth";
    const CSV_FILENAME: &'static str = "employees.csv";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default file names, placed under `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data_file: dir.join(Self::DATA_FILENAME),
            auth_file: dir.join(Self::AUTH_FILENAME),
            csv_file: dir.join(Self::CSV_FILENAME),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the binary data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the credential file path
    pub fn auth_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.auth_file = path.into();
        self
    }

    /// Set the CSV export path
    pub fn csv_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.csv_file = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
