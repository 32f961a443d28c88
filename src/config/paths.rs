//! Path management
//!
//! Account files live in `data/` under the base directory; the settings file
//! and generated reports sit next to it. The base directory defaults to the
//! current directory and can be overridden with `SPENDLOG_DATA_DIR`, which is
//! what the integration tests use.

use std::path::{Path, PathBuf};

use crate::error::{SpendlogError, SpendlogResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPENDLOG_DATA_DIR";

/// Manages all paths used by spendlog
#[derive(Debug, Clone)]
pub struct DataPaths {
    base_dir: PathBuf,
}

impl DataPaths {
    /// Resolve the base directory: `SPENDLOG_DATA_DIR` if set, otherwise the
    /// current directory.
    pub fn new() -> Self {
        let base_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self { base_dir }
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Where account files live (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Where generated reports are written (the base directory itself)
    pub fn report_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// The settings file (`<base>/config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the data directory if it is missing
    pub fn ensure_directories(&self) -> SpendlogResult<()> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendlogError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new()
    }
}
