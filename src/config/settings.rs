//! User settings
//!
//! A small JSON file next to the data directory. Currently only the currency
//! symbol used for display; amounts are stored symbol-free.

use serde::{Deserialize, Serialize};

use super::paths::DataPaths;
use crate::error::SpendlogResult;

/// User settings for spendlog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't
    /// exist yet. Defaults are not persisted until `save` is called.
    pub fn load_or_create(paths: &DataPaths) -> SpendlogResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DataPaths) -> SpendlogResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;
        Ok(())
    }
}
