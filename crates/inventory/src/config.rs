//! Store configuration: where the inventory file lives and what counts as low stock.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::store::DEFAULT_LOW_STOCK_THRESHOLD;

/// File used when no path is configured, relative to the working directory.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Optional config file read by the `stockroom` binary from the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "stockroom.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    pub path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Parse a JSON document; omitted fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
