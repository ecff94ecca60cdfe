//! shipzone project configuration
//!
//! Handles loading `.shipzone.yaml`, which can point the tools at a catalog
//! file instead of the compiled-in table and adjust how amounts are shown.
//!
//! ```yaml
//! version: 1
//! catalog: pricing/catalog.yaml
//! display:
//!   currency_symbol: "₦"
//! ```

use crate::catalog::ZoneCatalog;
use crate::error::{Error, Result};
use crate::money::NAIRA;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project config file
pub const CONFIG_FILE: &str = ".shipzone.yaml";

/// Project configuration (`.shipzone.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShipzoneConfig {
    /// Schema version for migrations
    pub version: u32,

    /// Catalog file, relative to the config file's directory.
    /// The compiled-in catalog is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How amounts are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    NAIRA.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for ShipzoneConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog: None,
            display: DisplayConfig::default(),
        }
    }
}

impl ShipzoneConfig {
    /// Parse and version-check config YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ShipzoneConfig = serde_norway::from_str(yaml)
            .map_err(|e| Error::ConfigParse(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        if config.version != 1 {
            return Err(Error::ConfigParse(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Load `.shipzone.yaml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_file).map_err(Error::Io)?;
        Self::from_yaml(&content).map(Some)
    }

    /// Catalog path resolved against `dir`
    pub fn catalog_path(&self, dir: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                dir.join(p)
            }
        })
    }

    /// The configured catalog, or the compiled-in one
    pub fn load_catalog(&self, dir: &Path) -> Result<ZoneCatalog> {
        match self.catalog_path(dir) {
            Some(path) => {
                log::info!("loading catalog from {}", path.display());
                ZoneCatalog::load(&path)
            }
            None => Ok(ZoneCatalog::builtin()),
        }
    }
}

/// Config from `dir` if present, defaults otherwise
pub fn load_or_default(dir: &Path) -> Result<ShipzoneConfig> {
    Ok(ShipzoneConfig::load_from_dir(dir)?.unwrap_or_default())
}
