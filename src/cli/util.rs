//! CLI utility helpers

use clap::ValueEnum;
use shipzone::config::load_or_default;
use shipzone::{DeliveryEngine, DisplayConfig, Error, Result, ZoneCatalog};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialization format for catalog export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Yaml,
    Json,
}

/// Types with a printable JSON schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaName {
    Catalog,
    Config,
    Quote,
    Summary,
}

/// Everything a command needs: the engine plus display settings
pub struct Context {
    pub engine: DeliveryEngine,
    pub display: DisplayConfig,
    pub json: bool,
}

impl Context {
    /// Load config from the working directory; `--catalog` wins over the config file
    pub fn load(catalog_override: Option<&Path>, json: bool) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let config = load_or_default(&cwd)?;

        let catalog = match catalog_override {
            Some(path) => ZoneCatalog::load(path)?,
            None => config.load_catalog(&cwd)?,
        };
        log::debug!("using catalog {}", catalog.hash());

        Ok(Self {
            engine: DeliveryEngine::new(catalog),
            display: config.display,
            json,
        })
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        self.engine.catalog()
    }

    pub fn money(&self, amount: f64) -> String {
        shipzone::format_amount(amount, &self.display.currency_symbol)
    }

    pub fn fee(&self, fee: f64) -> String {
        shipzone::format_fee(fee, &self.display.currency_symbol)
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
