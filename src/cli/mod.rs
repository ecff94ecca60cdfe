//! CLI command implementations
//!
//! This module contains all CLI command handlers, organized by category:
//! - `simple`: Quoting and lookup commands (quote, resolve, regions, zones)
//! - `validate`: Catalog validation
//! - `config`: Catalog export, schemas and project init
//! - `util`: Shared loading and output helpers

pub mod config;
pub mod simple;
pub mod util;
pub mod validate;

// Re-export all command functions for convenient access
pub use config::{cmd_export, cmd_init, cmd_schema};
pub use simple::{cmd_quote, cmd_regions, cmd_resolve, cmd_zones};
pub use validate::cmd_validate;
