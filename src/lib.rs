// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # shipzone: delivery fee and shipping zone resolution
//!
//! Turns a free-text destination and a few order facts into a delivery
//! price, a named zone and an estimated delivery window.
//!
//! ## Core Concept
//!
//! A **catalog** is the source of truth: a table of zones, each listing the
//! regions it serves, three weight-tier fees and a delivery window. From the
//! catalog, shipzone can:
//!
//! - **Resolve** a (state, city) pair to a zone, tolerating case, extra words
//!   and unknown places
//! - **Price** a zone for an order by item count, with free delivery above a
//!   subtotal threshold
//! - **Validate** a catalog for overlapping regions and inconsistent fees
//!
//! ## Quick Start
//!
//! ```rust
//! use shipzone::{DeliveryEngine, Destination, OrderStats};
//!
//! let engine = DeliveryEngine::builtin();
//!
//! let quote = engine.quote(
//!     &Destination::new("Oyo").with_locality("Bodija"),
//!     &OrderStats { subtotal: 18_000.0, item_count: 2 },
//! );
//! assert_eq!(quote.fee, 1000.0);
//! assert_eq!(quote.estimated_window, "Same day - 1 day");
//!
//! // Unknown places never block checkout; they are priced as most remote
//! let quote = engine.quote(&Destination::new("Atlantis"), &OrderStats::default());
//! assert!(!quote.matched);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  CATALOG (built-in, YAML or JSON)                           │
//! │       │                                                     │
//! │       ├──► ZoneResolver::resolve(region, city) ──► Resolution│
//! │       │                                                     │
//! │       ├──► FeeCalculator::compute_fee(zone, ..) ──► Quote   │
//! │       │                                                     │
//! │       └──► validate_catalog(catalog) ──► Issues             │
//! │                                                             │
//! │  CHECKOUT                                                   │
//! │       │                                                     │
//! │       ├──► Cart::order_stats() ──► OrderStats               │
//! │       │                                                     │
//! │       └──► CheckoutSummary::new(engine, dest, stats)        │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure: no I/O on the quoting path, no shared mutable
//! state. Engines and catalogs are `Send + Sync` and can be shared freely.

// Core modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod util;

// Operations
pub mod catalog_validate;
pub mod engine;
pub mod fee;
pub mod resolve;

// Checkout helpers
pub mod cart;
pub mod checkout;
pub mod money;

// Re-exports
pub use cart::{Cart, CartLine};
pub use catalog::{FallbackQuote, TierThresholds, WeightTier, Zone, ZoneCatalog};
pub use catalog_validate::{
    validate_catalog, validate_catalog_file, CatalogIssue, CatalogValidationResult, Severity,
};
pub use checkout::{order_reference, CheckoutSummary};
pub use config::{DisplayConfig, ShipzoneConfig, CONFIG_FILE};
pub use engine::{DeliveryEngine, Destination, OrderStats};
pub use error::{Error, Result};
pub use fee::{DeliveryQuote, FeeCalculator};
pub use money::{format_amount, format_fee, format_price};
pub use resolve::{MatchKind, Resolution, ZoneResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
