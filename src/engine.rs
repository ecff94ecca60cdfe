//! The quoting pipeline: destination text + order stats → [`DeliveryQuote`]
//!
//! ```rust
//! use shipzone::{DeliveryEngine, Destination, OrderStats};
//!
//! let engine = DeliveryEngine::builtin();
//! let quote = engine.quote(
//!     &Destination::new("Lagos"),
//!     &OrderStats { subtotal: 25_000.0, item_count: 4 },
//! );
//! assert_eq!(quote.fee, 4000.0);
//! assert!(quote.matched);
//! ```

use crate::catalog::ZoneCatalog;
use crate::fee::{DeliveryQuote, FeeCalculator};
use crate::resolve::{Resolution, ZoneResolver};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where an order is going, as typed by the customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Destination {
    /// Top-level region, e.g. a state name
    pub region: String,

    /// City, town or neighbourhood inside the region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
}

impl Destination {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            locality: None,
        }
    }

    pub fn with_locality(mut self, locality: &str) -> Self {
        self.locality = Some(locality.to_string());
        self
    }
}

/// The parts of an order that affect delivery pricing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrderStats {
    /// Order subtotal before delivery
    pub subtotal: f64,

    /// Total quantity across all cart lines
    pub item_count: u32,
}

/// Owns a catalog and answers every delivery question against it.
///
/// Swapping pricing means building a new engine; an engine never changes.
#[derive(Debug, Clone, Default)]
pub struct DeliveryEngine {
    catalog: ZoneCatalog,
}

impl DeliveryEngine {
    pub fn new(catalog: ZoneCatalog) -> Self {
        Self { catalog }
    }

    /// Engine over the compiled-in catalog
    pub fn builtin() -> Self {
        Self::new(ZoneCatalog::builtin())
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    pub fn resolver(&self) -> ZoneResolver<'_> {
        ZoneResolver::new(&self.catalog)
    }

    pub fn calculator(&self) -> FeeCalculator<'_> {
        FeeCalculator::new(&self.catalog)
    }

    pub fn resolve(&self, destination: &Destination) -> Resolution<'_> {
        self.resolver()
            .resolve(&destination.region, destination.locality.as_deref())
    }

    /// Resolve and price in one step
    pub fn quote(&self, destination: &Destination, order: &OrderStats) -> DeliveryQuote {
        let resolution = self.resolve(destination);
        let quote = self
            .calculator()
            .compute_for(&resolution, order.subtotal, Some(order.item_count));

        log::debug!(
            "quote {}/{}: fee={} zone={:?} matched={}",
            destination.region,
            destination.locality.as_deref().unwrap_or(""),
            quote.fee,
            quote.zone.as_ref().map(|z| z.ordinal),
            quote.matched
        );

        quote
    }

    pub fn all_regions(&self) -> &[String] {
        &self.catalog.regions
    }

    pub fn is_inside_home_city(&self, locality: &str) -> bool {
        self.resolver().is_inside_home_city(locality)
    }
}
