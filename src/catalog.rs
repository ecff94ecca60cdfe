//! Zone catalog: the pricing table every quote is computed from
//!
//! A `ZoneCatalog` bundles the shipping zones together with the rest of the
//! business constants the engine needs: the seller's home region and city,
//! the locality fragments that mean "inside the home city", the weight-tier
//! thresholds and the free-shipping threshold.
//!
//! The catalog is built once (the compiled-in table, or a YAML/JSON file) and
//! then only read. Resolver and calculator borrow it.
//!
//! ## Example Catalog
//!
//! ```yaml
//! home_region: Oyo
//! home_city: Ibadan
//! home_city_zone: 1
//! home_region_zone: 2
//! home_localities: [Bodija, Mokola]
//! regions: [Lagos, Oyo]
//! zones:
//!   - ordinal: 1
//!     name: Within Ibadan
//!     member_regions: [Oyo - Ibadan]
//!     light_fee: 1000
//!     medium_fee: 1500
//!     heavy_fee: 2500
//!     estimated_window: Same day - 1 day
//!   - ordinal: 2
//!     name: Oyo State (Outside Ibadan)
//!     member_regions: [Oyo]
//!     light_fee: 1400
//!     medium_fee: 2500
//!     heavy_fee: 4000
//!     estimated_window: 1-2 days
//!   - ordinal: 3
//!     name: South-West Extended
//!     member_regions: [Lagos]
//!     light_fee: 1800
//!     medium_fee: 4000
//!     heavy_fee: 8000
//!     estimated_window: 2-3 days
//! ```

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named group of regions sharing one price table and delivery window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Zone {
    /// Iteration order and tie-break; lowest ordinal wins
    pub ordinal: u32,

    /// Human-readable label
    pub name: String,

    /// Region identifiers belonging to this zone.
    /// Either a plain region name or a composite "region - locality" label.
    pub member_regions: Vec<String>,

    /// Fee for light parcels (up to the medium threshold)
    pub light_fee: f64,

    /// Fee for medium parcels
    pub medium_fee: f64,

    /// Fee for heavy parcels
    pub heavy_fee: f64,

    /// Delivery time range, display only
    pub estimated_window: String,
}

impl Zone {
    pub fn new(
        ordinal: u32,
        name: &str,
        member_regions: &[&str],
        fees: [f64; 3],
        estimated_window: &str,
    ) -> Self {
        Self {
            ordinal,
            name: name.to_string(),
            member_regions: member_regions.iter().map(|r| r.to_string()).collect(),
            light_fee: fees[0],
            medium_fee: fees[1],
            heavy_fee: fees[2],
            estimated_window: estimated_window.to_string(),
        }
    }

    /// Fee for the given weight tier
    pub fn fee_for(&self, tier: WeightTier) -> f64 {
        match tier {
            WeightTier::Light => self.light_fee,
            WeightTier::Medium => self.medium_fee,
            WeightTier::Heavy => self.heavy_fee,
        }
    }

    /// `light_fee <= medium_fee <= heavy_fee`
    pub fn fees_are_monotonic(&self) -> bool {
        self.light_fee <= self.medium_fee && self.medium_fee <= self.heavy_fee
    }
}

/// Price band selected from the number of items in an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightTier {
    Light,
    Medium,
    Heavy,
}

impl std::fmt::Display for WeightTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightTier::Light => write!(f, "light"),
            WeightTier::Medium => write!(f, "medium"),
            WeightTier::Heavy => write!(f, "heavy"),
        }
    }
}

/// Item-count thresholds between weight tiers.
///
/// Counts above `medium_above` are medium, counts above `heavy_above` heavy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TierThresholds {
    #[serde(default = "default_medium_above")]
    pub medium_above: u32,

    #[serde(default = "default_heavy_above")]
    pub heavy_above: u32,
}

fn default_medium_above() -> u32 {
    3
}

fn default_heavy_above() -> u32 {
    6
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium_above: default_medium_above(),
            heavy_above: default_heavy_above(),
        }
    }
}

/// Quote returned when the catalog cannot produce a zone at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FallbackQuote {
    #[serde(default = "default_fallback_fee")]
    pub fee: f64,

    #[serde(default = "default_fallback_window")]
    pub estimated_window: String,
}

fn default_fallback_fee() -> f64 {
    5000.0
}

fn default_fallback_window() -> String {
    "3-5 days".to_string()
}

impl Default for FallbackQuote {
    fn default() -> Self {
        Self {
            fee: default_fallback_fee(),
            estimated_window: default_fallback_window(),
        }
    }
}

fn default_free_shipping_threshold() -> f64 {
    100_000.0
}

/// The complete, immutable pricing table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Shipzone Catalog", description = "Delivery zone pricing table")]
pub struct ZoneCatalog {
    /// Seller's home region (e.g. a state name)
    pub home_region: String,

    /// Seller's home city inside the home region
    pub home_city: String,

    /// Ordinal of the zone quoted for destinations inside the home city
    pub home_city_zone: u32,

    /// Ordinal of the zone quoted for the rest of the home region
    pub home_region_zone: u32,

    /// Locality fragments that identify "inside the home city"
    #[serde(default)]
    pub home_localities: Vec<String>,

    /// All valid top-level region names, for destination pickers
    #[serde(default)]
    pub regions: Vec<String>,

    /// Shipping zones
    pub zones: Vec<Zone>,

    /// Item-count thresholds between weight tiers
    #[serde(default)]
    pub tiers: TierThresholds,

    /// Subtotal at or above which delivery is free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    /// Quote used when no zone can be produced
    #[serde(default)]
    pub fallback: FallbackQuote,
}

const NIGERIA_STATES: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT Abuja",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

const IBADAN_LOCALITIES: [&str; 27] = [
    "Ibadan North",
    "Ibadan North-East",
    "Ibadan North-West",
    "Ibadan South-East",
    "Ibadan South-West",
    "Akinyele",
    "Egbeda",
    "Ido",
    "Lagelu",
    "Oluyole",
    "Ona Ara",
    "OKI",
    "Challenge",
    "Ring Road",
    "Mokola",
    "Bodija",
    "UCH",
    "UI",
    "Dugbe",
    "Agodi",
    "Sango",
    "Ojoo",
    "Iwo Road",
    "Moniya",
    "Eleyele",
    "Apata",
    "Akobo",
];

impl ZoneCatalog {
    /// The compiled-in table for the Ibadan dispatch centre
    pub fn builtin() -> Self {
        let zones = vec![
            Zone::new(
                1,
                "Within Ibadan",
                &["Oyo - Ibadan"],
                [1000.0, 1500.0, 2500.0],
                "Same day - 1 day",
            ),
            Zone::new(
                2,
                "Oyo State (Outside Ibadan)",
                &["Oyo"],
                [1400.0, 2500.0, 4000.0],
                "1-2 days",
            ),
            Zone::new(
                3,
                "Neighboring States",
                &["Osun", "Ogun", "Ekiti"],
                [1600.0, 3500.0, 6000.0],
                "1-2 days",
            ),
            Zone::new(
                4,
                "South-West Extended",
                &["Lagos", "Ondo", "Kwara", "Kogi"],
                [1800.0, 4000.0, 8000.0],
                "2-3 days",
            ),
            Zone::new(
                5,
                "South-South",
                &["Edo", "Delta", "Rivers", "Bayelsa"],
                [2000.0, 5500.0, 15000.0],
                "2-4 days",
            ),
            Zone::new(
                6,
                "South-East",
                &["Anambra", "Enugu", "Imo", "Abia", "Ebonyi"],
                [2000.0, 6000.0, 18000.0],
                "3-4 days",
            ),
            Zone::new(
                7,
                "North-Central",
                &["FCT Abuja", "Niger", "Nasarawa", "Plateau", "Benue"],
                [2200.0, 6500.0, 22000.0],
                "2-4 days",
            ),
            Zone::new(
                8,
                "North-West",
                &["Kaduna", "Kano", "Katsina", "Sokoto", "Kebbi", "Zamfara", "Jigawa"],
                [2500.0, 7500.0, 28000.0],
                "3-5 days",
            ),
            Zone::new(
                9,
                "North-East",
                &["Bauchi", "Gombe", "Adamawa", "Taraba", "Borno", "Yobe"],
                [2800.0, 8500.0, 33000.0],
                "4-6 days",
            ),
            Zone::new(
                10,
                "Far South",
                &["Cross River", "Akwa Ibom"],
                [2500.0, 7000.0, 25000.0],
                "3-5 days",
            ),
        ];

        Self {
            home_region: "Oyo".to_string(),
            home_city: "Ibadan".to_string(),
            home_city_zone: 1,
            home_region_zone: 2,
            home_localities: IBADAN_LOCALITIES.iter().map(|s| s.to_string()).collect(),
            regions: NIGERIA_STATES.iter().map(|s| s.to_string()).collect(),
            zones,
            tiers: TierThresholds::default(),
            free_shipping_threshold: default_free_shipping_threshold(),
            fallback: FallbackQuote::default(),
        }
    }

    /// Parse a catalog from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::CatalogParse(e.to_string()))
    }

    /// Serialize the catalog to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::CatalogParse(e.to_string()))
    }

    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::CatalogParse(e.to_string()))
    }

    /// Serialize the catalog to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::CatalogParse(e.to_string()))
    }

    /// Load a catalog file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::parse(&content, path)
    }

    /// Parse catalog text, choosing the format from `path`'s extension
    pub fn parse(content: &str, path: &std::path::Path) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(content)
        } else {
            Self::from_yaml(content)
        }
    }

    /// Look a zone up by ordinal
    pub fn zone(&self, ordinal: u32) -> Option<&Zone> {
        self.zones.iter().find(|z| z.ordinal == ordinal)
    }

    /// Zone with the highest ordinal, quoted for unmatched destinations
    pub fn fallback_zone(&self) -> Option<&Zone> {
        self.zones.iter().max_by_key(|z| z.ordinal)
    }

    /// Fingerprint of the pricing table, stable across runs
    pub fn hash(&self) -> String {
        use sha2::{Digest, Sha256};
        let content = self.to_json().unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fees_are_monotonic() {
        let catalog = ZoneCatalog::builtin();
        assert_eq!(catalog.zones.len(), 10);
        for zone in &catalog.zones {
            assert!(zone.fees_are_monotonic(), "zone {} is not monotonic", zone.name);
        }
    }

    #[test]
    fn test_builtin_covers_every_region() {
        let catalog = ZoneCatalog::builtin();
        let members: Vec<String> = catalog
            .zones
            .iter()
            .flat_map(|z| z.member_regions.iter().map(|m| m.to_lowercase()))
            .collect();

        for region in &catalog.regions {
            assert!(
                members.contains(&region.to_lowercase()),
                "{} is not a member of any zone",
                region
            );
        }
    }

    #[test]
    fn test_fallback_zone_is_last_ordinal() {
        let catalog = ZoneCatalog::builtin();
        let zone = catalog.fallback_zone().unwrap();
        assert_eq!(zone.ordinal, 10);
        assert_eq!(zone.name, "Far South");
    }

    #[test]
    fn test_fee_for_tier() {
        let catalog = ZoneCatalog::builtin();
        let lagos = catalog.zone(4).unwrap();
        assert_eq!(lagos.fee_for(WeightTier::Light), 1800.0);
        assert_eq!(lagos.fee_for(WeightTier::Medium), 4000.0);
        assert_eq!(lagos.fee_for(WeightTier::Heavy), 8000.0);
    }

    #[test]
    fn test_yaml_defaults() {
        let catalog = ZoneCatalog::from_yaml(
            r#"
home_region: Oyo
home_city: Ibadan
home_city_zone: 1
home_region_zone: 1
zones:
  - ordinal: 1
    name: Everywhere
    member_regions: [Oyo]
    light_fee: 100
    medium_fee: 200
    heavy_fee: 300
    estimated_window: 1 day
"#,
        )
        .unwrap();

        assert_eq!(catalog.tiers, TierThresholds::default());
        assert_eq!(catalog.free_shipping_threshold, 100_000.0);
        assert_eq!(catalog.fallback.fee, 5000.0);
        assert!(catalog.regions.is_empty());
    }

    #[test]
    fn test_yaml_missing_zones_is_error() {
        let err = ZoneCatalog::from_yaml("home_region: Oyo\n").unwrap_err();
        assert!(matches!(err, Error::CatalogParse(_)));
    }

    #[test]
    fn test_hash_changes_with_prices() {
        let catalog = ZoneCatalog::builtin();
        let mut repriced = catalog.clone();
        repriced.zones[0].light_fee = 1100.0;

        assert!(catalog.hash().starts_with("sha256:"));
        assert_eq!(catalog.hash(), ZoneCatalog::builtin().hash());
        assert_ne!(catalog.hash(), repriced.hash());
    }
}
