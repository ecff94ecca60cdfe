//! Destination → zone resolution
//!
//! Region text is matched against each zone's member regions, with the
//! seller's home region split into "inside the home city" and "rest of the
//! region" by looking at the locality text.
//!
//! Resolution is total: text that matches nothing resolves to the catalog's
//! last zone, reported as [`MatchKind::Fallback`] so callers can tell a
//! default apart from a genuine match.

use crate::catalog::{Zone, ZoneCatalog};
use crate::util::{contains_ignore_case, eq_ignore_case, normalize_locality};
use serde::Serialize;

/// How a destination was matched to its zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind<'a> {
    /// Home region, locality inside the home city
    HomeCity,
    /// Home region, locality elsewhere in the region
    HomeRegion,
    /// Generic match on one of the zone's member regions
    Region { member: &'a str },
    /// Nothing matched; the last zone was used
    Fallback,
    /// The catalog could not produce a zone
    Unresolved,
}

/// Outcome of [`ZoneResolver::resolve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub zone: Option<&'a Zone>,
    pub kind: MatchKind<'a>,
}

impl<'a> Resolution<'a> {
    /// True when the destination text actually matched a zone
    pub fn matched(&self) -> bool {
        matches!(
            self.kind,
            MatchKind::HomeCity | MatchKind::HomeRegion | MatchKind::Region { .. }
        )
    }
}

/// Resolves free-text destinations against a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct ZoneResolver<'a> {
    catalog: &'a ZoneCatalog,
}

impl<'a> ZoneResolver<'a> {
    pub fn new(catalog: &'a ZoneCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a ZoneCatalog {
        self.catalog
    }

    /// Resolve `region` (and optional `locality`) to a zone
    pub fn resolve(&self, region: &str, locality: Option<&str>) -> Resolution<'a> {
        let region = region.trim();
        let catalog = self.catalog;

        if self.in_home_region(region) {
            let locality = normalize_locality(locality);
            let (ordinal, kind) = if self.locality_in_home_city(&locality) {
                (catalog.home_city_zone, MatchKind::HomeCity)
            } else {
                (catalog.home_region_zone, MatchKind::HomeRegion)
            };

            log::debug!(
                "home region '{}' (locality '{}') -> zone {}",
                region,
                locality,
                ordinal
            );

            return match catalog.zone(ordinal) {
                Some(zone) => Resolution {
                    zone: Some(zone),
                    kind,
                },
                None => {
                    log::warn!("catalog has no zone with ordinal {}", ordinal);
                    Resolution {
                        zone: None,
                        kind: MatchKind::Unresolved,
                    }
                }
            };
        }

        // Lowest matching ordinal wins, whatever order the zones are stored in
        let hit = catalog
            .zones
            .iter()
            .filter_map(|zone| {
                zone.member_regions
                    .iter()
                    .find(|m| eq_ignore_case(m, region) || contains_ignore_case(region, m))
                    .map(|member| (zone, member.as_str()))
            })
            .min_by_key(|(zone, _)| zone.ordinal);

        if let Some((zone, member)) = hit {
            log::debug!("region '{}' matched '{}' in zone {}", region, member, zone.ordinal);
            return Resolution {
                zone: Some(zone),
                kind: MatchKind::Region { member },
            };
        }

        match catalog.fallback_zone() {
            Some(zone) => {
                if !region.is_empty() {
                    log::warn!(
                        "region '{}' matched no zone, falling back to zone {}",
                        region,
                        zone.ordinal
                    );
                }
                Resolution {
                    zone: Some(zone),
                    kind: MatchKind::Fallback,
                }
            }
            None => {
                log::warn!("catalog has no zones");
                Resolution {
                    zone: None,
                    kind: MatchKind::Unresolved,
                }
            }
        }
    }

    /// Does the locality text name a place inside the home city?
    pub fn is_inside_home_city(&self, locality: &str) -> bool {
        self.locality_in_home_city(&normalize_locality(Some(locality)))
    }

    // Blank names would match every text, so they never match
    fn in_home_region(&self, region: &str) -> bool {
        let home = self.catalog.home_region.trim();
        !home.is_empty() && contains_ignore_case(region, home)
    }

    fn locality_in_home_city(&self, normalized: &str) -> bool {
        std::iter::once(&self.catalog.home_city)
            .chain(&self.catalog.home_localities)
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .any(|fragment| normalized.contains(&fragment.to_lowercase()))
    }

    /// All region names, in catalog order
    pub fn all_regions(&self) -> &'a [String] {
        &self.catalog.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordinal(resolution: &Resolution<'_>) -> u32 {
        resolution.zone.map(|z| z.ordinal).unwrap_or(0)
    }

    #[test]
    fn test_home_city_by_locality_fragment() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        let r = resolver.resolve("Oyo", Some("Bodija"));
        assert_eq!(ordinal(&r), 1);
        assert_eq!(r.kind, MatchKind::HomeCity);
        assert!(r.matched());
    }

    #[test]
    fn test_home_city_by_city_name() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        assert_eq!(ordinal(&resolver.resolve("Oyo", Some("Ibadan"))), 1);
        assert_eq!(ordinal(&resolver.resolve("Oyo State", Some("  IBADAN  "))), 1);
    }

    #[test]
    fn test_home_region_outside_city() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        let r = resolver.resolve("Oyo", Some("Ogbomoso"));
        assert_eq!(ordinal(&r), 2);
        assert_eq!(r.kind, MatchKind::HomeRegion);

        assert_eq!(ordinal(&resolver.resolve("Oyo", None)), 2);
    }

    #[test]
    fn test_generic_match_reports_member() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        let r = resolver.resolve("  lagos state ", None);
        assert_eq!(ordinal(&r), 4);
        assert_eq!(r.kind, MatchKind::Region { member: "Lagos" });
    }

    #[test]
    fn test_unknown_region_falls_back() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        for text in ["Atlantis", "", "   "] {
            let r = resolver.resolve(text, None);
            assert_eq!(ordinal(&r), 10, "text {:?}", text);
            assert_eq!(r.kind, MatchKind::Fallback);
            assert!(!r.matched());
        }
    }

    #[test]
    fn test_scan_follows_ordinal_not_storage_order() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.zones.reverse();
        let resolver = ZoneResolver::new(&catalog);

        assert_eq!(ordinal(&resolver.resolve("Atlantis", None)), 10);
        assert_eq!(ordinal(&resolver.resolve("Kano", None)), 8);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let mut catalog = ZoneCatalog::builtin();
        // "Niger Delta" contains both "Delta" (zone 5) and "Niger" (zone 7)
        let resolver = ZoneResolver::new(&catalog);
        assert_eq!(
            resolver.resolve("Niger Delta", None).kind,
            MatchKind::Region { member: "Delta" }
        );

        catalog.zones[4].member_regions.clear();
        let resolver = ZoneResolver::new(&catalog);
        assert_eq!(ordinal(&resolver.resolve("Niger Delta", None)), 7);
    }

    #[test]
    fn test_missing_home_zone_is_unresolved() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_city_zone = 99;
        let resolver = ZoneResolver::new(&catalog);

        let r = resolver.resolve("Oyo", Some("Ibadan"));
        assert!(r.zone.is_none());
        assert_eq!(r.kind, MatchKind::Unresolved);
    }

    #[test]
    fn test_empty_catalog_is_unresolved() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.zones.clear();
        let resolver = ZoneResolver::new(&catalog);

        let r = resolver.resolve("Lagos", None);
        assert!(r.zone.is_none());
        assert!(!r.matched());
    }

    #[test]
    fn test_is_inside_home_city() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        assert!(resolver.is_inside_home_city("Ring Road"));
        assert!(resolver.is_inside_home_city("  ibadan south-west"));
        assert!(!resolver.is_inside_home_city("Ogbomoso"));
        assert!(!resolver.is_inside_home_city(""));
    }

    #[test]
    fn test_city_name_counts_without_localities() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_localities.clear();
        let resolver = ZoneResolver::new(&catalog);

        assert!(resolver.is_inside_home_city("Ibadan"));
        assert!(!resolver.is_inside_home_city("Bodija"));
    }

    #[test]
    fn test_blank_home_names_match_nothing() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_localities.push(String::new());
        catalog.home_localities.push("   ".to_string());
        let resolver = ZoneResolver::new(&catalog);
        let r = resolver.resolve("Oyo", Some("Ogbomoso"));
        assert_eq!(r.kind, MatchKind::HomeRegion);
        assert_eq!(ordinal(&r), 2);

        catalog.home_city = String::new();
        let resolver = ZoneResolver::new(&catalog);
        assert!(!resolver.is_inside_home_city("Ogbomoso"));
        assert!(resolver.is_inside_home_city("Bodija"));

        catalog.home_region = " ".to_string();
        let resolver = ZoneResolver::new(&catalog);
        assert_eq!(resolver.resolve("Lagos", None).kind, MatchKind::Region { member: "Lagos" });
        assert_eq!(resolver.resolve("Oyo", None).kind, MatchKind::Region { member: "Oyo" });
    }

    #[test]
    fn test_all_regions_verbatim() {
        let catalog = ZoneCatalog::builtin();
        let resolver = ZoneResolver::new(&catalog);

        let regions = resolver.all_regions();
        assert_eq!(regions.len(), 37);
        assert_eq!(regions.first().map(String::as_str), Some("Abia"));
        assert_eq!(regions.last().map(String::as_str), Some("Zamfara"));
    }
}
