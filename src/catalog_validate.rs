//! Catalog validation for shipzone
//!
//! Checks a `ZoneCatalog` (or a catalog file) for pricing tables that would
//! quote inconsistently: non-monotonic fees, overlapping member regions,
//! home zones that do not exist, regions nothing matches.

use crate::catalog::ZoneCatalog;
use crate::resolve::{MatchKind, ZoneResolver};
use crate::util::{contains_ignore_case, eq_ignore_case};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in a catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    /// File path or zone the issue refers to
    pub location: String,
}

impl CatalogIssue {
    pub fn error(code: &str, message: &str, location: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.to_string(),
            location: location.to_string(),
        }
    }

    pub fn warning(code: &str, message: &str, location: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.to_string(),
            location: location.to_string(),
        }
    }
}

/// Result of catalog validation
#[derive(Debug, Default, Serialize)]
pub struct CatalogValidationResult {
    pub issues: Vec<CatalogIssue>,
    pub zones_checked: usize,
}

impl CatalogValidationResult {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issue codes, in report order
    pub fn codes(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.code.as_str()).collect()
    }
}

/// Validate a catalog file (YAML, or JSON by extension)
pub fn validate_catalog_file(path: &Path) -> CatalogValidationResult {
    let mut result = CatalogValidationResult::default();
    let file_str = path.display().to_string();

    if !path.exists() {
        result
            .issues
            .push(CatalogIssue::error("E001", "File does not exist", &file_str));
        return result;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            result.issues.push(CatalogIssue::error(
                "E002",
                &format!("Cannot read file: {}", e),
                &file_str,
            ));
            return result;
        }
    };

    match ZoneCatalog::parse(&content, path) {
        Ok(catalog) => validate_catalog(&catalog),
        Err(e) => {
            result.issues.push(CatalogIssue::error(
                "E003",
                &format!("Invalid catalog: {}", e),
                &file_str,
            ));
            result
        }
    }
}

/// Validate an in-memory catalog
pub fn validate_catalog(catalog: &ZoneCatalog) -> CatalogValidationResult {
    let mut result = CatalogValidationResult {
        zones_checked: catalog.zones.len(),
        ..Default::default()
    };

    if catalog.zones.is_empty() {
        result
            .issues
            .push(CatalogIssue::error("E010", "Catalog has no zones", "zones"));
        return result;
    }

    validate_zones(catalog, &mut result);
    validate_home(catalog, &mut result);
    validate_member_overlap(catalog, &mut result);
    validate_thresholds(catalog, &mut result);
    validate_region_coverage(catalog, &mut result);

    result
}

fn zone_label(ordinal: u32, name: &str) -> String {
    format!("zone {} ({})", ordinal, name)
}

fn validate_zones(catalog: &ZoneCatalog, result: &mut CatalogValidationResult) {
    let mut seen: HashMap<u32, &str> = HashMap::new();

    for zone in &catalog.zones {
        let label = zone_label(zone.ordinal, &zone.name);

        if let Some(other) = seen.insert(zone.ordinal, &zone.name) {
            result.issues.push(CatalogIssue::error(
                "E011",
                &format!("Ordinal {} is also used by '{}'", zone.ordinal, other),
                &label,
            ));
        }

        if zone.light_fee < 0.0 || zone.medium_fee < 0.0 || zone.heavy_fee < 0.0 {
            result
                .issues
                .push(CatalogIssue::error("E013", "Fees must not be negative", &label));
        }

        if !zone.fees_are_monotonic() {
            result.issues.push(CatalogIssue::error(
                "E012",
                &format!(
                    "Fees must satisfy light <= medium <= heavy (got {} / {} / {})",
                    zone.light_fee, zone.medium_fee, zone.heavy_fee
                ),
                &label,
            ));
        }

        if zone.member_regions.iter().any(|m| m.trim().is_empty()) {
            result.issues.push(CatalogIssue::error(
                "E014",
                "Empty member region would match every destination",
                &label,
            ));
        }

        if zone.name.trim().is_empty() || zone.estimated_window.trim().is_empty() {
            result.issues.push(CatalogIssue::warning(
                "W004",
                "Zone name and estimated window should not be empty",
                &label,
            ));
        }
    }
}

fn validate_home(catalog: &ZoneCatalog, result: &mut CatalogValidationResult) {
    for (field, ordinal) in [
        ("home_city_zone", catalog.home_city_zone),
        ("home_region_zone", catalog.home_region_zone),
    ] {
        if catalog.zone(ordinal).is_none() {
            result.issues.push(CatalogIssue::error(
                "E015",
                &format!("{} refers to missing zone {}", field, ordinal),
                field,
            ));
        }
    }

    for (code, field, value) in [
        ("E019", "home_region", &catalog.home_region),
        ("E020", "home_city", &catalog.home_city),
    ] {
        if value.trim().is_empty() {
            result.issues.push(CatalogIssue::error(
                code,
                &format!("{} must not be blank", field),
                field,
            ));
        }
    }

    if let Some(i) = catalog
        .home_localities
        .iter()
        .position(|l| l.trim().is_empty())
    {
        result.issues.push(CatalogIssue::error(
            "E021",
            "Home locality must not be blank",
            &format!("home_localities[{}]", i),
        ));
    }

    if catalog.home_localities.is_empty() {
        result.issues.push(CatalogIssue::warning(
            "W003",
            "No home localities; only the home city name marks same-city delivery",
            "home_localities",
        ));
    }
}

fn is_home_zone(catalog: &ZoneCatalog, ordinal: u32) -> bool {
    ordinal == catalog.home_city_zone || ordinal == catalog.home_region_zone
}

fn validate_member_overlap(catalog: &ZoneCatalog, result: &mut CatalogValidationResult) {
    let members: Vec<(u32, &str)> = catalog
        .zones
        .iter()
        .flat_map(|z| z.member_regions.iter().map(move |m| (z.ordinal, m.as_str())))
        .filter(|(_, m)| !m.trim().is_empty())
        .collect();
    let home_region = catalog.home_region.trim();

    for (i, &(zone_a, a)) in members.iter().enumerate() {
        let label = format!("zone {}", zone_a);

        if !home_region.is_empty()
            && !is_home_zone(catalog, zone_a)
            && contains_ignore_case(a, home_region)
        {
            result.issues.push(CatalogIssue::warning(
                "W005",
                &format!(
                    "'{}' contains the home region '{}' and is never reached",
                    a, catalog.home_region
                ),
                &label,
            ));
        }

        for &(zone_b, b) in &members[i + 1..] {
            if eq_ignore_case(a, b) {
                result.issues.push(CatalogIssue::error(
                    "E016",
                    &format!("'{}' is listed in zones {} and {}", a, zone_a, zone_b),
                    &label,
                ));
                continue;
            }

            let both_home = is_home_zone(catalog, zone_a) && is_home_zone(catalog, zone_b);
            if zone_a == zone_b || both_home {
                continue;
            }

            if contains_ignore_case(b, a) || contains_ignore_case(a, b) {
                result.issues.push(CatalogIssue::warning(
                    "W001",
                    &format!(
                        "'{}' (zone {}) and '{}' (zone {}) overlap as substrings",
                        a, zone_a, b, zone_b
                    ),
                    &label,
                ));
            }
        }
    }
}

fn validate_thresholds(catalog: &ZoneCatalog, result: &mut CatalogValidationResult) {
    if catalog.tiers.medium_above > catalog.tiers.heavy_above {
        result.issues.push(CatalogIssue::error(
            "E017",
            &format!(
                "tiers.medium_above ({}) exceeds tiers.heavy_above ({})",
                catalog.tiers.medium_above, catalog.tiers.heavy_above
            ),
            "tiers",
        ));
    }

    if catalog.free_shipping_threshold < 0.0 {
        result.issues.push(CatalogIssue::error(
            "E018",
            "free_shipping_threshold must not be negative",
            "free_shipping_threshold",
        ));
    }
}

fn validate_region_coverage(catalog: &ZoneCatalog, result: &mut CatalogValidationResult) {
    let resolver = ZoneResolver::new(catalog);

    for region in &catalog.regions {
        if resolver.resolve(region, None).kind == MatchKind::Fallback {
            result.issues.push(CatalogIssue::warning(
                "W002",
                &format!("Region '{}' matches no zone and is quoted by fallback", region),
                "regions",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Zone;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_is_clean() {
        let result = validate_catalog(&ZoneCatalog::builtin());
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert_eq!(result.zones_checked, 10);
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.zones.clear();
        let result = validate_catalog(&catalog);
        assert_eq!(result.codes(), vec!["E010"]);
    }

    #[test]
    fn test_non_monotonic_fees() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.zones[3].medium_fee = 9000.0;
        let result = validate_catalog(&catalog);
        assert!(result.codes().contains(&"E012"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_duplicate_ordinal_and_member() {
        let mut catalog = ZoneCatalog::builtin();
        catalog
            .zones
            .push(Zone::new(3, "Copy", &["LAGOS"], [1.0, 2.0, 3.0], "1 day"));
        let result = validate_catalog(&catalog);
        let codes = result.codes();
        assert!(codes.contains(&"E011"));
        assert!(codes.contains(&"E016"));
    }

    #[test]
    fn test_substring_overlap_warns() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.zones[4].member_regions.push("Niger Delta".to_string());
        let result = validate_catalog(&catalog);
        assert!(result.codes().contains(&"W001"));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_missing_home_zone() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_region_zone = 42;
        let result = validate_catalog(&catalog);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.issues[0].code, "E015");
    }

    #[test]
    fn test_uncovered_region_warns() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.regions.push("Atlantis".to_string());
        let result = validate_catalog(&catalog);
        assert_eq!(result.codes(), vec!["W002"]);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_bad_thresholds() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.tiers.medium_above = 10;
        catalog.free_shipping_threshold = -1.0;
        let codes = validate_catalog(&catalog).codes().join(",");
        assert_eq!(codes, "E017,E018");
    }

    #[test]
    fn test_blank_home_region() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_region = "  ".to_string();
        let result = validate_catalog(&catalog);
        assert!(result.codes().contains(&"E019"));
        assert!(!result.codes().contains(&"W005"));
    }

    #[test]
    fn test_blank_home_city() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_city = String::new();
        let result = validate_catalog(&catalog);
        assert_eq!(result.codes(), vec!["E020"]);
    }

    #[test]
    fn test_blank_home_locality() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.home_localities.push(String::new());
        let result = validate_catalog(&catalog);
        assert_eq!(result.codes(), vec!["E021"]);
        assert_eq!(result.issues[0].location, "home_localities[27]");
    }

    #[test]
    fn test_json_file_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, ZoneCatalog::builtin().to_json().unwrap()).unwrap();
        let result = validate_catalog_file(&path);
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert_eq!(result.zones_checked, 10);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = validate_catalog_file(&dir.path().join("nope.yaml"));
        assert_eq!(result.codes(), vec!["E001"]);
    }

    #[test]
    fn test_invalid_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, "zones: [unclosed").unwrap();
        let result = validate_catalog_file(&path);
        assert_eq!(result.codes(), vec!["E003"]);
    }
}
