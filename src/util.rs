//! Text matching helpers
//!
//! Destination text is free-form, so all comparisons are case-insensitive.

/// Case-insensitive equality
///
/// # Examples
/// ```
/// use shipzone::util::eq_ignore_case;
/// assert!(eq_ignore_case("Lagos", "LAGOS"));
/// assert!(!eq_ignore_case("Lagos", "Lagos State"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test: does `haystack` contain `needle`?
///
/// # Examples
/// ```
/// use shipzone::util::contains_ignore_case;
/// assert!(contains_ignore_case("Lagos State", "lagos"));
/// assert!(!contains_ignore_case("Lagos", "lagos state"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Trim and lower-case locality text; absent text becomes empty
pub fn normalize_locality(locality: Option<&str>) -> String {
    locality.map(|l| l.trim().to_lowercase()).unwrap_or_default()
}
