//! Validation CLI command

use super::util::print_json;
use shipzone::config::load_or_default;
use shipzone::*;
use std::path::{Path, PathBuf};

/// Validate `file`, else `--catalog`, else the configured catalog, else the built-in one.
/// Files are validated without loading them first so parse errors become issues.
pub fn cmd_validate(
    file: Option<&Path>,
    catalog_override: Option<&Path>,
    json: bool,
    strict: bool,
) -> Result<()> {
    let target: Option<PathBuf> = match file.or(catalog_override) {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().map_err(Error::Io)?;
            load_or_default(&cwd)?.catalog_path(&cwd)
        }
    };

    let (result, source) = match &target {
        Some(path) => (validate_catalog_file(path), path.display().to_string()),
        None => (
            validate_catalog(&ZoneCatalog::builtin()),
            "built-in catalog".to_string(),
        ),
    };

    if json {
        print_json(&serde_json::json!({
            "source": source,
            "valid": !result.has_errors() && !(strict && result.has_warnings()),
            "errors": result.error_count(),
            "warnings": result.warning_count(),
            "zones_checked": result.zones_checked,
            "issues": result.issues,
        }))?;
    } else if result.issues.is_empty() {
        println!("✓ {} is valid ({} zones)", source, result.zones_checked);
    } else {
        for issue in &result.issues {
            let (prefix, level) = match issue.severity {
                Severity::Error => ("✗", "ERROR"),
                Severity::Warning => ("⚠", "WARN"),
            };
            println!("{} [{}] {}: {}", prefix, issue.code, level, issue.message);
            println!("  At: {}", issue.location);
        }

        println!();
        if result.has_errors() {
            println!(
                "✗ {} error(s), {} warning(s)",
                result.error_count(),
                result.warning_count()
            );
        } else {
            println!("✓ {} warning(s) (no errors)", result.warning_count());
        }
    }

    if result.has_errors() {
        return Err(Error::Validation("catalog has errors".to_string()));
    }
    if strict && result.has_warnings() {
        return Err(Error::Validation("catalog has warnings (strict mode)".to_string()));
    }
    Ok(())
}
