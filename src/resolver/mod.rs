//! Version pin resolution against the remote compatibility matrix.

mod fetcher;
mod versions;

pub use fetcher::HttpVersionSource;
pub use versions::{PackageVersions, VersionsResponse, version_of};

use crate::config::GeneratorConfig;
use crate::constants::VERSION_PREFIX;
use crate::env::EnvMap;
use crate::error::{EnvgenError, Result};
use crate::traits::VersionSource;
use crate::ui;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Version variables present in the env
    pub checked: usize,
    /// Rewritten to a pinned version
    pub updated: usize,
    /// Role lookup succeeded but the package key was absent
    pub unresolved: usize,
    /// Value was not a role name
    pub skipped: usize,
}

/// Replace role values of the version variables with pinned versions.
///
/// Variables are visited in env order and every role value costs one
/// request, even when several variables name the same role.
pub fn resolve_versions(
    cfg: &GeneratorConfig,
    env: &mut EnvMap,
    source: &dyn VersionSource,
) -> Result<ResolveSummary> {
    ui::info("Processing variables for version updates");
    let mut summary = ResolveSummary::default();

    let candidates: Vec<(String, String, String)> = env
        .iter()
        .filter_map(|(key, value)| {
            cfg.package_key(key)
                .map(|pkg| (key.to_string(), value.to_string(), pkg.to_string()))
        })
        .collect();

    for (key, value, package_key) in candidates {
        summary.checked += 1;
        ui::info(&format!("Processing version variable: {}={}", key, value));

        if !cfg.is_role(&value) {
            ui::info(&format!(
                "Skipping {}={} (not in versions URL map)",
                key, value
            ));
            summary.skipped += 1;
            continue;
        }

        let latest = latest_versions(cfg, &value, source)?;
        match version_of(&latest, &package_key) {
            Some(version) => {
                let pinned = format!("{}{}", VERSION_PREFIX, version);
                ui::info(&format!("Updated {}: {} -> {}", key, value, pinned));
                env.insert(key, pinned);
                summary.updated += 1;
            }
            None => {
                ui::warning(&format!(
                    "Could not find version for {} in latest versions",
                    package_key
                ));
                summary.unresolved += 1;
            }
        }
    }

    ui::info(&format!("Updated {} version variables", summary.updated));
    Ok(summary)
}

/// Fetch the newest entry of the matrix published for `role`.
fn latest_versions(
    cfg: &GeneratorConfig,
    role: &str,
    source: &dyn VersionSource,
) -> Result<PackageVersions> {
    ui::info(&format!("Getting latest versions for role: {}", role));
    let url = cfg
        .versions_url(role)
        .ok_or_else(|| EnvgenError::UnknownRole(role.to_string()))?;

    let response = source.fetch_versions(url)?;
    let (timestamp, versions) = response.latest(url)?;
    ui::info(&format!(
        "Latest versions timestamp: {}, found {} packages",
        timestamp,
        versions.len()
    ));
    Ok(versions.clone())
}
