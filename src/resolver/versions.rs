use crate::error::{EnvgenError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Package key -> version, as published in one matrix entry
pub type PackageVersions = HashMap<String, Value>;

/// Compatibility matrix: publication timestamp -> package versions, in
/// document order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct VersionsResponse {
    entries: IndexMap<String, PackageVersions>,
}

impl VersionsResponse {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the numerically largest timestamp.
    ///
    /// `url` only labels errors. Keys compare as integers, so `"10"` beats
    /// `"9"`; among keys with the same value (`"100"`, `"0100"`) the one
    /// appearing last in the document wins.
    pub fn latest(&self, url: &str) -> Result<(&str, &PackageVersions)> {
        let mut best: Option<(i128, &str, &PackageVersions)> = None;

        for (key, versions) in &self.entries {
            let stamp = key
                .parse::<i128>()
                .map_err(|_| EnvgenError::InvalidResponse {
                    url: url.to_string(),
                    reason: format!("timestamp key '{}' is not an integer", key),
                })?;

            if best.is_none_or(|(current, _, _)| stamp >= current) {
                best = Some((stamp, key.as_str(), versions));
            }
        }

        best.map(|(_, key, versions)| (key, versions))
            .ok_or_else(|| EnvgenError::InvalidResponse {
                url: url.to_string(),
                reason: "response contains no versions".to_string(),
            })
    }
}

/// Printable version for `package_key`.
///
/// Numbers are rendered as written in the JSON; empty strings and
/// non-scalar values count as missing.
pub fn version_of(versions: &PackageVersions, package_key: &str) -> Option<String> {
    match versions.get(package_key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
