use super::loader::read_env_file;
use super::types::{EnvEntry, EnvMap};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::ui;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideSummary {
    /// Entries read from the override file
    pub applied: usize,
    /// Of those, how many replaced an existing value
    pub replaced: usize,
    /// Of those, how many introduced a new variable
    pub added: usize,
}

/// Merge the optional override file into `env`.
///
/// A missing or empty override file is not an error.
pub fn apply_overrides(cfg: &GeneratorConfig, env: &mut EnvMap) -> Result<OverrideSummary> {
    let path = &cfg.override_file;

    let Some(entries) = read_env_file(path)? else {
        ui::info(&format!(
            "No override file found at {} or file is empty",
            path.display()
        ));
        return Ok(OverrideSummary::default());
    };

    ui::info(&format!("Loading override variables from: {}", path.display()));
    let summary = merge_entries(env, entries, &path.display().to_string());
    ui::info(&format!(
        "Applied {} overrides from {}",
        summary.applied,
        path.display()
    ));
    Ok(summary)
}

/// Apply parsed entries on top of `env`, later entries winning.
pub fn merge_entries(env: &mut EnvMap, entries: Vec<EnvEntry>, file: &str) -> OverrideSummary {
    let mut summary = OverrideSummary::default();
    let mut seen = HashSet::new();

    for EnvEntry { key, value, .. } in entries {
        if !seen.insert(key.clone()) {
            ui::warning(&format!("Duplicate key={} in env file={}", key, file));
        }

        match env.get(&key) {
            Some(old) => {
                ui::info(&format!("Overriding {}: {} -> {}", key, old, value));
                summary.replaced += 1;
            }
            None => {
                ui::info(&format!("Adding new variable {}={}", key, value));
                summary.added += 1;
            }
        }

        env.insert(key, value);
        summary.applied += 1;
    }

    summary
}
