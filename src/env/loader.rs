use super::parser::parse_env_str;
use super::types::{EnvEntry, EnvMap};
use crate::config::GeneratorConfig;
use crate::error::{EnvgenError, Result};
use crate::ui;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse an env file.
///
/// Returns `Ok(None)` when the file does not exist or is empty; callers
/// decide whether that is fatal.
pub fn read_env_file(path: &Path) -> Result<Option<Vec<EnvEntry>>> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(EnvgenError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if meta.len() == 0 {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| EnvgenError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_env_str(&content, &path.display().to_string()).map(Some)
}

/// Load the mandatory defaults file into a fresh map.
pub fn load_defaults(cfg: &GeneratorConfig) -> Result<EnvMap> {
    let path = &cfg.input_file;
    ui::info(&format!(
        "Loading variables from input file: {}",
        path.display()
    ));

    let entries = read_env_file(path)?.ok_or_else(|| EnvgenError::InputMissing {
        path: path.to_path_buf(),
    })?;

    let mut env = EnvMap::new();
    for entry in entries {
        if env.contains_key(&entry.key) {
            ui::warning(&format!(
                "Duplicate key={} in env file={}",
                entry.key,
                path.display()
            ));
        }
        env.insert(entry.key, entry.value);
    }

    ui::info(&format!(
        "Loaded {} variables from {}",
        env.len(),
        path.display()
    ));
    Ok(env)
}
