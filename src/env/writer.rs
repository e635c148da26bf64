use super::types::EnvMap;
use crate::config::GeneratorConfig;
use crate::error::{EnvgenError, Result};
use crate::ui;
use std::fs;

/// Header followed by one `KEY=VALUE\n` line per variable.
pub fn render_env(header: &str, env: &EnvMap) -> String {
    let mut out = String::with_capacity(header.len() + env.len() * 32);
    out.push_str(header);
    for (key, value) in env.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Overwrite the output file in place (truncate, no temp file).
pub fn write_env(cfg: &GeneratorConfig, env: &EnvMap) -> Result<()> {
    let path = &cfg.output_file;
    ui::info(&format!(
        "Writing {} variables to output file: {}",
        env.len(),
        path.display()
    ));

    fs::write(path, render_env(&cfg.output_header, env)).map_err(|e| EnvgenError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    ui::success(&format!(
        "Successfully generated {} with {} variables",
        path.display(),
        env.len()
    ));
    Ok(())
}
