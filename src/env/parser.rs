use super::types::EnvEntry;
use crate::error::{EnvgenError, Result};

/// Parse the body of an env file.
///
/// Blank lines and `#` comments are skipped. The remaining lines are trimmed
/// and split on the first `=`, so values may themselves contain `=`. `file`
/// is only used to label errors.
pub fn parse_env_str(content: &str, file: &str) -> Result<Vec<EnvEntry>> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| EnvgenError::ParseError {
            file: file.to_string(),
            line: idx + 1,
            message: format!("expected KEY=VALUE, got '{}'", line),
        })?;

        if key.is_empty() {
            return Err(EnvgenError::ParseError {
                file: file.to_string(),
                line: idx + 1,
                message: "empty variable name".to_string(),
            });
        }

        entries.push(EnvEntry {
            key: key.to_string(),
            value: value.to_string(),
            line: idx + 1,
        });
    }

    Ok(entries)
}
