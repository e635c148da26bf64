//! Load -> override -> resolve -> write, in one pass.

use crate::config::GeneratorConfig;
use crate::env::{self, OverrideSummary};
use crate::error::Result;
use crate::resolver::{self, HttpVersionSource, ResolveSummary};
use crate::traits::VersionSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Variables written to the output file
    pub variables: usize,
    pub overrides: OverrideSummary,
    pub resolved: ResolveSummary,
}

/// Run every step against `cfg`, fetching versions through `source`.
///
/// The output file is only opened once all earlier steps succeeded.
pub fn run(cfg: &GeneratorConfig, source: &dyn VersionSource) -> Result<RunReport> {
    let mut vars = env::load_defaults(cfg)?;
    let overrides = env::apply_overrides(cfg, &mut vars)?;
    let resolved = resolver::resolve_versions(cfg, &mut vars, source)?;
    env::write_env(cfg, &vars)?;

    Ok(RunReport {
        variables: vars.len(),
        overrides,
        resolved,
    })
}

/// [`run`] with the live HTTP client.
pub fn run_with_http(cfg: &GeneratorConfig) -> Result<RunReport> {
    let source = HttpVersionSource::new(cfg)?;
    run(cfg, &source)
}

#[cfg(test)]
mod tests;
