//! Immutable run configuration.
//!
//! Every step of the pipeline receives a `&GeneratorConfig`; nothing reads
//! the constants directly so tests can point the steps at scratch files and
//! local servers.

use crate::constants::{self, common, urls};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input_file: PathBuf,
    pub override_file: PathBuf,
    pub output_file: PathBuf,
    pub output_header: String,
    /// Variable name -> package key in the versions response
    pub version_variables: IndexMap<String, String>,
    /// Role name -> versions endpoint
    pub versions_urls: IndexMap<String, String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(common::INPUT_FILE_NAME),
            override_file: PathBuf::from(common::OVERRIDE_FILE_NAME),
            output_file: PathBuf::from(common::OUTPUT_FILE_NAME),
            output_header: common::OUTPUT_FILE_HEADER.to_string(),
            version_variables: constants::VERSION_VARIABLES
                .iter()
                .map(|(var, pkg)| (var.to_string(), pkg.to_string()))
                .collect(),
            versions_urls: urls::role_urls().into_iter().collect(),
            connect_timeout: urls::CONNECT_TIMEOUT,
            request_timeout: urls::REQUEST_TIMEOUT,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with the three env files placed under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = Self::default();
        Self {
            input_file: dir.join(&defaults.input_file),
            override_file: dir.join(&defaults.override_file),
            output_file: dir.join(&defaults.output_file),
            ..defaults
        }
    }

    /// Replace (or add) the endpoint used for `role`.
    pub fn with_role_url(mut self, role: &str, url: impl Into<String>) -> Self {
        self.versions_urls.insert(role.to_string(), url.into());
        self
    }

    pub fn package_key(&self, variable: &str) -> Option<&str> {
        self.version_variables.get(variable).map(String::as_str)
    }

    pub fn versions_url(&self, role: &str) -> Option<&str> {
        self.versions_urls.get(role).map(String::as_str)
    }

    pub fn is_role(&self, value: &str) -> bool {
        self.versions_urls.contains_key(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_match_constants() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.package_key("ANY_SYNC_NODE_VERSION"), Some("pkg::any-sync-node"));
        assert_eq!(
            cfg.package_key("ANY_SYNC_CONSENSUSNODE_VERSION"),
            Some("pkg::any-sync-consensusnode")
        );
        assert_eq!(cfg.package_key("MONGO_VERSION"), None);
        assert!(cfg.is_role("prod"));
        assert!(cfg.is_role("stage1"));
        assert!(!cfg.is_role("v0.5.0"));
    }

    #[test]
    fn test_in_dir_anchors_file_names() {
        let cfg = GeneratorConfig::in_dir(Path::new("/srv/compose"));
        assert_eq!(cfg.input_file, PathBuf::from("/srv/compose/.env.default"));
        assert_eq!(cfg.override_file, PathBuf::from("/srv/compose/.env.override"));
        assert_eq!(cfg.output_file, PathBuf::from("/srv/compose/.env"));
    }

    #[test]
    fn test_with_role_url_replaces_endpoint() {
        let cfg = GeneratorConfig::default().with_role_url("prod", "http://127.0.0.1:9/prod");
        assert_eq!(cfg.versions_url("prod"), Some("http://127.0.0.1:9/prod"));
        assert!(cfg.versions_url("stage1").unwrap().starts_with("https://"));
    }
}
