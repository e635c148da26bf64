use super::versions::VersionsResponse;
use crate::config::GeneratorConfig;
use crate::error::{EnvgenError, Result};
use crate::project_identity;
use crate::traits::VersionSource;
use crate::ui;
use reqwest::StatusCode;
use reqwest::blocking::Client;

/// Blocking HTTP client for the compatibility matrix endpoints.
pub struct HttpVersionSource {
    client: Client,
}

impl HttpVersionSource {
    pub fn new(cfg: &GeneratorConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.request_timeout)
            .user_agent(project_identity::user_agent())
            .build()
            .map_err(|e| EnvgenError::RemoteFetchError {
                url: String::new(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl VersionSource for HttpVersionSource {
    fn fetch_versions(&self, url: &str) -> Result<VersionsResponse> {
        ui::info(&format!("Making API request to: {}", url));

        let fetch_err = |e: reqwest::Error| EnvgenError::RemoteFetchError {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(fetch_err)?;
        let status = response.status();
        let body = response.text().map_err(fetch_err)?;

        if status != StatusCode::OK {
            return Err(EnvgenError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        ui::debug(&format!("Received {} bytes from {}", body.len(), url));
        let versions = parse_versions_body(url, &body)?;
        ui::info(&format!(
            "API request successful, received {} items",
            versions.len()
        ));
        Ok(versions)
    }
}

pub(super) fn parse_versions_body(url: &str, body: &str) -> Result<VersionsResponse> {
    serde_json::from_str(body).map_err(|e| EnvgenError::InvalidResponse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
