/// Compatibility matrix endpoints
///
/// One endpoint per deployment role. Each returns a JSON object keyed by a
/// numeric timestamp; the value maps package keys to compatible versions.
use std::time::Duration;

pub const VERSIONS_API_BASE: &str = "https://puppetdoc.anytype.io/api/v1";

/// Roles accepted as values of the version variables
pub const ROLES: &[&str] = &["prod", "stage1"];

/// Connect budget for a versions request
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(3050);

/// Total budget for a versions request, connect included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the versions endpoint for a role
///
/// # Examples
/// ```
/// # use envgen::constants::urls::versions_url;
/// assert_eq!(
///     versions_url("prod"),
///     "https://puppetdoc.anytype.io/api/v1/prod-any-sync-compatible-versions/"
/// );
/// ```
pub fn versions_url(role: &str) -> String {
    format!(
        "{}/{}-any-sync-compatible-versions/",
        VERSIONS_API_BASE.trim_end_matches('/'),
        role
    )
}

/// Role name paired with its endpoint, in declaration order
pub fn role_urls() -> Vec<(String, String)> {
    ROLES
        .iter()
        .map(|role| (role.to_string(), versions_url(role)))
        .collect()
}

#[cfg(test)]
mod tests;
