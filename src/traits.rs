//! Seams between the pipeline and the outside world.
//!
//! The resolver talks to the compatibility matrix only through
//! [`VersionSource`], so its selection and rewrite rules can be exercised
//! with canned responses.

use crate::error::Result;
use crate::resolver::VersionsResponse;

/// Source of compatibility-matrix documents.
pub trait VersionSource: Send + Sync {
    /// Fetch and decode the versions document served at `url`.
    ///
    /// Transport failures, non-200 statuses and undecodable bodies are all
    /// errors; implementations do not retry.
    fn fetch_versions(&self, url: &str) -> Result<VersionsResponse>;
}
