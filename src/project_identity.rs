//! Central project identity contract.
//!
//! Runtime identity values shared by the CLI and the HTTP client.

pub const DISPLAY_NAME: &str = "envgen";
pub const BINARY_NAME: &str = "envgen";

pub fn user_agent() -> String {
    format!("{}/{}", BINARY_NAME, env!("CARGO_PKG_VERSION"))
}
