//! Env file handling: parsing, loading the defaults, merging overrides and
//! writing the generated file.

pub mod loader;
pub mod overrides;
pub mod parser;
pub mod types;
pub mod writer;

pub use loader::load_defaults;
pub use overrides::{OverrideSummary, apply_overrides};
pub use parser::parse_env_str;
pub use types::{EnvEntry, EnvMap};
pub use writer::{render_env, write_env};
