// Common constants used throughout the codebase

/// Default variables shipped with the compose bundle
pub const INPUT_FILE_NAME: &str = ".env.default";

/// User overrides, optional
pub const OVERRIDE_FILE_NAME: &str = ".env.override";

/// Generated file read by docker compose
pub const OUTPUT_FILE_NAME: &str = ".env";

/// Header written at the top of the generated file
pub const OUTPUT_FILE_HEADER: &str = "# !!! PLEASE DO NOT EDIT THIS FILE !!!
# To make changes to the '.env', use the '.env.override' file
# https://github.com/anyproto/any-sync-dockercompose/wiki/Configuration

";

/// Variables whose role value (`prod`, `stage1`) is replaced by a pinned
/// version, paired with the package key looked up in the versions response.
pub const VERSION_VARIABLES: &[(&str, &str)] = &[
    ("ANY_SYNC_NODE_VERSION", "pkg::any-sync-node"),
    ("ANY_SYNC_FILENODE_VERSION", "pkg::any-sync-filenode"),
    ("ANY_SYNC_COORDINATOR_VERSION", "pkg::any-sync-coordinator"),
    ("ANY_SYNC_CONSENSUSNODE_VERSION", "pkg::any-sync-consensusnode"),
];

/// Prefix prepended to resolved versions
pub const VERSION_PREFIX: &str = "v";
