pub mod common;
pub mod urls;

pub use common::{
    INPUT_FILE_NAME, OUTPUT_FILE_HEADER, OUTPUT_FILE_NAME, OVERRIDE_FILE_NAME, VERSION_PREFIX,
    VERSION_VARIABLES,
};
pub use urls::{CONNECT_TIMEOUT, REQUEST_TIMEOUT, ROLES, role_urls, versions_url};
