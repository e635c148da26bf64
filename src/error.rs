use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvgenError {
    #[error("File={} not found or size=0", path.display())]
    InputMissing { path: PathBuf },

    #[error("IO error at '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing error in '{file}' line {line}: {message}")]
    ParseError {
        file: String,
        line: usize,
        message: String,
    },

    /// Transport failure (DNS, connect, timeout, TLS)
    #[error("Failed response url={url}, error={reason}")]
    RemoteFetchError { url: String, reason: String },

    #[error("Failed response url={url}, status_code={status}, text={body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// Body was received but is not a usable versions document
    #[error("Invalid versions response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    #[error("No versions URL configured for role '{0}'")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, EnvgenError>;
