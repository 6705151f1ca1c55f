use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No usable address found for {0}")]
    NotFound(String),

    #[error("Resolution of {host} failed: {source}")]
    ResolutionFailed {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid dial address (expected host:port): {0}")]
    InvalidAddress(String),

    #[error("Connection to {address} failed: {source}")]
    ConnectFailed {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dial to {address} timed out after {timeout:?}")]
    DialTimeout { address: String, timeout: Duration },
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
