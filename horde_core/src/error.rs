use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("card api returned {status}: {details}")]
    Api { status: u16, details: String },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

impl From<crate::card::ApiError> for FetchError {
    fn from(value: crate::card::ApiError) -> Self {
        let details = if value.details.is_empty() {
            value.code
        } else {
            value.details
        };
        Self::Api {
            status: value.status,
            details,
        }
    }
}

/// Why a config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
