use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("container runtime request failed: {0}")]
    Runtime(#[from] bollard::errors::Error),

    #[error("malformed inspection for container {container}: {reason}")]
    MalformedInspection { container: String, reason: String },

    #[error("failed to serialize discovery document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiscoverError {
    pub(crate) fn malformed(container: &str, reason: &str) -> Self {
        DiscoverError::MalformedInspection {
            container: container.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiscoverError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
