use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the static delivery network.
///
/// Assignment itself never fails; these only surface at startup.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse network config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown location node: {0}")]
    UnknownNode(String),

    #[error("invalid distance {distance} on edge {from} - {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
