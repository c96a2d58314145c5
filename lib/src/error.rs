use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading CLE inputs from disk or the environment
#[derive(Error, Debug)]
pub enum CleError {
    /// Reading or writing a file failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML descriptor could not be parsed
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML descriptor parsed but is not a usable CLE descriptor
    #[error("Invalid CLE yaml: {0}")]
    InvalidYaml(String),

    /// Proof parameters could not be (de)serialized
    #[error("Proof params serialization error: {0}")]
    ProofParams(#[from] serde_json::Error),

    /// A provider URL is malformed
    #[error("Invalid URL for {name}: {source}")]
    InvalidUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },
}

impl CleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the requested file simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for CLE input operations
pub type CleResult<T> = Result<T, CleError>;
