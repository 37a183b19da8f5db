use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Page at {url} has no <title> element")]
    MissingTitle { url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to list {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad classes of failure, used by the failure policy to decide what may be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote page could not be fetched (network, status, timeout).
    Transport,
    /// The page was fetched but did not have the expected shape.
    ParseShape,
    /// Local filesystem, configuration or serialization problems.
    Local,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Http(_) | CatalogError::Status { .. } | CatalogError::Timeout { .. } => {
                ErrorKind::Transport
            }
            CatalogError::MissingTitle { .. } => ErrorKind::ParseShape,
            CatalogError::Io(_)
            | CatalogError::Listing { .. }
            | CatalogError::Json(_)
            | CatalogError::Toml(_)
            | CatalogError::Config(_) => ErrorKind::Local,
        }
    }

    /// Whether this failure concerns a single remote ID rather than the run as a whole.
    pub fn is_per_id(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport | ErrorKind::ParseShape)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
