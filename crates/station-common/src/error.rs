//! Error types for the station map pipeline.

use thiserror::Error;

/// Result type alias using StationMapError.
pub type StationMapResult<T> = Result<T, StationMapError>;

/// Primary error type for station map operations.
#[derive(Debug, Error)]
pub enum StationMapError {
    // === Fetch Errors ===
    #[error("Failed to fetch stations from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Station endpoint {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === Data Errors ===
    #[error("Malformed station response: {0}")]
    Parse(String),

    // === Setup Errors ===
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid color stops: {0}")]
    InvalidColorStops(String),
}

impl StationMapError {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            StationMapError::Fetch { .. } | StationMapError::HttpStatus { .. } => "fetch_failure",
            StationMapError::Parse(_) => "parse_failure",
            StationMapError::Config(_) => "config",
            StationMapError::InvalidColorStops(_) => "invalid_color_stops",
        }
    }

    /// Network error or non-success HTTP status.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            StationMapError::Fetch { .. } | StationMapError::HttpStatus { .. }
        )
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, StationMapError::Parse(_))
    }
}

impl From<serde_json::Error> for StationMapError {
    fn from(err: serde_json::Error) -> Self {
        StationMapError::Parse(err.to_string())
    }
}
