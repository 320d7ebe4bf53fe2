//! Error types for the beacon

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Beacon error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written back out
    #[error("Config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// Destination address is not a valid `host:port`
    #[error("Invalid destination address: {0}")]
    InvalidAddress(String),

    /// Tracked entity could not be resolved this frame
    #[error("Pose unavailable: {0}")]
    PoseUnavailable(&'static str),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
