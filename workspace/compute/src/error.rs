use thiserror::Error;

/// Error types for the compute crate
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The embedded prediction payload could not be decoded
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type alias for compute operations
pub type Result<T> = std::result::Result<T, ComputeError>;
