//! Error types for the scanner crate.

use log_analyzer_logger::ParseLevelError;
use thiserror::Error;

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Level token is not one of the accepted set.
    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),

    /// IO operation failed.
    #[error("{0}: {1}")]
    Io(&'static str, #[source] std::io::Error),
}
