//! Error types for the logger crate.

use thiserror::Error;

use crate::level::ParseLevelError;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Sink was used after close.
    #[error("sink already closed")]
    Closed,

    /// Level token is not one of the accepted set.
    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),

    /// IO operation failed.
    #[error("{0}: {1}")]
    Io(&'static str, #[source] std::io::Error),

    /// Bounded queue was full; the record was dropped.
    #[error("log queue full, record dropped")]
    QueueFull,

    /// A fanout member failed.
    #[error("sink {index} failed")]
    Sink {
        /// Position of the failing member in construction order.
        index: usize,
        /// The member's failure.
        #[source]
        source: Box<Error>,
    },
}
