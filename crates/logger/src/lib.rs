//! Asynchronous multi-sink log writer
//!
//! This crate provides the write side of the log pipeline:
//! - Leveled, timestamped lines in a fixed bracketed layout
//! - A buffered file sink with a bounded queue and a single writer task
//! - Non-blocking backpressure: a full queue fails fast instead of stalling
//! - Console and fanout sinks behind one object-safe trait
//! - Graceful shutdown that drains every accepted line before closing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod console;
mod diagnostics;
mod error;
mod fanout;
mod file;
mod format;
mod level;

pub use console::ConsoleSink;
pub use diagnostics::{ChannelDiagnostics, Diagnostics, TracingDiagnostics};
pub use error::{Error, Result};
pub use fanout::FanoutSink;
pub use file::{DEFAULT_QUEUE_DEPTH, DEFAULT_WRITE_BUFFER_BYTES, FileSink, FileSinkConfig};
pub use format::format_line;
pub use level::{Level, ParseLevelError};

use async_trait::async_trait;

/// A destination for log records.
///
/// Implementations validate the level token, render the record through
/// [`format_line`], and deliver it. Sinks are shared as `Arc<dyn Sink>`;
/// nothing about the trait requires exclusive access.
#[async_trait]
pub trait Sink
where
    Self: Send + Sync + 'static,
{
    /// Validate `level`, format one record, and submit it to the sink.
    ///
    /// The timestamp is captured at this call, not at write time. For
    /// queued sinks a successful return means accepted, not yet durable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevel`] for an unknown level token,
    /// [`Error::QueueFull`] when a bounded sink sheds the record, and
    /// [`Error::Closed`] once the sink has been closed.
    async fn log(&self, level: &str, message: &str) -> Result<()>;

    /// Release the sink's resources.
    ///
    /// Queued sinks drain every accepted record before returning. Calling
    /// `close` twice, or `log` after `close`, is a caller error reported
    /// as [`Error::Closed`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the final flush or sync fails and
    /// [`Error::Closed`] when the sink was already closed.
    async fn close(&self) -> Result<()>;
}
