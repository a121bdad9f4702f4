//! Console sink writing formatted lines to standard output.

use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::Sink;
use crate::error::{Error, Result};
use crate::format::format_line;
use crate::level::Level;

/// Sink that prints each record to standard output as it is logged.
///
/// Writes go through an internal lock, so concurrent callers never
/// interleave below line granularity. There is no queue: a successful
/// `log` means the line has been written and flushed. `close` is a
/// no-op; standard output outlives the sink.
#[derive(Debug)]
pub struct ConsoleSink {
    stdout: Mutex<Stdout>,
}

impl ConsoleSink {
    /// Create a console sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Sink for ConsoleSink {
    async fn log(&self, level: &str, message: &str) -> Result<()> {
        let level = level.parse::<Level>()?;
        let mut line = format_line(level, message);
        line.push('\n');

        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| Error::Io("error writing to stdout", e))?;
        stdout
            .flush()
            .await
            .map_err(|e| Error::Io("error flushing stdout", e))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
