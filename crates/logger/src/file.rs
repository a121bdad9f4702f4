//! Buffered file sink with a bounded queue and a single writer task.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::Sink;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{Error, Result};
use crate::format::format_line;
use crate::level::Level;

/// Buffered writer capacity used when the configured size is zero.
pub const DEFAULT_WRITE_BUFFER_BYTES: usize = 4096;

/// Queue depth used when the configured depth is zero.
pub const DEFAULT_QUEUE_DEPTH: usize = 100;

/// Configuration for [`FileSink`].
pub struct FileSinkConfig {
    /// Byte capacity of the buffered writer. Zero selects
    /// [`DEFAULT_WRITE_BUFFER_BYTES`].
    pub write_buffer_bytes: usize,

    /// Depth of the bounded queue of pending lines. Zero selects
    /// [`DEFAULT_QUEUE_DEPTH`]. Once full, `log` fails with
    /// [`Error::QueueFull`] instead of blocking.
    pub queue_depth: usize,

    /// Receiver of failures the writer task absorbs.
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            write_buffer_bytes: DEFAULT_WRITE_BUFFER_BYTES,
            queue_depth: DEFAULT_QUEUE_DEPTH,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }
}

/// Sink that appends records to a file through a bounded queue.
///
/// `log` validates and formats the record, then enqueues it without ever
/// waiting on disk I/O. A single writer task drains the queue in FIFO
/// order, so concurrent producers get whole-line writes in acceptance
/// order with no lock on the file. `close` stops intake, drains the
/// backlog, syncs the file, and joins the task.
#[derive(Debug)]
pub struct FileSink {
    /// Intake side of the queue; taken on close so the channel closes.
    queue: Mutex<Option<mpsc::Sender<String>>>,
    /// Writer task handle; taken exactly once on close.
    worker: Mutex<Option<JoinHandle<Result<()>>>>,
}

impl FileSink {
    /// Open `path` for appending (creating it if absent) with default
    /// buffer and queue sizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be opened. No writer
    /// task is spawned on failure.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, FileSinkConfig::default()).await
    }

    /// Open `path` with explicit buffer, queue, and diagnostics settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be opened.
    pub async fn open_with_config(path: impl AsRef<Path>, config: FileSinkConfig) -> Result<Self> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())
            .await
            .map_err(|e| Error::Io("error opening log file", e))?;

        let write_buffer_bytes = if config.write_buffer_bytes == 0 {
            DEFAULT_WRITE_BUFFER_BYTES
        } else {
            config.write_buffer_bytes
        };
        let queue_depth = if config.queue_depth == 0 {
            DEFAULT_QUEUE_DEPTH
        } else {
            config.queue_depth
        };

        let (sender, receiver) = mpsc::channel(queue_depth);
        let worker = tokio::spawn(write_worker(
            receiver,
            file,
            write_buffer_bytes,
            config.diagnostics,
        ));

        Ok(Self {
            queue: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        })
    }
}

#[async_trait]
impl Sink for FileSink {
    async fn log(&self, level: &str, message: &str) -> Result<()> {
        let level = level.parse::<Level>()?;
        let line = format_line(level, message);

        let queue = self.queue.lock().await;
        let sender = queue.as_ref().ok_or(Error::Closed)?;
        match sender.try_send(line) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => Err(Error::QueueFull),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(Error::Closed),
        }
    }

    async fn close(&self) -> Result<()> {
        // Dropping the last sender closes the queue; the writer drains
        // whatever was accepted before exiting.
        drop(self.queue.lock().await.take().ok_or(Error::Closed)?);

        let worker = self.worker.lock().await.take().ok_or(Error::Closed)?;
        match worker.await {
            Ok(result) => result,
            Err(e) => Err(Error::Io(
                "error joining writer task",
                std::io::Error::other(e),
            )),
        }
    }
}

/// Single writer task bound to the queue's lifetime.
///
/// Per-line write and flush failures go to `diagnostics` and the worker
/// keeps draining; only the terminal flush and sync decide the close
/// outcome.
async fn write_worker(
    mut queue: mpsc::Receiver<String>,
    file: File,
    write_buffer_bytes: usize,
    diagnostics: Arc<dyn Diagnostics>,
) -> Result<()> {
    let mut writer = BufWriter::with_capacity(write_buffer_bytes, file);

    while let Some(line) = queue.recv().await {
        if let Err(error) = write_line(&mut writer, &line).await {
            diagnostics.report("error writing to log file", &error);
            continue;
        }
        if let Err(error) = writer.flush().await {
            diagnostics.report("error flushing log buffer", &error);
        }
    }

    debug!("log queue closed, draining writer");

    writer
        .flush()
        .await
        .map_err(|e| Error::Io("error flushing log file", e))?;
    writer
        .into_inner()
        .sync_all()
        .await
        .map_err(|e| Error::Io("error syncing log file", e))
}

/// Write one line plus its trailing newline into the buffer.
async fn write_line(writer: &mut BufWriter<File>, line: &str) -> std::io::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await
}
