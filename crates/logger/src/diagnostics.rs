//! Side channel for failures the writer task absorbs.

use std::io;

use tokio::sync::mpsc;
use tracing::warn;

/// Receiver of failures the file sink's writer task absorbed.
///
/// Once `log` has accepted a record, a later write or flush failure has
/// no caller left to report to. The worker hands those failures here and
/// keeps draining; implementations decide where they surface.
pub trait Diagnostics: Send + Sync {
    /// Record one absorbed failure. `op` names the operation that failed.
    fn report(&self, op: &'static str, error: &io::Error);
}

/// Default diagnostics: absorbed failures become `tracing` warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, op: &'static str, error: &io::Error) {
        warn!("{op}: {error}");
    }
}

/// Diagnostics that forward rendered failures into a channel.
///
/// Lets tests and callers observe absorbed failures without scraping
/// process output. Reports are dropped once the channel is full; the
/// writer task never blocks on diagnostics.
#[derive(Clone, Debug)]
pub struct ChannelDiagnostics {
    sender: mpsc::Sender<String>,
}

impl ChannelDiagnostics {
    /// Create a capture channel with room for `capacity` reports.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

impl Diagnostics for ChannelDiagnostics {
    fn report(&self, op: &'static str, error: &io::Error) {
        let _ = self.sender.try_send(format!("{op}: {error}"));
    }
}
