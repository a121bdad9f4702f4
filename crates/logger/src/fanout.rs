//! Fanout composition of sinks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Sink;
use crate::error::{Error, Result};
use crate::level::Level;

/// Sink that forwards every record to an ordered list of member sinks.
///
/// The level is validated once before any member runs, so an invalid
/// token touches nothing. Forwarding stops at the first member failure,
/// which comes back as [`Error::Sink`] tagged with the member's position;
/// members after it are not attempted for that call. An empty fanout
/// accepts records vacuously.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn Sink>>,
}

impl FanoutSink {
    /// Compose `sinks` in forwarding order.
    ///
    /// Members are shared handles: a sink referenced from two fanouts is
    /// closed by whichever closes first, and the caller owns that
    /// coordination.
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl Sink for FanoutSink {
    async fn log(&self, level: &str, message: &str) -> Result<()> {
        level.parse::<Level>()?;

        for (index, sink) in self.sinks.iter().enumerate() {
            sink.log(level, message).await.map_err(|e| Error::Sink {
                index,
                source: Box::new(e),
            })?;
        }

        Ok(())
    }

    /// Close members in order, stopping at the first failure.
    ///
    /// Members after a failing one are left open; the caller decides
    /// whether to retry or abandon them.
    async fn close(&self) -> Result<()> {
        for (index, sink) in self.sinks.iter().enumerate() {
            sink.close().await.map_err(|e| Error::Sink {
                index,
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
