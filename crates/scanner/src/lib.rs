//! Read side of the log pipeline
//!
//! Scans files written by the logger crate, counting and filtering lines
//! by level and keyword. Level tokens go through the same validation as
//! the write side, so the accepted set cannot drift between the two.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod scan;

pub use error::{Error, Result};
pub use scan::{count_by_level, filter_logs};
