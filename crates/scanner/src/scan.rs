//! Line scanning over written log files.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log_analyzer_logger::Level;

use crate::error::{Error, Result};

/// Count lines in `path` carrying `level`.
///
/// Matching is on the literal upper-case `[LEVEL]` marker the formatter
/// writes; message content never changes the count unless it contains
/// that marker itself. A missing file is an error; an empty file is zero.
///
/// # Errors
///
/// Returns [`Error::InvalidLevel`] for an unknown level token (before any
/// I/O happens) and [`Error::Io`] when the file cannot be opened or read.
pub fn count_by_level(path: impl AsRef<Path>, level: &str) -> Result<usize> {
    let level = level.parse::<Level>()?;
    let needle = format!("[{}]", level.as_upper());

    let mut count = 0;
    for line in read_lines(path.as_ref())? {
        let line = line.map_err(|e| Error::Io("error reading log file", e))?;
        if line.contains(&needle) {
            count += 1;
        }
    }

    Ok(count)
}

/// Collect lines in `path` carrying `level` whose text contains `keyword`.
///
/// The keyword match is case-insensitive and an empty keyword matches
/// every line of the level. Lines come back whole, in file order.
///
/// # Errors
///
/// Returns [`Error::InvalidLevel`] for an unknown level token (before any
/// I/O happens) and [`Error::Io`] when the file cannot be opened or read.
pub fn filter_logs(path: impl AsRef<Path>, level: &str, keyword: &str) -> Result<Vec<String>> {
    let level = level.parse::<Level>()?;
    let needle = format!("[{}]", level.as_upper());
    let keyword = keyword.to_lowercase();

    let mut matches = Vec::new();
    for line in read_lines(path.as_ref())? {
        let line = line.map_err(|e| Error::Io("error reading log file", e))?;
        if line.contains(&needle) && line.to_lowercase().contains(&keyword) {
            matches.push(line);
        }
    }

    Ok(matches)
}

fn read_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::Io("error opening log file", e))?;
    Ok(BufReader::new(file).lines())
}
