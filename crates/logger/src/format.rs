//! Rendering of log records into the bracketed line layout.

use chrono::Local;

use crate::level::Level;

/// Render one record as `[timestamp] [LEVEL] message`.
///
/// The timestamp is local wall-clock time at second precision with no
/// timezone marker. The level is upper-cased here and nowhere else; the
/// scanner matches that exact casing, so every sink must render through
/// this function.
#[must_use]
pub fn format_line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{timestamp}] [{}] {message}", level.as_upper())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_upper_case_level_between_brackets() {
        let line = format_line(Level::Info, "server started");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] [INFO] server started"));
    }

    #[test]
    fn timestamp_prefix_is_fixed_width() {
        let line = format_line(Level::Debug, "x");
        // "[YYYY-MM-DD HH:MM:SS]" closes at byte 20
        assert_eq!(line.find(']'), Some(20));
        assert_eq!(&line[11..12], " ");
    }

    #[test]
    fn message_passes_through_unmodified() {
        let line = format_line(Level::Error, "MiXeD CaSe [brackets] kept");
        assert!(line.ends_with("] [ERROR] MiXeD CaSe [brackets] kept"));
    }
}
