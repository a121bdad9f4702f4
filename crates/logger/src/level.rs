//! Log levels accepted by every component.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity label attached to every log record.
///
/// Membership is the only semantic: levels are never ranked or filtered
/// by order, so no ordering is derived. Parsing through [`FromStr`] is
/// the single validation point for level tokens; both sinks and the
/// scanner go through it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    /// Failures.
    Error,
    /// Routine events.
    Info,
    /// Diagnostic detail.
    Debug,
}

/// Error returned for a level token outside the accepted set.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl Level {
    /// Canonical token accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Info => "Info",
            Self::Debug => "Debug",
        }
    }

    /// Upper-case token rendered into log lines and matched by the scanner.
    #[must_use]
    pub const fn as_upper(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Error" => Ok(Self::Error),
            "Info" => Ok(Self::Info),
            "Debug" => Ok(Self::Debug),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_tokens_only() {
        assert_eq!("Error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Debug".parse::<Level>().unwrap(), Level::Debug);
    }

    #[test]
    fn rejects_case_variants_and_unknown_tokens() {
        for token in ["error", "INFO", "debug", "Warn", "Bro", ""] {
            let err = token.parse::<Level>().unwrap_err();
            assert_eq!(err, ParseLevelError(token.to_string()));
        }
    }

    #[test]
    fn parse_error_carries_the_offending_token() {
        let err = "Bro".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level: Bro");
    }

    #[test]
    fn upper_case_tokens_match_the_line_layout() {
        assert_eq!(Level::Error.as_upper(), "ERROR");
        assert_eq!(Level::Info.as_upper(), "INFO");
        assert_eq!(Level::Debug.as_upper(), "DEBUG");
    }
}
