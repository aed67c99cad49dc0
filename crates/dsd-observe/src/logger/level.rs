use std::{fmt, str::FromStr};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

const DEFAULT_LEVEL: &str = "warn";

/// Validated filter for the subscriber.
///
/// A bare token must name a level (`off`, `error` ... `trace`, or the log4js names
/// `fatal`, `all` and `mark`); anything else is rejected instead of being read as a
/// target name, which would silence every event. Strings containing `=` or `,` are
/// full `EnvFilter` directives (`dsd_discover=debug,warn`) and are passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(level: &str) -> Result<Self, LoggerError> {
        let norm = level.trim();
        let invalid = || LoggerError::InvalidLogLevel(level.to_string());
        if norm.is_empty() {
            return Err(invalid());
        }

        if norm.contains(['=', ',']) {
            EnvFilter::try_new(norm).map_err(|_| invalid())?;
            return Ok(Self(norm.to_string()));
        }

        let filter = match norm.to_ascii_lowercase().as_str() {
            "fatal" => LevelFilter::ERROR,
            "all" => LevelFilter::TRACE,
            "mark" => LevelFilter::INFO,
            other => LevelFilter::from_str(other).map_err(|_| invalid())?,
        };
        let name = filter
            .into_level()
            .map_or_else(|| "off".to_string(), |l| l.as_str().to_ascii_lowercase());
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL.to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
