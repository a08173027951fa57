//! Error types for the simulation core and its collaborators.
//!
//! Only configuration problems are fatal, and only at startup.  Score-file
//! trouble is logged and masked with defaults by the caller, and a stale
//! projectile index is a caller bug surfaced as a value.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// Filesystem access failed.
    Io {
        /// What was being attempted, e.g. "reading score file".
        context: String,
        source: io::Error,
    },

    /// A config file exists but could not be parsed.
    Config { path: PathBuf, message: String },

    /// `revive_projectile` was handed an index that is not in flight.
    InvalidProjectileIndex { index: usize, in_flight: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::Config { path, message } => {
                write!(f, "invalid config file {}: {message}", path.display())
            }
            Self::InvalidProjectileIndex { index, in_flight } => write!(
                f,
                "projectile index {index} out of range ({in_flight} in flight)"
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl GameError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
