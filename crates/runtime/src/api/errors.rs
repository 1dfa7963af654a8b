//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories and seed extraction so clients can bubble
//! them up with consistent context.
use thiserror::Error;

use mahjong_core::{ErrorSeverity, GameError, SeedError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("transaction hash rejected: {0}")]
    Seed(#[from] SeedError),
}

impl GameError for RuntimeError {
    /// Seed errors keep their own classification. Storage I/O may succeed on
    /// retry; a poisoned lock means the process state is unusable.
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(RepositoryError::Io(_)) => ErrorSeverity::Recoverable,
            Self::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Fatal,
            Self::Repository(_) => ErrorSeverity::Internal,
            Self::Seed(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(RepositoryError::Io(_)) => "STORE_IO",
            Self::Repository(RepositoryError::LockPoisoned) => "STORE_LOCK_POISONED",
            Self::Repository(RepositoryError::Json(_)) => "STORE_ENCODING",
            Self::Repository(RepositoryError::InvalidKey(_)) => "STORE_INVALID_KEY",
            Self::Seed(err) => err.error_code(),
        }
    }
}
