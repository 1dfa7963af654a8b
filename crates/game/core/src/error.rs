//! Common error infrastructure for mahjong-core.
//!
//! This module provides the shared classification trait used across all error
//! types in the crate, plus [`SeedError`], the only failure the deterministic
//! rules can produce.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure is a typed variant with the offending data
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Soft lookups**: Unknown tiles and unknown rule ids are not errors; they
//!   resolve to documented fallbacks instead

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on retry
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or different input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: transaction hash too short, non-hex seed character
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all mahjong-core errors.
///
/// Provides a uniform interface for error classification across the crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization in logs and for tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures while deriving a [`Seed`](crate::Seed) from a hash or a literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// Fewer than ten hex characters remained after stripping the `0x` prefix.
    #[error("seed needs 10 hex characters, found {found}")]
    InvalidSeedLength { found: usize },

    /// A character in the seed window is not a hex digit.
    #[error("invalid seed character {ch:?} at position {index}")]
    InvalidCharacter { index: usize, ch: char },
}

impl GameError for SeedError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSeedLength { .. } => "INVALID_SEED_LENGTH",
            Self::InvalidCharacter { .. } => "INVALID_SEED_CHARACTER",
        }
    }
}
