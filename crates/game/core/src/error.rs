//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (`GridError`, `SpawnError`, `ProfileError`,
//! `ModifierError`) live next to the types they validate. This module only
//! provides the shared classification used by callers to decide between
//! falling back and failing loudly.
//!
//! Out-of-bounds geometry queries and exhausted movement options are *not*
//! errors: they resolve to blocking terrain and to a wait action respectively.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller can retry or choose another action.
    Recoverable,

    /// Malformed input or data; must be rejected, never defaulted.
    Validation,

    /// Unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: std::fmt::Display + std::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
