//! Common error infrastructure for table-core.
//!
//! Domain-specific errors (`TableError`, `CodecError`, `RollError`,
//! `SelectionError`) live next to the operations that raise them. This module
//! only provides the shared severity classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same call may succeed later (e.g. a table file that
///   was missing has since been written)
/// - **Validation**: malformed input that will fail again unless it changes
/// - **Internal**: a broken invariant inside the library
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retrying the same call may succeed.
    ///
    /// Examples: table resource not found, transient I/O failure
    Recoverable,

    /// Invalid input, retrying without changes will fail again.
    ///
    /// Examples: wrong field count, non-numeric field, malformed table file
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: poisoned cache lock
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all table-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait TableLibError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
