//! Table lookup contract and its implementations.
//!
//! A [`TableMapper`] resolves a table name into its full row mapping. Real
//! mappers read from a resource store and are expensive; wrap them in a
//! [`CachedTableMapper`] so each table is resolved at most once.

mod cached;
mod memory;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use cached::CachedTableMapper;
pub use memory::InMemoryTableMapper;

use crate::error::{ErrorSeverity, TableLibError};

/// Row key to raw row value, ordered by key.
pub type TableRows = BTreeMap<i32, String>;

/// Lookup failures raised by table mappers.
///
/// Failures are never cached: calling again retries the resolution.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("table '{table}' not found")]
    NotFound { table: String },

    #[error("invalid table name '{table}'")]
    InvalidName { table: String },

    #[error("failed to read table '{table}': {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table '{table}': {message}")]
    Parse { table: String, message: String },

    #[error("table cache lock was poisoned")]
    LockPoisoned,
}

impl TableError {
    pub fn not_found(table: impl Into<String>) -> Self {
        Self::NotFound {
            table: table.into(),
        }
    }

    pub fn parse(table: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            table: table.into(),
            message: message.to_string(),
        }
    }

    /// Name of the table the failure refers to, when known.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::NotFound { table }
            | Self::InvalidName { table }
            | Self::Io { table, .. }
            | Self::Parse { table, .. } => Some(table),
            Self::LockPoisoned => None,
        }
    }
}

impl TableLibError for TableError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } | Self::Io { .. } => ErrorSeverity::Recoverable,
            Self::InvalidName { .. } | Self::Parse { .. } => ErrorSeverity::Validation,
            Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "TABLE_NOT_FOUND",
            Self::InvalidName { .. } => "TABLE_INVALID_NAME",
            Self::Io { .. } => "TABLE_IO",
            Self::Parse { .. } => "TABLE_PARSE",
            Self::LockPoisoned => "TABLE_LOCK_POISONED",
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;

/// Resolves named tables into row mappings.
///
/// Implementations must be deterministic within a process run: the same name
/// yields an equivalent mapping unless the backing resource changes. The
/// returned mapping is shared and immutable.
pub trait TableMapper: Send + Sync {
    /// Resolve all rows of `table_name`.
    fn map(&self, table_name: &str) -> Result<Arc<TableRows>>;
}

impl<M: TableMapper + ?Sized> TableMapper for Arc<M> {
    fn map(&self, table_name: &str) -> Result<Arc<TableRows>> {
        (**self).map(table_name)
    }
}

impl<M: TableMapper + ?Sized> TableMapper for &M {
    fn map(&self, table_name: &str) -> Result<Arc<TableRows>> {
        (**self).map(table_name)
    }
}

impl<M: TableMapper + ?Sized> TableMapper for Box<M> {
    fn map(&self, table_name: &str) -> Result<Arc<TableRows>> {
        (**self).map(table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classification() {
        assert!(TableError::not_found("Monsters").severity().is_recoverable());
        assert_eq!(
            TableError::parse("Monsters", "bad").severity(),
            ErrorSeverity::Validation
        );
        assert!(TableError::LockPoisoned.severity().is_internal());
        assert_eq!(TableError::not_found("Monsters").table(), Some("Monsters"));
        assert_eq!(TableError::LockPoisoned.table(), None);
    }
}
