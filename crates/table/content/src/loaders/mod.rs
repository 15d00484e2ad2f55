//! Content loaders for reading table data from a resource root.
//!
//! [`FileTableMapper`] resolves `<root>/<name>.<ext>` through
//! [`PercentileTableLoader`]; [`TableContent`] wires it behind the caching
//! proxy.

pub mod config;
pub mod factory;
pub mod file_mapper;
pub mod percentile;

pub use config::{TableFormat, TablesConfig};
pub use factory::TableContent;
pub use file_mapper::FileTableMapper;
pub use percentile::{PercentileEntry, PercentileTableLoader};

use std::io::ErrorKind;
use std::path::Path;

use table_core::TableError;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, TableError>;

/// Helper function to read a table resource.
///
/// A missing file is reported as [`TableError::NotFound`] so callers can tell
/// it apart from other I/O failures.
pub(crate) fn read_file(table: &str, path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TableError::not_found(table),
        _ => TableError::Io {
            table: table.to_owned(),
            source: e,
        },
    })
}
