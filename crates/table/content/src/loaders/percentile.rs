//! Percentile table loader.
//!
//! A percentile table lists inclusive key ranges and the row value each range
//! maps to. Every integer key in a range becomes its own row.
//!
//! TOML:
//! ```toml
//! [[entries]]
//! lower = 1
//! upper = 60
//! content = "Goblin@1d4"
//!
//! [[entries]]
//! lower = 61
//! upper = 100
//! content = "Orc@2d6"
//! ```
//!
//! RON:
//! ```ron
//! (
//!     entries: [
//!         (lower: 1, upper: 60, content: "Goblin@1d4"),
//!         (lower: 61, content: "Orc@2d6"),
//!     ],
//! )
//! ```
//!
//! `upper` defaults to `lower` when omitted. RON files are read with
//! `implicit_some`, so `upper` is written as a bare number.

use std::path::Path;

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use table_core::{TableError, TableRows};

use crate::loaders::{LoadResult, TableFormat, read_file};

/// Rows a single table may expand to.
const MAX_ROWS: usize = 1_000_000;

/// One range of a percentile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileEntry {
    pub lower: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<i32>,
    pub content: String,
}

impl PercentileEntry {
    pub fn new(lower: i32, upper: i32, content: impl Into<String>) -> Self {
        Self {
            lower,
            upper: Some(upper),
            content: content.into(),
        }
    }

    /// Inclusive upper bound.
    pub fn upper(&self) -> i32 {
        self.upper.unwrap_or(self.lower)
    }
}

/// Percentile table structure for TOML/RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PercentileTableFile {
    #[serde(default)]
    entries: Vec<PercentileEntry>,
}

/// Loader for percentile tables.
pub struct PercentileTableLoader;

impl PercentileTableLoader {
    /// Load and expand a percentile table file.
    ///
    /// # Arguments
    ///
    /// * `table` - Table name, used in error messages
    /// * `path` - Path to the table file
    /// * `format` - Encoding of the file
    pub fn load(table: &str, path: &Path, format: TableFormat) -> LoadResult<TableRows> {
        let content = read_file(table, path)?;
        Self::parse(table, &content, format)
    }

    /// Parse and expand a percentile table from its textual form.
    pub fn parse(table: &str, content: &str, format: TableFormat) -> LoadResult<TableRows> {
        let file: PercentileTableFile = match format {
            TableFormat::Toml => {
                toml::from_str(content).map_err(|e| TableError::parse(table, e))?
            }
            TableFormat::Ron => ron::Options::default()
                .with_default_extension(Extensions::IMPLICIT_SOME)
                .from_str(content)
                .map_err(|e| TableError::parse(table, e))?,
        };

        Self::expand(table, &file.entries)
    }

    /// Expand ranges into one row per key.
    ///
    /// # Errors
    ///
    /// Fails if a range is inverted, two ranges overlap, or the table would
    /// exceed the row limit.
    pub fn expand(table: &str, entries: &[PercentileEntry]) -> LoadResult<TableRows> {
        let mut rows = TableRows::new();

        for entry in entries {
            let (lower, upper) = (entry.lower, entry.upper());
            if lower > upper {
                return Err(TableError::parse(
                    table,
                    format!("range {lower}..={upper} is inverted"),
                ));
            }

            let span = (i64::from(upper) - i64::from(lower) + 1) as u64;
            if rows.len() as u64 + span > MAX_ROWS as u64 {
                return Err(TableError::parse(
                    table,
                    format!("table expands to more than {MAX_ROWS} rows"),
                ));
            }

            for key in lower..=upper {
                if rows.insert(key, entry.content.clone()).is_some() {
                    return Err(TableError::parse(
                        table,
                        format!("key {key} is covered by more than one entry"),
                    ));
                }
            }
        }

        Ok(rows)
    }
}
