//! TableMapper backed by table files under a resource root.

use std::sync::Arc;

use table_core::{TableError, TableMapper, TableRows};

use crate::loaders::{LoadResult, PercentileTableLoader, TablesConfig};

/// Reads `<root>/<name>.<ext>` on every call.
///
/// Each call hits the file system; wrap it in a
/// [`CachedTableMapper`](table_core::CachedTableMapper) to resolve each table
/// once.
#[derive(Debug, Clone)]
pub struct FileTableMapper {
    config: TablesConfig,
}

impl FileTableMapper {
    pub fn new(config: TablesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TablesConfig {
        &self.config
    }

    /// Rejects names that are empty or would resolve outside the resource
    /// root.
    fn validate_name(table_name: &str) -> LoadResult<()> {
        let escapes_root = table_name.contains(['/', '\\']) || table_name.contains("..");
        if table_name.trim().is_empty() || escapes_root {
            return Err(TableError::InvalidName {
                table: table_name.to_owned(),
            });
        }
        Ok(())
    }
}

impl TableMapper for FileTableMapper {
    fn map(&self, table_name: &str) -> LoadResult<Arc<TableRows>> {
        Self::validate_name(table_name)?;

        let path = self.config.table_path(table_name);
        tracing::debug!(table = table_name, path = %path.display(), "loading table");

        let rows = PercentileTableLoader::load(table_name, &path, self.config.format)?;
        tracing::debug!(table = table_name, rows = rows.len(), "table loaded");

        Ok(Arc::new(rows))
    }
}
