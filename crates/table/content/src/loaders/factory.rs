//! Wiring of file mapper, caching proxy and selector.

use std::path::Path;
use std::sync::Arc;

use table_core::{CachedTableMapper, PercentileSelector};

use crate::loaders::{FileTableMapper, TablesConfig};

/// Cached, file-backed table access for one resource root.
///
/// # Directory Structure
///
/// ```text
/// resource_root/
/// ├── Monsters.toml
/// ├── Treasure.toml
/// └── Weather.toml
/// ```
///
/// The mapper and selector share one cache, so a table loaded through either
/// is never read from disk again.
pub struct TableContent {
    config: TablesConfig,
    tables: Arc<CachedTableMapper<FileTableMapper>>,
    selector: PercentileSelector<Arc<CachedTableMapper<FileTableMapper>>>,
}

impl TableContent {
    /// Build table access for `config`.
    pub fn from_config(config: TablesConfig) -> Self {
        let tables = Arc::new(CachedTableMapper::new(FileTableMapper::new(config.clone())));
        let selector = PercentileSelector::new(Arc::clone(&tables));
        Self {
            config,
            tables,
            selector,
        }
    }

    /// Build table access from `TABLES_DIR` / `TABLES_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_config(TablesConfig::from_env())
    }

    /// Cached mapper, shareable with other components.
    pub fn tables(&self) -> &Arc<CachedTableMapper<FileTableMapper>> {
        &self.tables
    }

    /// Percentile selector over the cached mapper.
    pub fn selector(&self) -> &PercentileSelector<Arc<CachedTableMapper<FileTableMapper>>> {
        &self.selector
    }

    pub fn config(&self) -> &TablesConfig {
        &self.config
    }

    /// Returns the resource root path.
    pub fn resource_root(&self) -> &Path {
        self.config.resource_root()
    }
}
