//! In-memory TableMapper implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Result, TableError, TableMapper, TableRows};

/// Serves tables from a fixed in-memory set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableMapper {
    tables: HashMap<String, Arc<TableRows>>,
}

impl InMemoryTableMapper {
    /// Create a new empty mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table.
    pub fn with_table<I, S>(mut self, name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        self.insert(name, rows);
        self
    }

    /// Add (or replace) a table in place.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, rows: I)
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        let rows: TableRows = rows.into_iter().map(|(k, v)| (k, v.into())).collect();
        self.tables.insert(name.into(), Arc::new(rows));
    }

    /// Names of all tables held by this mapper, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TableMapper for InMemoryTableMapper {
    fn map(&self, table_name: &str) -> Result<Arc<TableRows>> {
        self.tables
            .get(table_name)
            .cloned()
            .ok_or_else(|| TableError::not_found(table_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_known_tables() {
        let mapper = InMemoryTableMapper::new().with_table("Monsters", [(1, "Goblin@1d4")]);
        let rows = mapper.map("Monsters").unwrap();
        assert_eq!(rows.get(&1).map(String::as_str), Some("Goblin@1d4"));
        assert_eq!(mapper.table_names(), vec!["Monsters"]);
    }

    #[test]
    fn unknown_table_is_not_found() {
        let mapper = InMemoryTableMapper::new();
        assert!(matches!(
            mapper.map("Nope"),
            Err(TableError::NotFound { table }) if table == "Nope"
        ));
    }
}
