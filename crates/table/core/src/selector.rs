//! Percentile table selection.
//!
//! A percentile table maps every roll outcome (usually 1..=100) to a row
//! value. The selector looks rows up through any [`TableMapper`], typically a
//! [`CachedTableMapper`](crate::mapper::CachedTableMapper), and can decode the
//! selected row into a typed record.

use crate::codec::{CodecError, DataSelection};
use crate::error::{ErrorSeverity, TableLibError};
use crate::mapper::{TableError, TableMapper, TableRows};
use crate::roll::Dice;

/// Errors raised while selecting from a table.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("failed to decode row of table '{table}': {source}")]
    Codec {
        table: String,
        #[source]
        source: CodecError,
    },

    #[error("roll {roll} has no row in table '{table}'")]
    RollNotInTable { table: String, roll: i32 },

    #[error("table '{table}' has no rows")]
    EmptyTable { table: String },
}

impl TableLibError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Table(e) => e.severity(),
            Self::Codec { .. } | Self::RollNotInTable { .. } | Self::EmptyTable { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Table(e) => e.error_code(),
            Self::Codec { .. } => "SELECTION_CODEC",
            Self::RollNotInTable { .. } => "SELECTION_ROLL_NOT_IN_TABLE",
            Self::EmptyTable { .. } => "SELECTION_EMPTY_TABLE",
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectionError>;

/// Selects rows from percentile tables.
pub struct PercentileSelector<M> {
    mapper: M,
}

impl<M: TableMapper> PercentileSelector<M> {
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    /// Access the underlying mapper.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Returns the row for an explicit roll.
    pub fn select_from(&self, table: &str, roll: i32) -> Result<String> {
        let rows = self.mapper.map(table)?;
        rows.get(&roll)
            .cloned()
            .ok_or_else(|| SelectionError::RollNotInTable {
                table: table.to_owned(),
                roll,
            })
    }

    /// Rolls across the table's key span and returns the matching row.
    ///
    /// Rolls landing in a gap between keys resolve to the next higher key.
    pub fn select_random_from<D: Dice + ?Sized>(&self, table: &str, dice: &D) -> Result<String> {
        let rows = self.mapper.map(table)?;
        let (first, last) = key_span(table, &rows)?;
        let roll = dice.range(first, last);
        tracing::debug!(table, roll, "percentile roll");

        rows.range(roll..)
            .next()
            .map(|(_, value)| value.clone())
            .ok_or_else(|| SelectionError::RollNotInTable {
                table: table.to_owned(),
                roll,
            })
    }

    /// Distinct row values in key order.
    pub fn select_all_results(&self, table: &str) -> Result<Vec<String>> {
        let rows = self.mapper.map(table)?;
        let mut results: Vec<String> = Vec::new();
        for value in rows.values() {
            if !results.contains(value) {
                results.push(value.clone());
            }
        }
        Ok(results)
    }

    /// [`select_from`](Self::select_from) decoded as `T`.
    pub fn select_from_as<T: DataSelection>(&self, table: &str, roll: i32) -> Result<T> {
        let raw = self.select_from(table, roll)?;
        decode_row(table, &raw)
    }

    /// [`select_random_from`](Self::select_random_from) decoded as `T`.
    pub fn select_random_as<T, D>(&self, table: &str, dice: &D) -> Result<T>
    where
        T: DataSelection,
        D: Dice + ?Sized,
    {
        let raw = self.select_random_from(table, dice)?;
        decode_row(table, &raw)
    }

    /// Every distinct result decoded as `T`.
    pub fn select_all_as<T: DataSelection>(&self, table: &str) -> Result<Vec<T>> {
        self.select_all_results(table)?
            .iter()
            .map(|raw| decode_row(table, raw))
            .collect()
    }
}

fn key_span(table: &str, rows: &TableRows) -> Result<(i32, i32)> {
    match (rows.keys().next(), rows.keys().next_back()) {
        (Some(first), Some(last)) => Ok((*first, *last)),
        _ => Err(SelectionError::EmptyTable {
            table: table.to_owned(),
        }),
    }
}

fn decode_row<T: DataSelection>(table: &str, raw: &str) -> Result<T> {
    T::parse(raw).map_err(|source| SelectionError::Codec {
        table: table.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::InMemoryTableMapper;
    use crate::records::TypeAndAmount;
    use crate::roll::SeededDice;

    fn selector() -> PercentileSelector<InMemoryTableMapper> {
        let mapper = InMemoryTableMapper::new()
            .with_table("Monsters", [(1, "Goblin@1d4"), (2, "Goblin@1d4"), (3, "Orc@2d6")])
            .with_table("Sparse", [(10, "low"), (50, "high")])
            .with_table("Broken", [(1, "Goblin")])
            .with_table("Empty", Vec::<(i32, String)>::new());
        PercentileSelector::new(mapper)
    }

    #[test]
    fn select_by_roll() {
        let selector = selector();
        assert_eq!(selector.select_from("Monsters", 3).unwrap(), "Orc@2d6");
        assert!(matches!(
            selector.select_from("Monsters", 4),
            Err(SelectionError::RollNotInTable { roll: 4, .. })
        ));
    }

    #[test]
    fn random_selection_uses_next_key_for_gaps() {
        let selector = selector();
        let dice = SeededDice::new(11);
        for _ in 0..200 {
            let value = selector.select_random_from("Sparse", &dice).unwrap();
            assert!(value == "low" || value == "high");
        }
    }

    #[test]
    fn distinct_results_keep_key_order() {
        let selector = selector();
        assert_eq!(
            selector.select_all_results("Monsters").unwrap(),
            vec!["Goblin@1d4".to_owned(), "Orc@2d6".to_owned()]
        );
    }

    #[test]
    fn typed_selection() {
        let selector = selector();
        let orc: TypeAndAmount = selector.select_from_as("Monsters", 3).unwrap();
        assert_eq!(orc.kind(), "Orc");

        let all: Vec<TypeAndAmount> = selector.select_all_as("Monsters").unwrap();
        assert_eq!(all.len(), 2);

        let random: TypeAndAmount = selector
            .select_random_as("Monsters", &SeededDice::new(5))
            .unwrap();
        assert!(random.kind() == "Goblin" || random.kind() == "Orc");
    }

    #[test]
    fn decode_failure_names_table() {
        let selector = selector();
        let err = selector
            .select_from_as::<TypeAndAmount>("Broken", 1)
            .unwrap_err();
        assert!(matches!(err, SelectionError::Codec { ref table, .. } if table == "Broken"));
    }

    #[test]
    fn empty_and_missing_tables() {
        let selector = selector();
        let dice = SeededDice::new(1);
        assert!(matches!(
            selector.select_random_from("Empty", &dice),
            Err(SelectionError::EmptyTable { .. })
        ));
        assert!(matches!(
            selector.select_from("Missing", 1),
            Err(SelectionError::Table(TableError::NotFound { .. }))
        ));
    }
}
