//! Table lookup and delimited record codec shared by content loaders.
//!
//! `table-core` defines the [`TableMapper`] contract that resource-backed
//! loaders implement, the [`CachedTableMapper`] proxy that resolves each table
//! at most once, and the [`DataSelection`] codec that turns delimited row
//! values such as `Goblin@1d4` into typed records and back.
//!
//! Nothing here performs I/O; see `table-content` for file-backed mappers.
pub mod codec;
pub mod error;
pub mod mapper;
pub mod records;
pub mod roll;
pub mod selector;

pub use codec::{
    CodecError, DEFAULT_SEPARATOR, DataSelection, expect_fields, format_record, parse_field,
    parse_record,
};
pub use error::{ErrorSeverity, TableLibError};
pub use mapper::{CachedTableMapper, InMemoryTableMapper, TableError, TableMapper, TableRows};
pub use records::{RangeSelection, TypeAndAmount};
pub use roll::{Dice, Roll, RollError, SeededDice};
pub use selector::{PercentileSelector, SelectionError};
