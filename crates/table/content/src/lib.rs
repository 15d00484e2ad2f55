//! Resource-backed table loaders.
//!
//! This crate reads percentile tables from a caller-supplied resource root and
//! exposes them through the [`table_core::TableMapper`] contract:
//! - Percentile tables (data-driven via TOML or RON)
//! - Resource root and format configuration (explicit or from environment)
//! - Wiring of file mapper, caching proxy and selector
//!
//! Table rows are raw delimited strings; decoding them into records is left to
//! [`table_core::DataSelection`].

pub mod loaders;

pub use loaders::{
    FileTableMapper, PercentileEntry, PercentileTableLoader, TableContent, TableFormat,
    TablesConfig,
};
