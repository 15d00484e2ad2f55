//! Print the distinct results of a table.

use anyhow::{Context, Result};
use clap::Parser;
use table_content::TableContent;

/// Print the distinct results of a table
#[derive(Parser, Debug)]
pub struct Results {
    /// Table name (file name without extension)
    pub table: String,
}

impl Results {
    pub fn execute(self, content: &TableContent) -> Result<()> {
        let results = content
            .selector()
            .select_all_results(&self.table)
            .with_context(|| format!("failed to load table '{}'", self.table))?;

        for value in results {
            println!("{value}");
        }

        Ok(())
    }
}
