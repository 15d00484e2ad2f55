//! Print every row of a table.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use table_content::TableContent;
use table_core::TableMapper;

/// Print every row of a table
#[derive(Parser, Debug)]
pub struct Show {
    /// Table name (file name without extension)
    pub table: String,
}

impl Show {
    pub fn execute(self, content: &TableContent) -> Result<()> {
        let rows = content
            .tables()
            .map(&self.table)
            .with_context(|| format!("failed to load table '{}'", self.table))?;

        println!(
            "{} {} ({} rows)",
            style("Table").bold(),
            style(&self.table).cyan(),
            rows.len()
        );
        for (key, value) in rows.iter() {
            println!("{:>6}  {}", style(key).dim(), value);
        }

        Ok(())
    }
}
