//! Roll on a table.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use table_content::TableContent;
use table_core::SeededDice;

/// Roll on a table and print the selected row
#[derive(Parser, Debug)]
pub struct RollOn {
    /// Table name (file name without extension)
    pub table: String,

    /// Seed for reproducible rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of rolls
    #[arg(short = 'n', long, default_value_t = 1)]
    pub times: u32,
}

impl RollOn {
    pub fn execute(self, content: &TableContent) -> Result<()> {
        let dice = match self.seed {
            Some(seed) => SeededDice::new(seed),
            None => SeededDice::from_entropy(),
        };

        for _ in 0..self.times.max(1) {
            let value = content
                .selector()
                .select_random_from(&self.table, &dice)
                .with_context(|| format!("failed to roll on table '{}'", self.table))?;
            println!("{} {}", style("→").green().bold(), value);
        }

        Ok(())
    }
}
