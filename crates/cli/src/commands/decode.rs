//! Decode a row as a type-and-amount record.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use table_content::TableContent;
use table_core::{SeededDice, TypeAndAmount};

/// Decode a row as a type-and-amount record
#[derive(Parser, Debug)]
pub struct Decode {
    /// Table name (file name without extension)
    pub table: String,

    /// Row key to decode
    pub key: i32,

    /// Seed used to sample the amount
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Decode {
    pub fn execute(self, content: &TableContent) -> Result<()> {
        let record: TypeAndAmount = content
            .selector()
            .select_from_as(&self.table, self.key)
            .with_context(|| format!("failed to decode row {} of '{}'", self.key, self.table))?;

        let dice = match self.seed {
            Some(seed) => SeededDice::new(seed),
            None => SeededDice::from_entropy(),
        };
        let (min, max) = record.amount_range();

        println!("{:>8} {}", style("Type").bold(), style(record.kind()).cyan());
        println!("{:>8} {}", style("Roll").bold(), record.roll());
        println!("{:>8} {}..={}", style("Range").bold(), min, max);
        println!("{:>8} {}", style("Amount").bold(), record.amount(&dice));

        Ok(())
    }
}
