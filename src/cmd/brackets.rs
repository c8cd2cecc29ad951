//! Brackets command - display a year's bracket table

use crate::money::{format_brl, format_pct};
use crate::tax::{BaseRange, BracketTable};
use clap::Args;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BracketsCommand {
    /// Year of the bracket table
    #[arg(short, long, default_value_t = 2022)]
    year: i32,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Tabled)]
struct BracketRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

impl From<&BaseRange> for BracketRow {
    fn from(range: &BaseRange) -> Self {
        BracketRow {
            from: format_brl(range.min),
            to: range.max.map_or("-".to_string(), format_brl),
            rate: format_pct(range.rate),
        }
    }
}

#[derive(Debug, Serialize)]
struct BracketsOutput<'a> {
    year: i32,
    brackets: &'a [BaseRange],
}

impl BracketsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let table = BracketTable::with_reference();
        let brackets = table.get_table(self.year)?;

        if self.json {
            let output = BracketsOutput {
                year: self.year,
                brackets,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!();
        println!("IRRF BRACKET TABLE ({})", self.year);
        let rows: Vec<BracketRow> = brackets.iter().map(BracketRow::from).collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
        Ok(())
    }
}
