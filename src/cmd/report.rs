//! Report command - withholding summary for a declaration file

use crate::cmd::read_declaration;
use crate::money::{format_brl, format_brl_signed, format_pct};
use crate::tax::Irrf;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// JSON or CSV declaration file (or stdin with "-")
    #[arg(short, long)]
    declaration: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Report data for JSON output
#[derive(Debug, Serialize)]
struct ReportData {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
    income_count: usize,
    total_income: String,
    deductions: DeductionTotals,
    calculation_basis: String,
    tax_due: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_rate_pct: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeductionTotals {
    official_pension: String,
    dependents: String,
    food_pension: String,
    other: String,
    total: String,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let declaration = read_declaration(&self.declaration)?;
        let mut irrf = Irrf::new();
        declaration.register_into(&mut irrf)?;

        log::info!(
            "registered {} incomes and {} deductions",
            irrf.incomes().declared_incomes().len(),
            irrf.deductions().declared_deductions().len()
        );

        if self.json {
            self.print_json(&irrf, declaration.year)
        } else {
            self.print_report(&irrf, declaration.year);
            Ok(())
        }
    }

    fn print_report(&self, irrf: &Irrf, year: Option<i32>) {
        let deductions = irrf.deductions();

        println!();
        match year {
            Some(year) => println!("WITHHOLDING REPORT ({} declaration, 2022 schedule)", year),
            None => println!("WITHHOLDING REPORT (2022 schedule)"),
        }
        println!();

        println!("INCOME");
        println!("  Declared entries: {}", irrf.incomes().declared_incomes().len());
        println!("  Total income: {}", format_brl(irrf.total_income()));
        println!();

        println!("DEDUCTIONS");
        println!(
            "  Official pension: {}",
            format_brl(deductions.total_official_pension())
        );
        println!(
            "  Dependents: {}",
            format_brl(deductions.total_dependent_deductions())
        );
        println!(
            "  Food pension: {}",
            format_brl(deductions.total_food_pension())
        );
        println!(
            "  Other: {}",
            format_brl(deductions.total_other_deductions())
        );
        println!("  Total deductions: {}", format_brl(irrf.all_deductions()));
        println!();

        println!(
            "Calculation basis: {}",
            format_brl_signed(irrf.calculation_basis())
        );
        println!("IRRF due: {}", format_brl(irrf.compute_tax()));
        match irrf.effective_rate() {
            Ok(rate) => println!("Effective rate: {}", format_pct(rate)),
            Err(_) => println!("Effective rate: n/a (no income declared)"),
        }
        println!();
    }

    fn print_json(&self, irrf: &Irrf, year: Option<i32>) -> anyhow::Result<()> {
        let deductions = irrf.deductions();
        let data = ReportData {
            year,
            income_count: irrf.incomes().declared_incomes().len(),
            total_income: format!("{:.2}", irrf.total_income()),
            deductions: DeductionTotals {
                official_pension: format!("{:.2}", deductions.total_official_pension()),
                dependents: format!("{:.2}", deductions.total_dependent_deductions()),
                food_pension: format!("{:.2}", deductions.total_food_pension()),
                other: format!("{:.2}", deductions.total_other_deductions()),
                total: format!("{:.2}", irrf.all_deductions()),
            },
            calculation_basis: format!("{:.2}", irrf.calculation_basis()),
            tax_due: format!("{:.2}", irrf.compute_tax()),
            effective_rate_pct: irrf.effective_rate().ok().map(|rate| format!("{:.2}", rate)),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
