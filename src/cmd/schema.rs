//! Schema command - print expected input formats

use crate::declaration::Declaration;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or csv-header
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the declaration format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(Declaration);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", CSV_COLUMNS.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Input Format");
        println!("================");
        println!();
        for (name, required, description) in CSV_FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:12} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Monetary values use a dot decimal separator (e.g. 2500.00)");
        Ok(())
    }
}

const CSV_COLUMNS: &[&str] = &["kind", "category", "description", "value", "name"];

const CSV_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("kind", true, "income or deduction"),
    (
        "category",
        false,
        "Deduction category: official_pension, dependent, food_pension, other",
    ),
    (
        "description",
        false,
        "Entry description (required for incomes, official_pension and other)",
    ),
    (
        "value",
        false,
        "Monetary amount (required except for dependent deductions)",
    ),
    ("name", false, "Dependent name (required for dependent deductions)"),
];
