//! Declaration input formats (JSON and CSV) and their registration into a
//! filing session.
//!
//! This is the only place a deduction category exists as a string; past
//! the parse boundary it is always the [`DeductionCategory`] enum.

use crate::deduction::{DeductionCategory, DeductionEntry, UnknownCategory};
use crate::tax::Irrf;
use crate::validation::ValidationError;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeclarationError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("unknown record kind: {0} (expected income or deduction)")]
    UnknownKind(String),
    #[error("{category} record is missing the {field} field")]
    MissingField {
        category: DeductionCategory,
        field: &'static str,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Root of the JSON input format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Declaration {
    /// Tax period the declaration refers to (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub incomes: Vec<IncomeRecord>,
    #[serde(default)]
    pub deductions: Vec<DeductionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IncomeRecord {
    #[schemars(with = "String")]
    pub value: Decimal,
    pub description: String,
}

/// One deduction record; which fields are required depends on the category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeductionRecord {
    /// `official_pension`, `dependent`, `food_pension` or `other`
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub value: Option<Decimal>,
    /// Dependent name; required for the `dependent` category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeductionRecord {
    fn description(&self, category: DeductionCategory) -> Result<&str, DeclarationError> {
        self.description
            .as_deref()
            .ok_or(DeclarationError::MissingField {
                category,
                field: "description",
            })
    }

    fn value(&self, category: DeductionCategory) -> Result<Decimal, DeclarationError> {
        self.value.ok_or(DeclarationError::MissingField {
            category,
            field: "value",
        })
    }

    fn to_entry(&self) -> Result<DeductionEntry, DeclarationError> {
        let category: DeductionCategory = self.category.parse()?;
        let entry = match category {
            DeductionCategory::OfficialPension => DeductionEntry::OfficialPension {
                description: self.description(category)?.to_string(),
                value: self.value(category)?,
            },
            // An absent name registers as blank so the ledger raises the
            // same BlankName a blank form field would.
            DeductionCategory::Dependent => {
                DeductionEntry::Dependents(vec![self.name.clone().unwrap_or_default()])
            }
            DeductionCategory::FoodPension => {
                DeductionEntry::FoodPensions(vec![self.value(category)?])
            }
            DeductionCategory::Other => DeductionEntry::Other {
                description: self.description(category)?.to_string(),
                value: self.value(category)?,
            },
        };
        Ok(entry)
    }
}

/// Flat CSV row: `kind,category,description,value,name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvRecord {
    kind: String,
    category: Option<String>,
    description: Option<String>,
    value: Option<Decimal>,
    name: Option<String>,
}

impl Declaration {
    pub fn from_json_reader(reader: impl Read) -> anyhow::Result<Declaration> {
        let declaration = serde_json::from_reader(reader)?;
        Ok(declaration)
    }

    pub fn from_csv_reader(reader: impl Read) -> anyhow::Result<Declaration> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut declaration = Declaration::default();

        for record in rdr.deserialize() {
            let record: CsvRecord = record?;
            match record.kind.to_lowercase().as_str() {
                "income" => declaration.incomes.push(IncomeRecord {
                    value: record.value.unwrap_or(Decimal::ZERO),
                    description: record.description.unwrap_or_default(),
                }),
                "deduction" => declaration.deductions.push(DeductionRecord {
                    category: record.category.unwrap_or_default(),
                    description: record.description,
                    value: record.value,
                    name: record.name,
                }),
                other => return Err(DeclarationError::UnknownKind(other.to_string()).into()),
            }
        }
        log::info!(
            "read {} income and {} deduction records",
            declaration.incomes.len(),
            declaration.deductions.len()
        );
        Ok(declaration)
    }

    /// Registers every record into the session. Stops at the first invalid
    /// record; everything registered before it remains (per-record calls
    /// are atomic, the file-level replay is not).
    pub fn register_into(&self, irrf: &mut Irrf) -> Result<(), DeclarationError> {
        for income in &self.incomes {
            irrf.register_income(income.value, &income.description)?;
        }
        for record in &self.deductions {
            irrf.register_deduction(record.to_entry()?)?;
        }
        Ok(())
    }
}
