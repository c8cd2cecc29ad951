//! Declared deductions, grouped into the four statutory categories.

use crate::validation::{
    validate_amount, validate_dependent_name, validate_description, ValidationError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Statutory deduction per declared dependent.
pub const DEPENDENT_DEDUCTION: Decimal = dec!(189.59);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    OfficialPension,
    Dependent,
    FoodPension,
    Other,
}

impl DeductionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DeductionCategory::OfficialPension => "Official pension",
            DeductionCategory::Dependent => "Dependent",
            DeductionCategory::FoodPension => "Food pension",
            DeductionCategory::Other => "Other deductions",
        }
    }
}

impl fmt::Display for DeductionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown deduction category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for DeductionCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "official_pension" => Ok(DeductionCategory::OfficialPension),
            "dependent" => Ok(DeductionCategory::Dependent),
            "food_pension" => Ok(DeductionCategory::FoodPension),
            "other" => Ok(DeductionCategory::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// A single declared deduction. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct Deduction {
    category: DeductionCategory,
    description: String,
    value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependent_name: Option<String>,
}

impl Deduction {
    /// Builds a validated deduction. A dependent name is mandatory exactly
    /// when the category is [`DeductionCategory::Dependent`].
    pub fn new(
        category: DeductionCategory,
        description: &str,
        value: Decimal,
        dependent_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let value = validate_amount(value)?;
        let description = validate_description(description)?;
        let dependent_name = match category {
            DeductionCategory::Dependent => {
                Some(validate_dependent_name(dependent_name)?.to_string())
            }
            _ => None,
        };
        Ok(Deduction {
            category,
            description: description.to_string(),
            value,
            dependent_name,
        })
    }

    pub fn category(&self) -> DeductionCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn dependent_name(&self) -> Option<&str> {
        self.dependent_name.as_deref()
    }
}

// Two deductions are the same entry when value and description agree;
// category and dependent name do not participate, and the ordering uses
// the same key so it stays consistent with equality.
impl PartialEq for Deduction {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.description == other.description
    }
}

impl Eq for Deduction {}

impl PartialOrd for Deduction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Deduction {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.value, &self.description).cmp(&(other.value, &other.description))
    }
}

/// Registration payload, tagged by category.
///
/// Dependents and food pensions arrive as batches on the declaration form;
/// the other two categories are single description/value pairs.
#[derive(Debug, Clone)]
pub enum DeductionEntry {
    OfficialPension { description: String, value: Decimal },
    Dependents(Vec<String>),
    FoodPensions(Vec<Decimal>),
    Other { description: String, value: Decimal },
}

/// Owns the declared deductions plus the four per-category running totals.
#[derive(Debug, Default)]
pub struct DeductionLedger {
    declared: Vec<Deduction>,
    official_pension_total: Decimal,
    dependent_total: Decimal,
    food_pension_total: Decimal,
    other_total: Decimal,
}

impl DeductionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a registration to the matching category handler.
    ///
    /// A failed entry leaves the ledger untouched: batch variants validate
    /// every element before anything is stored.
    pub fn register(&mut self, entry: DeductionEntry) -> Result<(), ValidationError> {
        match entry {
            DeductionEntry::OfficialPension { description, value } => {
                self.register_official_pension(&description, value)
            }
            DeductionEntry::Dependents(names) => self.register_dependents(&names),
            DeductionEntry::FoodPensions(values) => self.register_food_pensions(&values),
            DeductionEntry::Other { description, value } => {
                self.register_other(&description, value)
            }
        }
    }

    pub fn register_official_pension(
        &mut self,
        description: &str,
        value: Decimal,
    ) -> Result<(), ValidationError> {
        let deduction =
            Deduction::new(DeductionCategory::OfficialPension, description, value, None)?;
        self.official_pension_total += deduction.value();
        self.declared.push(deduction);
        Ok(())
    }

    pub fn register_dependent(&mut self, name: &str) -> Result<(), ValidationError> {
        let deduction = Deduction::new(
            DeductionCategory::Dependent,
            "Dependent",
            DEPENDENT_DEDUCTION,
            Some(name),
        )?;
        self.dependent_total += deduction.value();
        self.declared.push(deduction);
        Ok(())
    }

    /// Registers one fixed-value deduction per dependent name.
    pub fn register_dependents(&mut self, names: &[String]) -> Result<(), ValidationError> {
        let deductions = names
            .iter()
            .map(|name| {
                Deduction::new(
                    DeductionCategory::Dependent,
                    "Dependent",
                    DEPENDENT_DEDUCTION,
                    Some(name.as_str()),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        for deduction in deductions {
            self.dependent_total += deduction.value();
            self.declared.push(deduction);
        }
        Ok(())
    }

    pub fn register_food_pension(&mut self, value: Decimal) -> Result<(), ValidationError> {
        let deduction = Deduction::new(DeductionCategory::FoodPension, "Food pension", value, None)?;
        self.food_pension_total += deduction.value();
        self.declared.push(deduction);
        Ok(())
    }

    pub fn register_food_pensions(&mut self, values: &[Decimal]) -> Result<(), ValidationError> {
        let deductions = values
            .iter()
            .map(|&value| Deduction::new(DeductionCategory::FoodPension, "Food pension", value, None))
            .collect::<Result<Vec<_>, _>>()?;
        for deduction in deductions {
            self.food_pension_total += deduction.value();
            self.declared.push(deduction);
        }
        Ok(())
    }

    pub fn register_other(
        &mut self,
        description: &str,
        value: Decimal,
    ) -> Result<(), ValidationError> {
        let deduction = Deduction::new(DeductionCategory::Other, description, value, None)?;
        self.other_total += deduction.value();
        self.declared.push(deduction);
        Ok(())
    }

    /// Declared deductions in registration order.
    pub fn declared_deductions(&self) -> &[Deduction] {
        &self.declared
    }

    pub fn total_official_pension(&self) -> Decimal {
        self.official_pension_total
    }

    pub fn total_dependent_deductions(&self) -> Decimal {
        self.dependent_total
    }

    pub fn total_food_pension(&self) -> Decimal {
        self.food_pension_total
    }

    pub fn total_other_deductions(&self) -> Decimal {
        self.other_total
    }

    /// Sum of the four category totals; always equal to the sum of every
    /// stored deduction value.
    pub fn all_deductions(&self) -> Decimal {
        self.official_pension_total
            + self.dependent_total
            + self.food_pension_total
            + self.other_total
    }
}
