//! Declared incomes and their running total.

use crate::validation::{validate_amount, validate_description, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;

/// A single declared income entry. Immutable once constructed.
///
/// Field order matters for the derived ordering: incomes sort by value
/// first, description as tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Income {
    value: Decimal,
    description: String,
}

impl Income {
    pub fn new(value: Decimal, description: &str) -> Result<Self, ValidationError> {
        let value = validate_amount(value)?;
        let description = validate_description(description)?;
        Ok(Income {
            value,
            description: description.to_string(),
        })
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Owns the declared incomes for a filing session.
///
/// The backing vector is private: callers may only append through
/// [`register_income`](IncomeLedger::register_income) and read through the
/// slice view, so the declared list cannot be replaced or reordered.
#[derive(Debug, Default)]
pub struct IncomeLedger {
    declared: Vec<Income>,
    total: Decimal,
}

impl IncomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores one income, updating the running total.
    /// On error nothing is stored.
    pub fn register_income(
        &mut self,
        value: Decimal,
        description: &str,
    ) -> Result<(), ValidationError> {
        let income = Income::new(value, description)?;
        self.total += income.value();
        self.declared.push(income);
        Ok(())
    }

    /// Declared incomes in registration order.
    pub fn declared_incomes(&self) -> &[Income] {
        &self.declared
    }

    /// Running total; always the exact sum of the declared values.
    pub fn total_income(&self) -> Decimal {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn income_constructor_keeps_fields() {
        let income = Income::new(dec!(2500), "Salary").unwrap();
        assert_eq!(income.value(), dec!(2500));
        assert_eq!(income.description(), "Salary");
    }

    #[test]
    fn income_rejects_non_positive_value() {
        assert_eq!(
            Income::new(dec!(0), "Salary"),
            Err(ValidationError::InvalidAmount { value: dec!(0) })
        );
        assert_eq!(
            Income::new(dec!(-1500), "Rent"),
            Err(ValidationError::InvalidAmount { value: dec!(-1500) })
        );
    }

    #[test]
    fn income_rejects_blank_description() {
        assert_eq!(
            Income::new(dec!(1000), "  "),
            Err(ValidationError::BlankDescription)
        );
    }

    #[test]
    fn incomes_order_by_value_then_description() {
        let small = Income::new(dec!(300), "Interest on equity").unwrap();
        let large = Income::new(dec!(1500), "Rent income").unwrap();
        assert!(small < large);

        let a = Income::new(dec!(1000), "A").unwrap();
        let b = Income::new(dec!(1000), "B").unwrap();
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn register_income_accumulates_total() {
        let mut ledger = IncomeLedger::new();
        ledger.register_income(dec!(1000), "Weekly salary").unwrap();
        ledger
            .register_income(dec!(300), "Interest on equity")
            .unwrap();
        ledger.register_income(dec!(1500), "Rent income").unwrap();

        assert_eq!(ledger.total_income(), dec!(2800));
        assert_eq!(ledger.declared_incomes().len(), 3);
    }

    #[test]
    fn total_matches_sum_regardless_of_order() {
        let mut forward = IncomeLedger::new();
        forward.register_income(dec!(1000), "Salary").unwrap();
        forward.register_income(dec!(300), "Interest").unwrap();

        let mut reverse = IncomeLedger::new();
        reverse.register_income(dec!(300), "Interest").unwrap();
        reverse.register_income(dec!(1000), "Salary").unwrap();

        assert_eq!(forward.total_income(), reverse.total_income());

        let sum: Decimal = forward.declared_incomes().iter().map(Income::value).sum();
        assert_eq!(forward.total_income(), sum);
    }

    #[test]
    fn failed_registration_leaves_ledger_untouched() {
        let mut ledger = IncomeLedger::new();
        ledger.register_income(dec!(1000), "Salary").unwrap();

        assert!(ledger.register_income(dec!(-5), "Broken").is_err());
        assert!(ledger.register_income(dec!(100), "").is_err());

        assert_eq!(ledger.declared_incomes().len(), 1);
        assert_eq!(ledger.total_income(), dec!(1000));
    }

    #[test]
    fn declared_incomes_preserve_insertion_order() {
        let mut ledger = IncomeLedger::new();
        ledger.register_income(dec!(1500), "Rent").unwrap();
        ledger.register_income(dec!(25), "Nubank Interest").unwrap();

        let descriptions: Vec<_> = ledger
            .declared_incomes()
            .iter()
            .map(Income::description)
            .collect();
        assert_eq!(descriptions, vec!["Rent", "Nubank Interest"]);
    }
}
