//! The withholding computation itself.
//!
//! `tax = basis * aliquot - deductible` for the tier the basis falls in;
//! the per-tier deductible keeps the piecewise function continuous at the
//! boundaries. Constants are the 2022 reference schedule and must match
//! [`super::brackets::reference_2022`] row for row.

use crate::deduction::{DeductionEntry, DeductionLedger};
use crate::income::IncomeLedger;
use crate::money::round_cents;
use crate::validation::ValidationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("effective rate is undefined when no income has been registered")]
pub struct ZeroIncomeError;

/// Raw progressive tax for a calculation basis, before rounding.
///
/// Tiers are left-closed, right-open; the top tier is open-ended. A basis
/// below the exempt ceiling (including any negative basis) owes nothing.
fn progressive_tax(basis: Decimal) -> Decimal {
    let (rate, deductible) = if basis < dec!(1903.99) {
        return Decimal::ZERO;
    } else if basis < dec!(2826.66) {
        (dec!(0.075), dec!(142.80))
    } else if basis < dec!(3751.06) {
        (dec!(0.15), dec!(354.80))
    } else if basis < dec!(4664.69) {
        (dec!(0.225), dec!(636.13))
    } else {
        (dec!(0.275), dec!(869.36))
    };
    log::debug!("basis {basis} taxed at {rate} minus {deductible}");
    basis * rate - deductible
}

/// One filing session: the two ledgers plus the computation over them.
#[derive(Debug, Default)]
pub struct Irrf {
    incomes: IncomeLedger,
    deductions: DeductionLedger,
}

impl Irrf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_income(
        &mut self,
        value: Decimal,
        description: &str,
    ) -> Result<(), ValidationError> {
        self.incomes.register_income(value, description)
    }

    pub fn register_deduction(&mut self, entry: DeductionEntry) -> Result<(), ValidationError> {
        self.deductions.register(entry)
    }

    pub fn incomes(&self) -> &IncomeLedger {
        &self.incomes
    }

    pub fn deductions(&self) -> &DeductionLedger {
        &self.deductions
    }

    pub fn total_income(&self) -> Decimal {
        self.incomes.total_income()
    }

    pub fn all_deductions(&self) -> Decimal {
        self.deductions.all_deductions()
    }

    /// Taxable basis; negative when deductions exceed income. Not clamped:
    /// a negative basis falls below the exempt ceiling and owes nothing.
    pub fn calculation_basis(&self) -> Decimal {
        self.total_income() - self.all_deductions()
    }

    /// Withholding due, rounded half-up to the cent.
    ///
    /// The raw formula dips a fraction of a cent below zero just above the
    /// exempt ceiling (7.5% * 1903.99 - 142.80 = -0.00075); withholding is
    /// floored at zero there.
    pub fn compute_tax(&self) -> Decimal {
        round_cents(progressive_tax(self.calculation_basis())).max(Decimal::ZERO)
    }

    /// Tax due as a percentage of total income, rounded to two decimals.
    pub fn effective_rate(&self) -> Result<Decimal, ZeroIncomeError> {
        let total_income = self.total_income();
        if total_income == Decimal::ZERO {
            return Err(ZeroIncomeError);
        }
        Ok(round_cents(self.compute_tax() / total_income * dec!(100)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deduction::DEPENDENT_DEDUCTION;

    fn session_with_basis(basis: Decimal) -> Irrf {
        let mut irrf = Irrf::new();
        irrf.register_income(basis, "Salary").unwrap();
        irrf
    }

    fn tax_for_basis(basis: Decimal) -> Decimal {
        session_with_basis(basis).compute_tax()
    }

    #[test]
    fn exempt_below_first_threshold() {
        assert_eq!(tax_for_basis(dec!(100)), dec!(0));
        assert_eq!(tax_for_basis(dec!(1903.98)), dec!(0));
    }

    #[test]
    fn first_boundary_rounds_to_zero() {
        // 7.5% * 1903.99 - 142.80 = -0.00075, floored at zero.
        assert_eq!(tax_for_basis(dec!(1903.99)), dec!(0));
    }

    #[test]
    fn tier_boundaries_are_continuous_to_the_cent() {
        // Last cent of the 7.5% tier and first basis of the 15% tier.
        assert_eq!(tax_for_basis(dec!(2826.65)), dec!(69.20));
        assert_eq!(tax_for_basis(dec!(2826.66)), dec!(69.20));

        // 15% -> 22.5%.
        assert_eq!(tax_for_basis(dec!(3751.05)), dec!(207.86));
        assert_eq!(tax_for_basis(dec!(3751.06)), dec!(207.86));

        // 22.5% -> 27.5%: 1049.553 - 636.13 vs 1282.78975 - 869.36.
        assert_eq!(tax_for_basis(dec!(4664.68)), dec!(413.42));
        assert_eq!(tax_for_basis(dec!(4664.69)), dec!(413.43));
    }

    #[test]
    fn top_tier_is_open_ended() {
        // 27.5% * 10000 - 869.36
        assert_eq!(tax_for_basis(dec!(10000)), dec!(1880.64));
    }

    #[test]
    fn dependent_deduction_lowers_the_basis() {
        let mut irrf = Irrf::new();
        irrf.register_income(dec!(2500), "Salary").unwrap();
        irrf.register_deduction(DeductionEntry::Dependents(vec!["Joao".to_string()]))
            .unwrap();

        assert_eq!(irrf.all_deductions(), DEPENDENT_DEDUCTION);
        assert_eq!(irrf.calculation_basis(), dec!(2310.41));
        // 7.5% * 2310.41 - 142.80 = 30.48075
        assert_eq!(irrf.compute_tax(), dec!(30.48));
        assert_eq!(irrf.effective_rate(), Ok(dec!(1.22)));
    }

    #[test]
    fn basis_may_go_negative_and_owes_nothing() {
        let mut irrf = Irrf::new();
        irrf.register_income(dec!(1000), "Salary").unwrap();
        irrf.register_deduction(DeductionEntry::Other {
            description: "Previdencia privada".to_string(),
            value: dec!(1500),
        })
        .unwrap();

        assert_eq!(irrf.calculation_basis(), dec!(-500));
        assert_eq!(irrf.compute_tax(), dec!(0));
    }

    #[test]
    fn effective_rate_requires_income() {
        let irrf = Irrf::new();
        assert_eq!(irrf.effective_rate(), Err(ZeroIncomeError));
    }

    #[test]
    fn computation_is_idempotent() {
        let mut irrf = Irrf::new();
        irrf.register_income(dec!(5000), "Salary").unwrap();
        irrf.register_deduction(DeductionEntry::FoodPensions(vec![dec!(200)]))
            .unwrap();

        let first = irrf.compute_tax();
        assert_eq!(irrf.compute_tax(), first);
        assert_eq!(irrf.effective_rate(), irrf.effective_rate());
    }

    #[test]
    fn registration_order_does_not_change_the_result() {
        let mut a = Irrf::new();
        a.register_income(dec!(3000), "Salary").unwrap();
        a.register_income(dec!(1200), "Rent").unwrap();

        let mut b = Irrf::new();
        b.register_income(dec!(1200), "Rent").unwrap();
        b.register_income(dec!(3000), "Salary").unwrap();

        assert_eq!(a.compute_tax(), b.compute_tax());
        assert_eq!(a.effective_rate(), b.effective_rate());
    }
}
