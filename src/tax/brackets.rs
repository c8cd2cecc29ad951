//! Year-keyed bracket tables.
//!
//! The tables are reference data for display and lookup; the withholding
//! engine applies its own fixed constants (see [`super::engine`]). Keeping
//! the rows first-class is the extension point for making the schedule
//! data-driven later.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::money::round_cents;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no bracket table registered for year {0}")]
pub struct UnknownYear(pub i32);

/// One bracket row: `[min, max)` and the aliquot applied inside it.
/// `max = None` marks the open-ended top bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
    /// Aliquot as a percentage (7.5 means 7.5%).
    pub rate: Decimal,
}

impl BaseRange {
    pub fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        BaseRange { min, max, rate }
    }

    // Comparisons work on cent precision so tables loaded from different
    // sources (literals, JSON) compare as the same schedule.
    fn key(&self) -> (Decimal, bool, Decimal, Decimal) {
        let max_rounded = self.max.map(round_cents);
        (
            round_cents(self.min),
            max_rounded.is_none(),
            max_rounded.unwrap_or(Decimal::ZERO),
            round_cents(self.rate),
        )
    }
}

impl PartialEq for BaseRange {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BaseRange {}

impl PartialOrd for BaseRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaseRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// The 2022 reference schedule; the constants the engine hardcodes.
pub fn reference_2022() -> Vec<BaseRange> {
    vec![
        BaseRange::new(dec!(0), Some(dec!(1903.99)), dec!(0)),
        BaseRange::new(dec!(1903.99), Some(dec!(2826.66)), dec!(7.5)),
        BaseRange::new(dec!(2826.66), Some(dec!(3751.06)), dec!(15)),
        BaseRange::new(dec!(3751.06), Some(dec!(4664.69)), dec!(22.5)),
        BaseRange::new(dec!(4664.69), None, dec!(27.5)),
    ]
}

/// Ordered bracket tables keyed by year.
#[derive(Debug, Default)]
pub struct BracketTable {
    tables: BTreeMap<i32, Vec<BaseRange>>,
}

impl BracketTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table pre-loaded with the 2022 reference schedule.
    pub fn with_reference() -> Self {
        let mut table = Self::new();
        table.register_table(2022, reference_2022());
        table
    }

    /// Stores (or overwrites) the bracket sequence for a year.
    ///
    /// Rows are expected to be ordered and to cover `[0, +inf)` without
    /// gaps or overlaps; that is the loader's contract, not checked here.
    pub fn register_table(&mut self, year: i32, brackets: Vec<BaseRange>) {
        self.tables.insert(year, brackets);
    }

    pub fn get_table(&self, year: i32) -> Result<&[BaseRange], UnknownYear> {
        self.tables
            .get(&year)
            .map(Vec::as_slice)
            .ok_or(UnknownYear(year))
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.tables.keys().copied()
    }
}
