pub mod brackets;
pub mod engine;

pub use brackets::{BaseRange, BracketTable, UnknownYear};
pub use engine::{Irrf, ZeroIncomeError};
