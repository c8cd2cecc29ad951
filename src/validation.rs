//! Input validation shared by every entity constructor.

use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("value must be a positive amount, got {value}")]
    InvalidAmount { value: Decimal },
    #[error("description must be filled")]
    BlankDescription,
    #[error("dependent name must be filled")]
    BlankName,
}

/// A monetary amount must be strictly positive; zero is as invalid as a
/// negative value for both incomes and deductions.
pub fn validate_amount(value: Decimal) -> Result<Decimal, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount { value });
    }
    Ok(value)
}

pub fn validate_description(text: &str) -> Result<&str, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::BlankDescription);
    }
    Ok(text)
}

/// Dependent deductions require a name; everything else carries none.
/// The emptiness check is untrimmed, matching the statutory form field.
pub fn validate_dependent_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ValidationError::BlankName),
    }
}
