use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to whole cents.
///
/// Half-up (`MidpointAwayFromZero`) is the convention used everywhere in
/// this crate; withholding amounts are quoted to the cent.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {:.2}", amount)
}

pub fn format_brl_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-R$ {:.2}", amount.abs())
    } else {
        format!("R$ {:.2}", amount)
    }
}

pub fn format_pct(rate: Decimal) -> String {
    format!("{:.2}%", rate)
}
