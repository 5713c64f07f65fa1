//! Guarded decimal arithmetic.
//!
//! Every aggregation site in the engine goes through these helpers so that
//! degenerate arithmetic can never poison a report. `Decimal` has no NaN or
//! infinity; the remaining degenerate case is overflow, and the contract is
//! the same as the original NaN guard: substitute zero, never fail.
//! Downstream display code assumes every figure it receives is a plain
//! finite number.

use rust_decimal::Decimal;

/// Adds two decimals, substituting zero on overflow.
pub fn safe_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::ZERO)
}

/// Multiplies two decimals, substituting zero on overflow.
pub fn safe_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::ZERO)
}

/// Sums a sequence of decimals through [`safe_add`].
///
/// An empty sequence sums to exactly zero, which is what every empty
/// roster subset reports.
pub fn safe_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, safe_add)
}
