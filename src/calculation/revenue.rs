//! Tuition revenue projection.

use rust_decimal::Decimal;

use crate::config::FinancialPolicy;

use super::arith::safe_mul;

/// Projects the additional annual revenue from a tuition increase.
///
/// Linear in the percentage: `tuition_revenue_base * pct / 100`. The
/// percentage is deliberately unvalidated; zero, negative, and absurdly
/// large values all flow through and produce a correspondingly signed
/// revenue figure.
///
/// # Examples
///
/// ```
/// use raise_engine::calculation::additional_revenue;
/// use raise_engine::config::FinancialPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = FinancialPolicy {
///     bruto_factor: Decimal::from_str("1.63").unwrap(),
///     tuition_revenue_base: Decimal::from_str("10000").unwrap(),
/// };
/// let revenue = additional_revenue(Decimal::from_str("6").unwrap(), &policy);
/// assert_eq!(revenue, Decimal::from_str("600").unwrap());
/// ```
pub fn additional_revenue(tuition_increase_pct: Decimal, policy: &FinancialPolicy) -> Decimal {
    safe_mul(policy.tuition_revenue_base, tuition_increase_pct) / Decimal::ONE_HUNDRED
}
