//! The aggregation engine.
//!
//! This module provides [`compute_stats`], the single entry point that
//! turns the roster and the tuition increase percentage into a
//! [`StatsReport`]: projected revenue, per-tier cost summaries, the net
//! result, and the sustainability verdict.

use rust_decimal::Decimal;

use crate::config::FinancialPolicy;
use crate::models::{Category, CategorySummary, Employee, StatsReport};

use super::arith::{safe_add, safe_sum};
use super::revenue::additional_revenue;
use super::totals::gross_raise_cost;

/// Computes the statistics report for a roster and tuition increase.
///
/// For each of the four tiers the roster is narrowed to that tier's
/// members and summed: headcount, current net, target net, and the gross
/// raise cost (net delta times the bruto factor). The net result is the
/// projected additional revenue minus all four gross costs, and the plan
/// is sustainable when that result is at least zero (zero inclusive).
///
/// Never fails: an empty roster yields an all-zero report, and the
/// percentage is accepted unvalidated, whatever its sign or magnitude.
///
/// # Examples
///
/// ```
/// use raise_engine::calculation::compute_stats;
/// use raise_engine::config::FinancialPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = FinancialPolicy {
///     bruto_factor: Decimal::from_str("1.63").unwrap(),
///     tuition_revenue_base: Decimal::from_str("10000").unwrap(),
/// };
/// let report = compute_stats(&[], Decimal::from_str("6").unwrap(), &policy);
/// assert!(report.is_sustainable);
/// assert_eq!(report.net_profit, Decimal::from_str("600").unwrap());
/// ```
pub fn compute_stats(
    roster: &[Employee],
    tuition_increase_pct: Decimal,
    policy: &FinancialPolicy,
) -> StatsReport {
    let revenue = additional_revenue(tuition_increase_pct, policy);

    let category_summaries: Vec<CategorySummary> = Category::ALL
        .iter()
        .map(|&category| summarize_category(roster, category, policy))
        .collect();

    let total_cost = safe_sum(category_summaries.iter().map(|s| s.raise_cost_gross));
    let net_profit = safe_add(revenue, -total_cost);

    StatsReport {
        additional_revenue: revenue,
        category_summaries,
        net_profit,
        is_sustainable: net_profit >= Decimal::ZERO,
    }
}

/// Summarizes one tier's headcount, net sums, and gross raise cost.
fn summarize_category(
    roster: &[Employee],
    category: Category,
    policy: &FinancialPolicy,
) -> CategorySummary {
    let members: Vec<&Employee> = roster.iter().filter(|e| e.category == category).collect();

    CategorySummary {
        category,
        headcount: members.len(),
        total_current_net: safe_sum(members.iter().map(|e| e.current_net)),
        total_target_net: safe_sum(members.iter().map(|e| e.target_net)),
        raise_cost_gross: gross_raise_cost(members.iter().copied(), policy),
    }
}
