//! Filtered and global roster totals.

use rust_decimal::Decimal;

use crate::config::FinancialPolicy;
use crate::models::{Employee, FilteredTotals, GlobalTotals};

use super::arith::{safe_add, safe_mul, safe_sum};

/// Sums the gross raise cost over a set of employees.
///
/// This is the crate's single cost formula: `(target_net - current_net)
/// * bruto_factor`, summed. Every cost figure anywhere in the engine is
/// produced by this function so that the bruto factor can never diverge
/// between computation paths.
pub fn gross_raise_cost<'a, I>(employees: I, policy: &FinancialPolicy) -> Decimal
where
    I: IntoIterator<Item = &'a Employee>,
{
    safe_sum(
        employees
            .into_iter()
            .map(|e| safe_mul(e.net_increase(), policy.bruto_factor)),
    )
}

/// Computes the totals for the currently visible (filtered) subset.
///
/// Each field is summed and guarded independently; an empty subset
/// produces all-zero totals.
pub fn filtered_totals(visible: &[Employee], policy: &FinancialPolicy) -> FilteredTotals {
    let total_current_net = safe_sum(visible.iter().map(|e| e.current_net));
    let total_target_net = safe_sum(visible.iter().map(|e| e.target_net));

    FilteredTotals {
        total_current_net,
        total_target_net,
        total_net_increase: safe_add(total_target_net, -total_current_net),
        total_gross_cost: gross_raise_cost(visible, policy),
    }
}

/// Computes the headline totals over the entire roster.
///
/// Always covers the full roster regardless of any table filters, so KPI
/// figures stay stable while the user toggles filters.
pub fn global_totals(roster: &[Employee], policy: &FinancialPolicy) -> GlobalTotals {
    GlobalTotals {
        total_target_net: safe_sum(roster.iter().map(|e| e.target_net)),
        total_gross_cost: gross_raise_cost(roster, policy),
    }
}
