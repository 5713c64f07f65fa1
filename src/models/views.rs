//! Derived view structures consumed by the presentation layer.
//!
//! These are pure functions of (roster, tuition increase, filters) and
//! carry no identity of their own; they are recomputed, never mutated in
//! place. Chart-facing structures carry fixed ids, labels, and display
//! colors so the presentation layer stays free of business logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over the currently visible (filtered) roster subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredTotals {
    /// Sum of current net salaries across the visible subset.
    pub total_current_net: Decimal,
    /// Sum of target net salaries across the visible subset.
    pub total_target_net: Decimal,
    /// Total proposed net increase (target minus current).
    pub total_net_increase: Decimal,
    /// Total employer cost of the visible raises in gross terms.
    pub total_gross_cost: Decimal,
}

/// Headline totals over the entire roster, independent of table filters.
///
/// Used for KPI figures that must not fluctuate as the user adjusts the
/// table filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalTotals {
    /// Sum of target net salaries across the whole roster.
    pub total_target_net: Decimal,
    /// Total employer cost of all raises in gross terms.
    pub total_gross_cost: Decimal,
}

/// One tenure band in the loyalty cost breakdown.
///
/// The four bands are fixed, non-overlapping, and collectively exhaustive
/// over hire years; each carries a stable id, display label, and color.
/// Output-only: serialized for the presentation layer, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoyaltyBucket {
    /// Stable identifier for the band (e.g. `"loyalty-10plus"`).
    pub id: &'static str,
    /// Display label describing the hire-year range and tenure.
    pub label: &'static str,
    /// Display color for the band's chart segment.
    pub color: &'static str,
    /// Total gross raise cost for employees in this band, rounded to
    /// two decimal places.
    pub gross_cost: Decimal,
}

/// One step in the revenue/cost waterfall series.
///
/// The series has exactly five steps in fixed order: revenue in, three
/// cost groups out (as negative values), and the net result.
/// Output-only: serialized for the presentation layer, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterfallStep {
    /// Stable identifier for the step (e.g. `"wf-rev"`).
    pub id: &'static str,
    /// Display label for the step.
    pub label: &'static str,
    /// Signed delta for the step: positive for revenue and (when the plan
    /// is sustainable) the net result, negative for cost steps.
    pub value: Decimal,
    /// Display color; the net step's color depends on sustainability.
    pub color: &'static str,
}
