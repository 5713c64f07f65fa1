//! Statistics report models for the Salary Raise Sustainability Engine.
//!
//! This module contains the [`StatsReport`] type and its associated
//! [`CategorySummary`] that capture the output of the aggregation engine:
//! projected revenue, per-tier raise costs, and the sustainability verdict.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Cost summary for a single role tier.
///
/// # Example
///
/// ```
/// use raise_engine::models::{Category, CategorySummary};
/// use rust_decimal::Decimal;
///
/// let summary = CategorySummary {
///     category: Category::A,
///     headcount: 2,
///     total_current_net: Decimal::new(4200, 0),
///     total_target_net: Decimal::new(4600, 0),
///     raise_cost_gross: Decimal::new(65200, 2),
/// };
/// assert_eq!(summary.headcount, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The role tier this summary covers.
    pub category: Category,
    /// Number of employees in this tier.
    pub headcount: usize,
    /// Sum of current net salaries across the tier.
    pub total_current_net: Decimal,
    /// Sum of target net salaries across the tier.
    pub total_target_net: Decimal,
    /// Total employer cost of the tier's raises in gross terms
    /// (net increase multiplied by the bruto factor).
    pub raise_cost_gross: Decimal,
}

/// The complete output of the aggregation engine.
///
/// Recomputed whenever the roster or the tuition increase percentage
/// changes. Every numeric field is finite; degenerate input is absorbed by
/// zero-substitution rather than surfaced as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Additional annual revenue projected from the tuition increase.
    pub additional_revenue: Decimal,
    /// Per-tier cost summaries, ordered A, B, C, D.
    pub category_summaries: Vec<CategorySummary>,
    /// Projected net result: additional revenue minus all gross raise costs.
    pub net_profit: Decimal,
    /// Whether the plan pays for itself (`net_profit >= 0`, zero inclusive).
    pub is_sustainable: bool,
}

impl StatsReport {
    /// Returns the summary for a given tier, if present.
    pub fn summary_for(&self, category: Category) -> Option<&CategorySummary> {
        self.category_summaries
            .iter()
            .find(|s| s.category == category)
    }

    /// Returns the total gross raise cost across all tiers.
    pub fn total_raise_cost_gross(&self) -> Decimal {
        self.category_summaries
            .iter()
            .map(|s| s.raise_cost_gross)
            .sum()
    }
}
