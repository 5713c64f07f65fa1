//! Waterfall series derivation.
//!
//! Turns a [`StatsReport`] into the five ordered signed deltas the
//! cumulative-flow chart renders: revenue in, three cost groups out, net
//! result. The C and D tiers are merged into a single auxiliary step here,
//! unlike the four-way grouping used by the category summaries and loyalty
//! bands; that divergence is intentional and mirrors how the figures are
//! presented.

use rust_decimal::Decimal;

use crate::models::{Category, StatsReport, WaterfallStep};

use super::arith::safe_add;

/// Number of waterfall steps. Fixed.
pub const WATERFALL_STEP_COUNT: usize = 5;

const COLOR_REVENUE: &str = "#10B981";
const COLOR_MANAGEMENT: &str = "#0f172a";
const COLOR_TEACHING: &str = "#334155";
const COLOR_AUXILIARY: &str = "#64748b";
const COLOR_NET_POSITIVE: &str = "#10B981";
const COLOR_NET_NEGATIVE: &str = "#EF4444";

/// Derives the five-step waterfall series from a statistics report.
///
/// Step order is fixed and meaningful: revenue, management cost (tier A),
/// teaching cost (tier B), auxiliary cost (tiers C and D combined), net
/// result. Cost steps carry negated magnitudes; the net step's color
/// reflects the sustainability verdict.
pub fn waterfall_series(report: &StatsReport) -> Vec<WaterfallStep> {
    let cost_a = category_cost(report, Category::A);
    let cost_b = category_cost(report, Category::B);
    let cost_cd = safe_add(
        category_cost(report, Category::C),
        category_cost(report, Category::D),
    );

    vec![
        WaterfallStep {
            id: "wf-rev",
            label: "REVENUE",
            value: report.additional_revenue,
            color: COLOR_REVENUE,
        },
        WaterfallStep {
            id: "wf-mgmt",
            label: "MANAGEMENT",
            value: -cost_a,
            color: COLOR_MANAGEMENT,
        },
        WaterfallStep {
            id: "wf-teach",
            label: "TEACHING",
            value: -cost_b,
            color: COLOR_TEACHING,
        },
        WaterfallStep {
            id: "wf-aux",
            label: "AUXILIARY",
            value: -cost_cd,
            color: COLOR_AUXILIARY,
        },
        WaterfallStep {
            id: "wf-net",
            label: "NET",
            value: report.net_profit,
            color: if report.is_sustainable {
                COLOR_NET_POSITIVE
            } else {
                COLOR_NET_NEGATIVE
            },
        },
    ]
}

/// Looks up one tier's gross cost; a missing summary counts as zero.
fn category_cost(report: &StatsReport, category: Category) -> Decimal {
    report
        .summary_for(category)
        .map(|s| s.raise_cost_gross)
        .unwrap_or(Decimal::ZERO)
}
