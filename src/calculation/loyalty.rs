//! Loyalty (tenure) cost breakdown.
//!
//! Partitions the full roster into four fixed hire-year bands and sums the
//! gross raise cost per band. Always computed over the whole roster,
//! independent of the table filters. Band order is oldest tenure first and
//! must stay stable; the presentation layer renders the bands in sequence.

use rust_decimal::Decimal;

use crate::config::FinancialPolicy;
use crate::models::{Employee, LoyaltyBucket};

use super::totals::gross_raise_cost;

/// Number of loyalty bands. Fixed.
pub const LOYALTY_BAND_COUNT: usize = 4;

/// One band definition: id, label, color, and hire-year predicate.
struct Band {
    id: &'static str,
    label: &'static str,
    color: &'static str,
    covers: fn(i32) -> bool,
}

/// The four bands: collectively exhaustive and non-overlapping over all
/// hire years, oldest first.
const BANDS: [Band; LOYALTY_BAND_COUNT] = [
    Band {
        id: "loyalty-10plus",
        label: "2016 and earlier (10+ yrs)",
        color: "#064e3b",
        covers: |year| year <= 2016,
    },
    Band {
        id: "loyalty-5-10",
        label: "2017-2021 (5-10 yrs)",
        color: "#059669",
        covers: |year| (2017..=2021).contains(&year),
    },
    Band {
        id: "loyalty-2-5",
        label: "2022-2024 (2-5 yrs)",
        color: "#10b981",
        covers: |year| (2022..=2024).contains(&year),
    },
    Band {
        id: "loyalty-2less",
        label: "2025+ (< 2 yrs)",
        color: "#34d399",
        covers: |year| year >= 2025,
    },
];

/// Computes the per-band gross raise cost over the full roster.
///
/// Returns exactly [`LOYALTY_BAND_COUNT`] buckets in fixed order. Each
/// bucket's cost is rounded to two decimal places for display; this is the
/// only rounding site in the engine.
pub fn loyalty_buckets(roster: &[Employee], policy: &FinancialPolicy) -> Vec<LoyaltyBucket> {
    BANDS
        .iter()
        .map(|band| {
            let members = roster.iter().filter(|e| (band.covers)(e.start_year));
            let cost = gross_raise_cost(members, policy);
            LoyaltyBucket {
                id: band.id,
                label: band.label,
                color: band.color,
                gross_cost: round_display(cost),
            }
        })
        .collect()
}

/// Rounds a display figure to two decimal places, half-up.
fn round_display(value: Decimal) -> Decimal {
    value.round_dp(2)
}
