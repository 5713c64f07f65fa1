//! Calculation logic for the Salary Raise Sustainability Engine.
//!
//! This module contains the aggregation engine and the view derivation
//! layer: revenue projection, per-category statistics, roster filtering,
//! filtered and global totals, the loyalty (tenure) cost breakdown, and
//! the waterfall series. Every function here is pure, total, and never
//! returns an error; degenerate numeric input is absorbed by
//! zero-substitution.

mod arith;
mod loyalty;
mod revenue;
mod roster_filter;
mod stats;
mod totals;
mod waterfall;

pub use arith::{safe_add, safe_mul, safe_sum};
pub use loyalty::{LOYALTY_BAND_COUNT, loyalty_buckets};
pub use revenue::additional_revenue;
pub use roster_filter::visible_roster;
pub use stats::compute_stats;
pub use totals::{filtered_totals, global_totals, gross_raise_cost};
pub use waterfall::{WATERFALL_STEP_COUNT, waterfall_series};
