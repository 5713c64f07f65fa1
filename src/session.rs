//! Session state and dependency-scoped memoization.
//!
//! The engine itself is stateless; the only mutable state in the system is
//! the tuition increase percentage and the three table filters, held here.
//! [`PlanSession`] caches each derived view and invalidates a cache slot
//! only when an input in that view's dependency set changes:
//!
//! - tuition percentage -> stats report, waterfall series
//! - any filter -> visible roster, filtered totals
//! - roster, policy -> fixed for the session; global totals and loyalty
//!   buckets are therefore computed at most once
//!
//! Recomputing everything on every change would also be correct, just
//! wasteful for a UI that rederives on every keystroke or toggle.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{
    compute_stats, filtered_totals, global_totals, loyalty_buckets, visible_roster,
    waterfall_series,
};
use crate::config::{FinancialPolicy, PlanConfig};
use crate::models::{
    CategoryFilter, DegreeFilter, Employee, FilterSelection, FilteredTotals, GlobalTotals,
    HireYearFilter, LoyaltyBucket, StatsReport, WaterfallStep,
};

/// A planning session over an immutable roster.
///
/// Owns the roster, the policy constants, the user-adjustable inputs, and
/// one cache slot per derived view. All accessors take `&mut self` because
/// they fill their cache lazily on first use.
///
/// # Example
///
/// ```
/// use raise_engine::config::FinancialPolicy;
/// use raise_engine::session::PlanSession;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = FinancialPolicy {
///     bruto_factor: Decimal::from_str("1.63").unwrap(),
///     tuition_revenue_base: Decimal::from_str("10000").unwrap(),
/// };
/// let mut session = PlanSession::new(vec![], policy, Decimal::from_str("6").unwrap());
/// assert!(session.stats().is_sustainable);
/// ```
#[derive(Debug)]
pub struct PlanSession {
    roster: Vec<Employee>,
    policy: FinancialPolicy,
    tuition_increase_pct: Decimal,
    filters: FilterSelection,

    stats: Option<StatsReport>,
    visible: Option<Vec<Employee>>,
    filtered: Option<FilteredTotals>,
    global: Option<GlobalTotals>,
    loyalty: Option<Vec<LoyaltyBucket>>,
    waterfall: Option<Vec<WaterfallStep>>,
}

impl PlanSession {
    /// Creates a session with all filters set to `All` and empty caches.
    pub fn new(
        roster: Vec<Employee>,
        policy: FinancialPolicy,
        tuition_increase_pct: Decimal,
    ) -> Self {
        Self {
            roster,
            policy,
            tuition_increase_pct,
            filters: FilterSelection::default(),
            stats: None,
            visible: None,
            filtered: None,
            global: None,
            loyalty: None,
            waterfall: None,
        }
    }

    /// Creates a session from a loaded plan configuration, with the given
    /// initial tuition increase percentage.
    pub fn from_config(config: &PlanConfig, tuition_increase_pct: Decimal) -> Self {
        Self::new(
            config.roster().to_vec(),
            config.policy().clone(),
            tuition_increase_pct,
        )
    }

    /// Returns the full roster.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Returns the current tuition increase percentage.
    pub fn tuition_increase_pct(&self) -> Decimal {
        self.tuition_increase_pct
    }

    /// Returns the current filter selection.
    pub fn filters(&self) -> FilterSelection {
        self.filters
    }

    /// Sets the tuition increase percentage.
    ///
    /// Invalidates the stats report and the waterfall series; filter-scoped
    /// and roster-scoped views keep their caches.
    pub fn set_tuition_increase(&mut self, pct: Decimal) {
        if self.tuition_increase_pct == pct {
            return;
        }
        debug!(%pct, "Tuition increase changed; invalidating stats and waterfall");
        self.tuition_increase_pct = pct;
        self.stats = None;
        self.waterfall = None;
    }

    /// Sets the role tier filter.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        if self.filters.category != filter {
            self.filters.category = filter;
            self.invalidate_filtered_views();
        }
    }

    /// Sets the degree filter.
    pub fn set_degree_filter(&mut self, filter: DegreeFilter) {
        if self.filters.degree != filter {
            self.filters.degree = filter;
            self.invalidate_filtered_views();
        }
    }

    /// Sets the hire-year filter.
    pub fn set_hire_year_filter(&mut self, filter: HireYearFilter) {
        if self.filters.hire_year != filter {
            self.filters.hire_year = filter;
            self.invalidate_filtered_views();
        }
    }

    fn invalidate_filtered_views(&mut self) {
        debug!(filters = ?self.filters, "Filter changed; invalidating visible roster and totals");
        self.visible = None;
        self.filtered = None;
    }

    /// Returns the statistics report, computing it if stale.
    pub fn stats(&mut self) -> &StatsReport {
        if self.stats.is_none() {
            debug!("Recomputing stats report");
            self.stats = Some(compute_stats(
                &self.roster,
                self.tuition_increase_pct,
                &self.policy,
            ));
        }
        self.stats.as_ref().unwrap()
    }

    /// Returns the filtered roster, computing it if stale.
    pub fn visible_roster(&mut self) -> &[Employee] {
        if self.visible.is_none() {
            debug!("Recomputing visible roster");
            self.visible = Some(visible_roster(&self.roster, &self.filters));
        }
        self.visible.as_ref().unwrap()
    }

    /// Returns the totals over the filtered roster, computing if stale.
    pub fn filtered_totals(&mut self) -> &FilteredTotals {
        if self.filtered.is_none() {
            let visible = visible_roster(&self.roster, &self.filters);
            self.filtered = Some(filtered_totals(&visible, &self.policy));
            self.visible = Some(visible);
        }
        self.filtered.as_ref().unwrap()
    }

    /// Returns the filter-independent headline totals.
    ///
    /// Computed once per session; filter and percentage changes never
    /// invalidate it.
    pub fn global_totals(&mut self) -> &GlobalTotals {
        if self.global.is_none() {
            debug!("Computing global totals");
            self.global = Some(global_totals(&self.roster, &self.policy));
        }
        self.global.as_ref().unwrap()
    }

    /// Returns the loyalty cost breakdown over the full roster.
    ///
    /// Computed once per session, like [`Self::global_totals`].
    pub fn loyalty_buckets(&mut self) -> &[LoyaltyBucket] {
        if self.loyalty.is_none() {
            debug!("Computing loyalty buckets");
            self.loyalty = Some(loyalty_buckets(&self.roster, &self.policy));
        }
        self.loyalty.as_ref().unwrap()
    }

    /// Returns the waterfall series, computing it (and the stats report it
    /// depends on) if stale.
    pub fn waterfall(&mut self) -> &[WaterfallStep] {
        if self.waterfall.is_none() {
            let report = self.stats().clone();
            debug!("Recomputing waterfall series");
            self.waterfall = Some(waterfall_series(&report));
        }
        self.waterfall.as_ref().unwrap()
    }
}
