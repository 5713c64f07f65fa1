//! End-to-end tests for the Salary Raise Sustainability Engine.
//!
//! These tests run the whole pipeline the way an embedding application
//! would: load the shipped plan configuration from YAML, open a session,
//! adjust the tuition increase and filters, and read every derived view.

use rust_decimal::Decimal;
use std::str::FromStr;

use raise_engine::config::ConfigLoader;
use raise_engine::models::{Category, CategoryFilter, DegreeFilter, HireYearFilter};
use raise_engine::session::PlanSession;

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn load_plan() -> ConfigLoader {
    ConfigLoader::load("./config/plan-2026").expect("Failed to load plan config")
}

fn create_session(pct: &str) -> PlanSession {
    PlanSession::from_config(load_plan().config(), dec(pct))
}

// =============================================================================
// Configuration loading
// =============================================================================

#[test]
fn test_shipped_plan_loads() {
    let loader = load_plan();
    let config = loader.config();

    assert_eq!(config.metadata().name, "Salary raise plan 2026");
    assert_eq!(config.policy().bruto_factor, dec("1.63"));
    assert_eq!(config.roster().len(), 11);
}

#[test]
fn test_loading_missing_plan_fails() {
    assert!(ConfigLoader::load("./config/no-such-plan").is_err());
}

// =============================================================================
// Aggregation engine
// =============================================================================

#[test]
fn test_six_percent_increase_is_sustainable() {
    let mut session = create_session("6");
    let stats = session.stats();

    // Revenue: 74000 * 6% = 4440. Total gross cost: 1460 * 1.63 = 2379.80.
    assert_eq!(stats.additional_revenue, dec("4440.00"));
    assert_eq!(stats.total_raise_cost_gross(), dec("2379.80"));
    assert_eq!(stats.net_profit, dec("2060.20"));
    assert!(stats.is_sustainable);
}

#[test]
fn test_one_percent_increase_is_unsustainable() {
    let mut session = create_session("1");
    let stats = session.stats();

    assert_eq!(stats.additional_revenue, dec("740.00"));
    assert!(stats.net_profit < Decimal::ZERO);
    assert!(!stats.is_sustainable);
}

#[test]
fn test_per_category_costs() {
    let mut session = create_session("6");
    let stats = session.stats();

    let cost = |c| stats.summary_for(c).unwrap().raise_cost_gross;
    assert_eq!(cost(Category::A), dec("570.50"));
    assert_eq!(cost(Category::B), dec("1222.50"));
    assert_eq!(cost(Category::C), dec("326.00"));
    assert_eq!(cost(Category::D), dec("260.80"));
}

#[test]
fn test_category_headcounts() {
    let mut session = create_session("6");
    let stats = session.stats();

    assert_eq!(stats.summary_for(Category::A).unwrap().headcount, 2);
    assert_eq!(stats.summary_for(Category::B).unwrap().headcount, 5);
    assert_eq!(stats.summary_for(Category::C).unwrap().headcount, 2);
    assert_eq!(stats.summary_for(Category::D).unwrap().headcount, 2);
}

#[test]
fn test_negative_percentage_is_accepted() {
    let mut session = create_session("-4");
    let stats = session.stats();

    assert_eq!(stats.additional_revenue, dec("-2960.00"));
    assert!(!stats.is_sustainable);
}

// =============================================================================
// Filters and totals
// =============================================================================

#[test]
fn test_global_totals_over_full_roster() {
    let mut session = create_session("6");
    let totals = session.global_totals().clone();

    assert_eq!(totals.total_target_net, dec("16520"));
    assert_eq!(totals.total_gross_cost, dec("2379.80"));
}

#[test]
fn test_global_totals_survive_filter_changes() {
    let mut session = create_session("6");
    let before = session.global_totals().clone();

    session.set_category_filter(CategoryFilter::Auxiliary);
    session.set_degree_filter(DegreeFilter::MastersOnly);
    session.set_hire_year_filter(HireYearFilter::Before2020);

    assert_eq!(session.global_totals().clone(), before);
}

#[test]
fn test_category_filter_narrows_table() {
    let mut session = create_session("6");

    session.set_category_filter(CategoryFilter::ManagementTeaching);
    assert_eq!(session.visible_roster().len(), 7);

    session.set_category_filter(CategoryFilter::Auxiliary);
    assert_eq!(session.visible_roster().len(), 4);
}

#[test]
fn test_degree_filter_narrows_table() {
    let mut session = create_session("6");

    session.set_degree_filter(DegreeFilter::MastersOnly);
    assert_eq!(session.visible_roster().len(), 4);

    session.set_degree_filter(DegreeFilter::NoMasters);
    assert_eq!(session.visible_roster().len(), 7);
}

#[test]
fn test_hire_year_2020_boundary_gap() {
    let mut session = create_session("6");

    session.set_hire_year_filter(HireYearFilter::Before2020);
    let before = session.visible_roster().len();

    session.set_hire_year_filter(HireYearFilter::After2020);
    let after = session.visible_roster().len();

    session.set_hire_year_filter(HireYearFilter::All);
    let all = session.visible_roster().len();

    // emp_005 started exactly in 2020 and falls in neither bracket.
    assert_eq!(before, 6);
    assert_eq!(after, 4);
    assert_eq!(all, 11);
    assert_eq!(before + after, all - 1);
}

#[test]
fn test_filtered_totals_track_visible_subset() {
    let mut session = create_session("6");
    session.set_category_filter(CategoryFilter::Auxiliary);

    let totals = session.filtered_totals().clone();

    // C and D tiers: 1150 + 1100 + 980 + 950 current.
    assert_eq!(totals.total_current_net, dec("4180"));
    assert_eq!(totals.total_target_net, dec("4540"));
    assert_eq!(totals.total_net_increase, dec("360"));
    assert_eq!(totals.total_gross_cost, dec("586.80"));
}

// =============================================================================
// Loyalty buckets and waterfall
// =============================================================================

#[test]
fn test_loyalty_buckets_over_shipped_roster() {
    let mut session = create_session("6");
    let buckets = session.loyalty_buckets().to_vec();

    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets[0].gross_cost, dec("815.00"));
    assert_eq!(buckets[1].gross_cost, dec("782.40"));
    assert_eq!(buckets[2].gross_cost, dec("537.90"));
    assert_eq!(buckets[3].gross_cost, dec("244.50"));

    let band_sum: Decimal = buckets.iter().map(|b| b.gross_cost).sum();
    assert_eq!(band_sum, dec("2379.80"));
}

#[test]
fn test_loyalty_buckets_ignore_filters() {
    let mut session = create_session("6");
    let before = session.loyalty_buckets().to_vec();

    session.set_category_filter(CategoryFilter::ManagementTeaching);
    let after = session.loyalty_buckets().to_vec();

    assert_eq!(before, after);
}

#[test]
fn test_waterfall_over_shipped_roster() {
    let mut session = create_session("6");
    let series = session.waterfall().to_vec();

    assert_eq!(series.len(), 5);
    assert_eq!(series[0].value, dec("4440.00"));
    assert_eq!(series[1].value, dec("-570.50"));
    assert_eq!(series[2].value, dec("-1222.50"));
    assert_eq!(series[3].value, dec("-586.80"));
    assert_eq!(series[4].value, dec("2060.20"));
    assert_eq!(series[4].color, "#10B981");
}

#[test]
fn test_waterfall_turns_red_when_unsustainable() {
    let mut session = create_session("6");
    session.set_tuition_increase(dec("1"));

    let series = session.waterfall().to_vec();
    assert!(series[4].value < Decimal::ZERO);
    assert_eq!(series[4].color, "#EF4444");
}

#[test]
fn test_views_serialize_for_presentation() {
    let mut session = create_session("6");

    let stats_json = serde_json::to_value(session.stats()).unwrap();
    assert_eq!(stats_json["is_sustainable"], true);

    let waterfall_json = serde_json::to_value(session.waterfall()).unwrap();
    assert_eq!(waterfall_json.as_array().unwrap().len(), 5);
    assert_eq!(waterfall_json[0]["id"], "wf-rev");

    let buckets_json = serde_json::to_value(session.loyalty_buckets()).unwrap();
    assert_eq!(buckets_json[0]["id"], "loyalty-10plus");
}
