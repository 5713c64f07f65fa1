//! Core data models for the Salary Raise Sustainability Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod filters;
mod stats_report;
mod views;

pub use employee::{Category, Employee};
pub use filters::{CategoryFilter, DegreeFilter, FilterSelection, HireYearFilter};
pub use stats_report::{CategorySummary, StatsReport};
pub use views::{FilteredTotals, GlobalTotals, LoyaltyBucket, WaterfallStep};
