//! Salary Raise Sustainability Engine
//!
//! This crate computes payroll-adjustment analytics for a tuition-funded
//! organization: given an immutable employee roster and a proposed tuition
//! increase percentage, it derives a sustainability verdict, per-category
//! raise cost summaries, a waterfall breakdown, a tenure-based loyalty cost
//! breakdown, and filtered roster views with their totals.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
