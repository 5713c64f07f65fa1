//! Configuration loading and management for the raise engine.
//!
//! This module provides functionality to load a raise plan from YAML files:
//! plan metadata, the financial policy constants (bruto factor, tuition
//! revenue base), and the employee roster.
//!
//! # Example
//!
//! ```no_run
//! use raise_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/plan-2026").unwrap();
//! println!("Loaded plan: {}", loader.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FinancialPolicy, PlanConfig, PlanMetadata, RosterFile};
