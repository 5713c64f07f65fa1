//! Configuration types for the raise engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Employee;

/// Metadata about the raise plan.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanMetadata {
    /// The human-readable name of the plan.
    pub name: String,
    /// The plan version string.
    pub version: String,
    /// The date the proposed salaries take effect.
    pub effective_date: NaiveDate,
}

/// Financial policy constants for the plan.
///
/// Supplied once at session start and never changed afterwards. The bruto
/// factor must be identical across every computation path; all gross cost
/// figures in the engine are net deltas multiplied by this single value.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialPolicy {
    /// Employer cost per unit of net salary increase (statutory
    /// contributions included), e.g. `1.63`.
    pub bruto_factor: Decimal,
    /// Annual tuition revenue at the current (unincreased) rate; the base
    /// the tuition increase percentage is applied to.
    pub tuition_revenue_base: Decimal,
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// The employees covered by the plan.
    pub employees: Vec<Employee>,
}

/// The complete raise plan configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Plan metadata.
    metadata: PlanMetadata,
    /// Financial policy constants.
    policy: FinancialPolicy,
    /// The immutable employee roster.
    roster: Vec<Employee>,
}

impl PlanConfig {
    /// Creates a new PlanConfig from its component parts.
    pub fn new(metadata: PlanMetadata, policy: FinancialPolicy, roster: Vec<Employee>) -> Self {
        Self {
            metadata,
            policy,
            roster,
        }
    }

    /// Returns the plan metadata.
    pub fn metadata(&self) -> &PlanMetadata {
        &self.metadata
    }

    /// Returns the financial policy constants.
    pub fn policy(&self) -> &FinancialPolicy {
        &self.policy
    }

    /// Returns the employee roster.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_deserializes_from_yaml() {
        let yaml = r#"
bruto_factor: "1.63"
tuition_revenue_base: "11666.67"
"#;
        let policy: FinancialPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.bruto_factor, Decimal::from_str("1.63").unwrap());
        assert_eq!(
            policy.tuition_revenue_base,
            Decimal::from_str("11666.67").unwrap()
        );
    }

    #[test]
    fn test_metadata_deserializes_from_yaml() {
        let yaml = r#"
name: "Raise plan 2026"
version: "2026-01"
effective_date: 2026-01-01
"#;
        let metadata: PlanMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metadata.name, "Raise plan 2026");
        assert_eq!(
            metadata.effective_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_roster_file_deserializes_from_yaml() {
        let yaml = r#"
employees:
  - id: emp_001
    category: A
    start_year: 2015
    has_masters: true
    current_net: "2100"
    target_net: "2300"
"#;
        let roster: RosterFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(roster.employees.len(), 1);
        assert_eq!(roster.employees[0].start_year, 2015);
    }
}
