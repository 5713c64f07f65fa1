//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a raise plan
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{FinancialPolicy, PlanConfig, PlanMetadata, RosterFile};

/// Loads and provides access to the raise plan configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates the roster before handing it to the engine. The engine itself
/// performs no validation; all input checking lives here.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/plan-2026/
/// ├── plan.yaml    # Plan metadata
/// ├── policy.yaml  # Bruto factor and tuition revenue base
/// └── roster.yaml  # Employee roster
/// ```
///
/// # Example
///
/// ```no_run
/// use raise_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/plan-2026").unwrap();
/// println!("Roster size: {}", loader.config().roster().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlanConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/plan-2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The roster contains an invalid employee record
    /// - The policy contains a non-positive bruto factor
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PlanMetadata>(&path.join("plan.yaml"))?;
        let policy = Self::load_yaml::<FinancialPolicy>(&path.join("policy.yaml"))?;
        let roster_file = Self::load_yaml::<RosterFile>(&path.join("roster.yaml"))?;

        Self::validate_policy(&policy)?;
        Self::validate_roster(&roster_file.employees)?;

        info!(
            plan = %metadata.name,
            roster_size = roster_file.employees.len(),
            "Loaded raise plan configuration"
        );

        Ok(Self {
            config: PlanConfig::new(metadata, policy, roster_file.employees),
        })
    }

    /// Returns the loaded plan configuration.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the financial policy constants.
    fn validate_policy(policy: &FinancialPolicy) -> EngineResult<()> {
        if policy.bruto_factor.is_sign_negative() || policy.bruto_factor.is_zero() {
            return Err(EngineError::InvalidPolicy {
                field: "bruto_factor".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Validates roster invariants the engine relies on.
    ///
    /// Net salaries must be non-negative. Categories are already constrained
    /// to the four tiers by deserialization.
    fn validate_roster(employees: &[Employee]) -> EngineResult<()> {
        for employee in employees {
            if employee.current_net.is_sign_negative() {
                return Err(EngineError::InvalidEmployee {
                    employee_id: employee.id.clone(),
                    message: "current_net is negative".to_string(),
                });
            }
            if employee.target_net.is_sign_negative() {
                return Err(EngineError::InvalidEmployee {
                    employee_id: employee.id.clone(),
                    message: "target_net is negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_policy() -> FinancialPolicy {
        FinancialPolicy {
            bruto_factor: dec("1.63"),
            tuition_revenue_base: dec("11666.67"),
        }
    }

    fn test_employee(id: &str, current: &str, target: &str) -> Employee {
        Employee {
            id: id.to_string(),
            category: Category::B,
            start_year: 2019,
            has_masters: false,
            current_net: dec(current),
            target_net: dec(target),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("/nonexistent/plan");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("plan.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_policy_rejects_zero_bruto_factor() {
        let mut policy = test_policy();
        policy.bruto_factor = Decimal::ZERO;

        let result = ConfigLoader::validate_policy(&policy);
        match result.unwrap_err() {
            EngineError::InvalidPolicy { field, .. } => assert_eq!(field, "bruto_factor"),
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_policy_accepts_positive_bruto_factor() {
        assert!(ConfigLoader::validate_policy(&test_policy()).is_ok());
    }

    #[test]
    fn test_validate_roster_rejects_negative_current_net() {
        let employees = vec![test_employee("emp_001", "-100", "200")];

        let result = ConfigLoader::validate_roster(&employees);
        match result.unwrap_err() {
            EngineError::InvalidEmployee { employee_id, message } => {
                assert_eq!(employee_id, "emp_001");
                assert!(message.contains("current_net"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_roster_rejects_negative_target_net() {
        let employees = vec![test_employee("emp_002", "100", "-200")];

        let result = ConfigLoader::validate_roster(&employees);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_roster_accepts_pay_cut_with_non_negative_target() {
        // A target below current is a valid (negative) raise.
        let employees = vec![test_employee("emp_003", "1500", "1400")];
        assert!(ConfigLoader::validate_roster(&employees).is_ok());
    }

    #[test]
    fn test_validate_empty_roster_is_ok() {
        assert!(ConfigLoader::validate_roster(&[]).is_ok());
    }
}
