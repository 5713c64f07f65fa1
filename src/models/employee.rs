//! Employee model and related types.
//!
//! This module defines the Employee struct and Category enum for
//! representing roster members in the raise planning system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Organizational role tier used for cost grouping.
///
/// The four tiers partition the roster: A is management, B is teaching
/// staff, and C and D are auxiliary roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Management tier.
    A,
    /// Teaching tier.
    B,
    /// Auxiliary tier (senior).
    C,
    /// Auxiliary tier (junior).
    D,
}

impl Category {
    /// All four tiers in their canonical reporting order.
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];
}

/// Represents an employee in the raise plan roster.
///
/// The roster is immutable for the lifetime of a session: records are
/// supplied once by the input collaborator and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's organizational role tier.
    pub category: Category,
    /// The calendar year the employee was hired.
    pub start_year: i32,
    /// Whether the employee holds a qualifying advanced (master's) degree.
    pub has_masters: bool,
    /// The employee's current net salary.
    pub current_net: Decimal,
    /// The employee's proposed target net salary.
    pub target_net: Decimal,
}

impl Employee {
    /// Returns the proposed net salary increase for this employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use raise_engine::models::{Category, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     category: Category::B,
    ///     start_year: 2019,
    ///     has_masters: true,
    ///     current_net: Decimal::new(1000, 0),
    ///     target_net: Decimal::new(1100, 0),
    /// };
    /// assert_eq!(employee.net_increase(), Decimal::new(100, 0));
    /// ```
    pub fn net_increase(&self) -> Decimal {
        self.target_net - self.current_net
    }
}
