//! Filter selections for roster views.
//!
//! Three independent, mutually-orthogonal filters narrow the roster table:
//! by role tier group, by advanced-degree status, and by hire-year bracket.
//! The selections are held by the presentation layer and passed by value
//! into the derivation layer on every recomputation.

use serde::{Deserialize, Serialize};

/// Filter on the organizational role tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No tier restriction.
    #[default]
    All,
    /// Only management and teaching staff (tiers A and B).
    ManagementTeaching,
    /// Only auxiliary staff (tiers C and D).
    Auxiliary,
}

/// Filter on advanced-degree status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeFilter {
    /// No degree restriction.
    #[default]
    All,
    /// Only employees holding a qualifying master's degree.
    MastersOnly,
    /// Only employees without a qualifying master's degree.
    NoMasters,
}

/// Filter on the hire-year bracket.
///
/// Note: an employee hired exactly in 2020 passes `All` but neither
/// `Before2020` nor `After2020`. The brackets are strict on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HireYearFilter {
    /// No hire-year restriction.
    #[default]
    All,
    /// Only employees hired strictly before 2020.
    Before2020,
    /// Only employees hired strictly after 2020.
    After2020,
}

/// The complete set of filter selections applied to the roster table.
///
/// The three filters combine conjunctively. `FilterSelection::default()`
/// selects everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// The active role tier filter.
    pub category: CategoryFilter,
    /// The active degree filter.
    pub degree: DegreeFilter,
    /// The active hire-year filter.
    pub hire_year: HireYearFilter,
}
