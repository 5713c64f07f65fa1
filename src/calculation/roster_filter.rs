//! Roster filtering for the table view.

use crate::models::{
    Category, CategoryFilter, DegreeFilter, Employee, FilterSelection, HireYearFilter,
};

/// Applies the three table filters to the roster, conjunctively.
///
/// Roster order is preserved. With every filter set to `All` this is the
/// identity on the roster.
///
/// Hire-year boundary: an employee with `start_year == 2020` passes `All`
/// but fails both `Before2020` and `After2020`. Both brackets are strict;
/// the gap is intentional and relied upon by the table UI.
pub fn visible_roster(roster: &[Employee], selection: &FilterSelection) -> Vec<Employee> {
    roster
        .iter()
        .filter(|e| {
            passes_category(e, selection.category)
                && passes_degree(e, selection.degree)
                && passes_hire_year(e, selection.hire_year)
        })
        .cloned()
        .collect()
}

fn passes_category(employee: &Employee, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::ManagementTeaching => {
            matches!(employee.category, Category::A | Category::B)
        }
        CategoryFilter::Auxiliary => matches!(employee.category, Category::C | Category::D),
    }
}

fn passes_degree(employee: &Employee, filter: DegreeFilter) -> bool {
    match filter {
        DegreeFilter::All => true,
        DegreeFilter::MastersOnly => employee.has_masters,
        DegreeFilter::NoMasters => !employee.has_masters,
    }
}

fn passes_hire_year(employee: &Employee, filter: HireYearFilter) -> bool {
    match filter {
        HireYearFilter::All => true,
        HireYearFilter::Before2020 => employee.start_year < 2020,
        HireYearFilter::After2020 => employee.start_year > 2020,
    }
}
