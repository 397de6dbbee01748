//! Sidebar filter state and its application to the response table.
//!
//! A filter dimension is a no-op when its column is missing from the table or
//! when the selection still equals the full domain of available values (the
//! sidebar's default state). Dimensions combine with AND; the GPA range is
//! inclusive on both bounds. Application always returns a fresh table.

use std::collections::BTreeSet;

use serde::Serialize;

use super::columns;
use super::table::DataTable;

/// Transient, request-scoped selection rebuilt from widget defaults on every
/// redraw. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub faculties: BTreeSet<String>,
    pub semesters: BTreeSet<String>,
    pub gpa_range: Option<(f64, f64)>,
}

impl FilterState {
    /// The default "everything selected / full range" state for a table.
    pub fn full_domain(table: &DataTable) -> Self {
        Self {
            faculties: faculty_options(table).into_iter().collect(),
            semesters: semester_options(table).into_iter().collect(),
            gpa_range: gpa_bounds(table),
        }
    }
}

/// Sorted distinct non-null faculty labels; empty when the column is absent.
pub fn faculty_options(table: &DataTable) -> Vec<String> {
    distinct_labels(table, columns::FACULTY)
}

/// Sorted distinct non-null semester labels; empty when the column is absent.
pub fn semester_options(table: &DataTable) -> Vec<String> {
    distinct_labels(table, columns::SEMESTER)
}

/// Min/max over non-null GPA cells; `None` when the column is absent or holds
/// no numeric values.
pub fn gpa_bounds(table: &DataTable) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in table.column_values(columns::GPA) {
        if let Some(n) = value.as_number() {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(n), hi.max(n)),
                None => (n, n),
            });
        }
    }
    bounds
}

fn distinct_labels(table: &DataTable, column: &str) -> Vec<String> {
    let mut labels: Vec<String> = table
        .column_values(column)
        .filter(|v| !v.is_null())
        .map(|v| v.display())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    // BTreeSet orders lexically; semester labels like "10" should follow "5",
    // so sort numerically where possible.
    labels.sort_by(|a, b| match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.cmp(b),
    });
    labels
}

/// Conjunctive filter application: a row survives only if it matches the
/// faculty membership AND the semester membership AND the GPA range.
pub fn apply_filters(table: &DataTable, filters: &FilterState) -> DataTable {
    let faculty_idx = active_set_dimension(table, columns::FACULTY, &filters.faculties);
    let semester_idx = active_set_dimension(table, columns::SEMESTER, &filters.semesters);
    let gpa_idx = match filters.gpa_range {
        Some(_) => table.column_index(columns::GPA),
        None => None,
    };

    table.filtered(|row| {
        if let Some(idx) = faculty_idx {
            if !filters.faculties.contains(&row[idx].display()) {
                return false;
            }
        }
        if let Some(idx) = semester_idx {
            if !filters.semesters.contains(&row[idx].display()) {
                return false;
            }
        }
        if let (Some(idx), Some((lo, hi))) = (gpa_idx, filters.gpa_range) {
            match row[idx].as_number() {
                Some(gpa) => {
                    if gpa < lo || gpa > hi {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    })
}

/// A set dimension is active only when its column exists and the selection
/// differs from the full domain of observed values.
fn active_set_dimension(
    table: &DataTable,
    column: &str,
    selection: &BTreeSet<String>,
) -> Option<usize> {
    let idx = table.column_index(column)?;
    let domain: BTreeSet<String> = distinct_labels(table, column).into_iter().collect();
    if domain.is_empty() || *selection == domain {
        None
    } else {
        Some(idx)
    }
}
