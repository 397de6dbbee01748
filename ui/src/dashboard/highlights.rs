use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::core::{columns, format, table::DataTable};

/// Headline metric cards over the currently filtered table. Metrics whose
/// backing column is missing render as an em dash rather than vanishing, so
/// the card grid keeps its shape across datasets.
#[component]
pub fn DashboardHighlights(table: DataTable) -> Element {
    let respondents = table.len();

    let gpa_values: Vec<f64> = table
        .column_values(columns::GPA)
        .filter_map(|v| v.as_number())
        .collect();

    let mean_gpa = if gpa_values.is_empty() {
        "—".to_string()
    } else {
        format::format_decimal(
            gpa_values.iter().sum::<f64>() / gpa_values.len() as f64,
            2,
        )
    };
    // Post-filter statistics, distinct from the sidebar's base-table bounds.
    let highest_gpa = gpa_values
        .iter()
        .copied()
        .fold(f64::NAN, f64::max);
    let lowest_gpa = gpa_values
        .iter()
        .copied()
        .fold(f64::NAN, f64::min);
    let highest_gpa = if highest_gpa.is_finite() {
        format::format_decimal(highest_gpa, 2)
    } else {
        "—".to_string()
    };
    let lowest_gpa = if lowest_gpa.is_finite() {
        format::format_decimal(lowest_gpa, 2)
    } else {
        "—".to_string()
    };

    let faculty_count = if table.has_column(columns::FACULTY) {
        let distinct: BTreeSet<String> = table
            .column_values(columns::FACULTY)
            .filter(|v| !v.is_null())
            .map(|v| v.display())
            .collect();
        distinct.len().to_string()
    } else {
        "—".to_string()
    };

    let active_count = if table.has_column(columns::JOINS_ACTIVITIES) {
        table
            .column_values(columns::JOINS_ACTIVITIES)
            .filter(|v| {
                v.display()
                    .trim()
                    .eq_ignore_ascii_case(columns::PARTICIPATION_YES)
            })
            .count()
            .to_string()
    } else {
        "—".to_string()
    };

    rsx! {
        section { class: "dashboard-card dashboard-highlights-card",
            div { class: "dashboard-card__header",
                h2 { "Highlights" }
                span { class: "dashboard-card__meta", "Computed over the filtered table" }
            }

            div { class: "dashboard-highlights",
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "Respondents" }
                    strong { class: "dashboard-highlight__value", "{respondents}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "Average GPA" }
                    strong { class: "dashboard-highlight__value", "{mean_gpa}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "Faculties" }
                    strong { class: "dashboard-highlight__value", "{faculty_count}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "Highest GPA" }
                    strong { class: "dashboard-highlight__value", "{highest_gpa}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "Lowest GPA" }
                    strong { class: "dashboard-highlight__value", "{lowest_gpa}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "Active in campus activities" }
                    strong { class: "dashboard-highlight__value", "{active_count}" }
                }
            }
        }
    }
}
