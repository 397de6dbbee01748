use dioxus::prelude::*;

use crate::core::table::DataTable;

/// The filtered response table. Identity fields were masked at load time, so
/// this panel (and the CSV it feeds) can never leak an unmasked value.
#[component]
pub fn MaskedTablePanel(table: DataTable) -> Element {
    let headers: Vec<String> = table.columns().to_vec();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.display()).collect())
        .collect();
    let row_count = rows.len();

    rsx! {
        section { class: "dashboard-card dashboard-table",
            div { class: "dashboard-card__header",
                h2 { "Response Table (masked)" }
                span { class: "dashboard-card__meta", "{row_count} rows" }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__placeholder",
                    "No rows match the current filters."
                }
            } else {
                div { class: "dashboard-table__scroll",
                    table { class: "dashboard-table__grid",
                        thead {
                            tr {
                                for header in headers.iter() {
                                    th { "{header}" }
                                }
                            }
                        }
                        tbody {
                            for row in rows.into_iter() {
                                tr {
                                    for cell in row.into_iter() {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
