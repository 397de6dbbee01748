use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::core::filter::{self, FilterState};
use crate::dashboard::sections::build_report;
use crate::dashboard::{
    DashboardHighlights, DashboardState, ExportPanel, FilterSidebar, MaskedTablePanel,
    SectionChart,
};

/// The survey report page. Loads the dataset once, wires the sidebar
/// selection signals, and recomputes the filtered view plus every report
/// section on each render.
#[component]
pub fn Dashboard() -> Element {
    let state = use_hook(DashboardState::load);

    // Option domains come from the unfiltered table so narrowing one
    // dimension never hides choices in another.
    let faculty_options = filter::faculty_options(&state.table);
    let semester_options = filter::semester_options(&state.table);
    let bounds = filter::gpa_bounds(&state.table);

    let selected_faculties = use_signal({
        let options = faculty_options.clone();
        move || options.into_iter().collect::<BTreeSet<String>>()
    });
    let selected_semesters = use_signal({
        let options = semester_options.clone();
        move || options.into_iter().collect::<BTreeSet<String>>()
    });
    let gpa_range = use_signal(|| bounds);
    let show_table = use_signal(|| false);

    let filters = FilterState {
        faculties: selected_faculties(),
        semesters: selected_semesters(),
        gpa_range: gpa_range(),
    };
    let filtered = filter::apply_filters(&state.table, &filters);
    let reports = build_report(&filtered);

    let updated_text = state
        .updated
        .as_ref()
        .map(|stamp| format!("Dataset updated {stamp}"));

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                h1 { "🎓 Student Survey Dashboard" }
                p { class: "dashboard__subtitle",
                    "Campus activities and their relationship to coursework, over masked survey responses."
                }
                if let Some(text) = updated_text {
                    p { class: "dashboard__stamp", "{text}" }
                }
            }

            if let Some(notice) = state.notice.clone() {
                div { class: "dashboard-banner",
                    p { "{notice}" }
                }
            } else {
                div { class: "dashboard__layout",
                    FilterSidebar {
                        faculty_options,
                        semester_options,
                        gpa_bounds: bounds,
                        selected_faculties,
                        selected_semesters,
                        gpa_range,
                        show_table,
                    }

                    div { class: "dashboard__content",
                        DashboardHighlights { table: filtered.clone() }

                        if show_table() {
                            MaskedTablePanel { table: filtered.clone() }
                        }

                        for report in reports.clone() {
                            section { key: "{report.key}", class: "dashboard-card dashboard-section",
                                div { class: "dashboard-card__header",
                                    h2 { "{report.title}" }
                                }
                                SectionChart { report: report.clone() }
                                p { class: "dashboard-section__caption", "{report.caption}" }
                            }
                        }

                        ExportPanel {
                            table: filtered,
                            filters,
                            sections: reports,
                        }
                    }
                }
            }
        }
    }
}
