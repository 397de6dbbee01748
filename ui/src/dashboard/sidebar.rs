use std::collections::BTreeSet;

use dioxus::prelude::*;

/// Sidebar filter controls. The sidebar owns no data: it edits the selection
/// signals and the dashboard recomputes the whole report on every change.
/// Dimensions whose column is absent from the dataset simply don't render.
#[component]
pub fn FilterSidebar(
    faculty_options: Vec<String>,
    semester_options: Vec<String>,
    gpa_bounds: Option<(f64, f64)>,
    selected_faculties: Signal<BTreeSet<String>>,
    selected_semesters: Signal<BTreeSet<String>>,
    gpa_range: Signal<Option<(f64, f64)>>,
    show_table: Signal<bool>,
) -> Element {
    let mut gpa_range = gpa_range;
    let mut show_table = show_table;

    let range = gpa_range();
    let range_text = match range {
        Some((lo, hi)) => format!("{lo:.2} – {hi:.2}"),
        None => String::new(),
    };

    rsx! {
        aside { class: "dashboard-sidebar",
            h2 { class: "dashboard-sidebar__title", "🔍 Filters" }

            if !faculty_options.is_empty() {
                {option_group("Faculty", &faculty_options, selected_faculties)}
            }

            if !semester_options.is_empty() {
                {option_group("Semester", &semester_options, selected_semesters)}
            }

            if let Some((min_bound, max_bound)) = gpa_bounds {
                div { class: "dashboard-sidebar__group",
                    h3 { "GPA range" }
                    span { class: "dashboard-sidebar__range", "{range_text}" }
                    label { class: "dashboard-sidebar__field",
                        span { "From" }
                        input {
                            r#type: "number",
                            step: "0.1",
                            min: "{min_bound}",
                            max: "{max_bound}",
                            value: range.map(|(lo, _)| lo.to_string()).unwrap_or_default(),
                            oninput: move |evt| {
                                if let Ok(parsed) = evt.value().parse::<f64>() {
                                    gpa_range.with_mut(|r| {
                                        if let Some((lo, hi)) = r {
                                            *lo = parsed.clamp(min_bound, *hi);
                                        }
                                    });
                                }
                            },
                        }
                    }
                    label { class: "dashboard-sidebar__field",
                        span { "To" }
                        input {
                            r#type: "number",
                            step: "0.1",
                            min: "{min_bound}",
                            max: "{max_bound}",
                            value: range.map(|(_, hi)| hi.to_string()).unwrap_or_default(),
                            oninput: move |evt| {
                                if let Ok(parsed) = evt.value().parse::<f64>() {
                                    gpa_range.with_mut(|r| {
                                        if let Some((lo, hi)) = r {
                                            *hi = parsed.clamp(*lo, max_bound);
                                        }
                                    });
                                }
                            },
                        }
                    }
                }
            }

            div { class: "dashboard-sidebar__group",
                label { class: "dashboard-sidebar__toggle",
                    input {
                        r#type: "checkbox",
                        checked: show_table(),
                        oninput: move |evt| show_table.set(evt.checked()),
                    }
                    span { "Show masked data table" }
                }
            }
        }
    }
}

/// One multi-select group rendered as a checkbox list; defaults come in with
/// every option selected (the no-op filter state).
fn option_group(
    title: &'static str,
    options: &[String],
    mut selection: Signal<BTreeSet<String>>,
) -> Element {
    let current = selection();

    rsx! {
        div { class: "dashboard-sidebar__group",
            h3 { "{title}" }
            ul { class: "dashboard-sidebar__options",
                for option in options.iter().cloned() {
                    li {
                        label { class: "dashboard-sidebar__option",
                            input {
                                r#type: "checkbox",
                                checked: current.contains(&option),
                                oninput: {
                                    let option = option.clone();
                                    move |evt: FormEvent| {
                                        let option = option.clone();
                                        selection.with_mut(|set| {
                                            if evt.checked() {
                                                set.insert(option);
                                            } else {
                                                set.remove(&option);
                                            }
                                        });
                                    }
                                },
                            }
                            span { "{option}" }
                        }
                    }
                }
            }
        }
    }
}
