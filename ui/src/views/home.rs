use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Surveydeck" }
            p { "An interactive report over the student activity survey." }
            p {
                "The dashboard summarizes how campus activities relate to coursework: "
                "participation, GPA, workloads, and self-reported study habits. "
                "Identity fields are masked before anything is shown or exported."
            }

            ul { class: "page-home__features",
                li { "Filter by faculty, semester, and GPA range" }
                li { "Charts with plain-language takeaways under each one" }
                li { "Export the filtered, masked table as CSV" }
            }
            p { class: "page-home__cta",
                "Open the Dashboard tab to explore the data."
            }
        }
    }
}
