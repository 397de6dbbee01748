use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (mirrors legacy Navbar so styling applies here too)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const LABEL_HOME: &str = "Home";
const LABEL_DASHBOARD: &str = "Dashboard";
const TAGLINE: &str = "student survey reporting";

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// If a builder is registered, `AppNavbar` renders its own nav from the
/// supplied links. If no builder is registered, it falls back to any raw
/// `children` passed (legacy) so existing code does not break.
///
/// Wiring steps for a platform crate (desktop/web):
/// 1. Define functions returning `Link { to: Route::..., class: "navbar__link", ... }`.
/// 2. Call `ui::components::app_navbar::register_nav(builder)` before rendering
///    the root (e.g. at top of `App()`).
/// 3. Use `AppNavbar {}` with no manual nav link children.
pub struct NavBuilder {
    // Each closure must return a Link (or element styled as a nav link) whose
    // children will be exactly the label string passed in.
    pub home: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    // Build internal nav if a NavBuilder is registered; each closure receives
    // the label and returns a Link that already contains it as its child.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().and_then(|b| {
        let home = (b.home)(LABEL_HOME);
        let dashboard = (b.dashboard)(LABEL_DASHBOARD);

        rsx! {
            nav { class: "navbar__links",
                {home}
                {dashboard}
            }
        }
        .ok()
    });

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Surveydeck" }
                    }
                    span { class: "navbar__brand-subtitle", "{TAGLINE}" }
                }

                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
