#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (sidebar filters,
  report cards, charts, and the export panel) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for charts, sidebar controls, banners, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".dashboard__layout",
    ".dashboard__content",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    // Degraded-load banner
    ".dashboard-banner",
    // Cards
    ".dashboard-card {",
    ".dashboard-card__header",
    ".dashboard-card__meta",
    ".dashboard-card__placeholder",
    ".dashboard-section__caption",
    // Sidebar filters
    ".dashboard-sidebar {",
    ".dashboard-sidebar__group",
    ".dashboard-sidebar__options",
    ".dashboard-sidebar__option",
    ".dashboard-sidebar__field",
    ".dashboard-sidebar__toggle",
    // Highlights
    ".dashboard-highlights",
    ".dashboard-highlight__label",
    ".dashboard-highlight__value",
    // Masked table
    ".dashboard-table__scroll",
    ".dashboard-table__grid",
    // Charts
    ".section-chart__bars--vertical",
    ".section-chart__bars--horizontal",
    ".section-chart__bar-track",
    ".section-chart__bar-fill",
    ".section-chart__donut",
    ".section-chart__legend-swatch",
    ".section-chart__cards",
    ".section-chart__metric-value",
    // Export panel
    ".dashboard-export__summary",
    ".dashboard-export__actions",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
