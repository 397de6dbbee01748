//! Shared UI crate for Surveydeck. Cross-platform logic and views live here.

pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Application navbar with platform-registered links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
