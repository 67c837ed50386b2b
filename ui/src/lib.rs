//! Shared UI crate for Lumen. The documentation site's navigation chrome,
//! theming logic, and localization live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Top navigation bar (components/top_nav.rs)
    pub mod top_nav;
    pub use top_nav::TopNav;

    // Theme picker (components/theme_select.rs)
    pub mod theme_select;
    pub use theme_select::ThemeSelect;

    // Language selector (components/locale_select.rs)
    pub mod locale_select;
    pub use locale_select::LocaleSelect;
}
