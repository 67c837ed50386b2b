//! Theme state for the documentation site: the reader-facing
//! `light`/`dark`/`auto` choice, its persisted form, and the appearance the
//! document ends up showing.

use crate::core::storage::PreferenceStore;

/// Storage key holding the reader's explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "lumen-theme";

/// Display mode offered by the theme picker. `Auto` follows the user agent's
/// color-scheme preference instead of pinning one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Normalize a raw stored value. Anything outside the enumerated set,
    /// including absence, is `Auto`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// The appearance the document should show for this theme.
    pub fn resolve(self, prefers_light: bool) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::Auto if prefers_light => Appearance::Light,
            Self::Auto => Appearance::Dark,
        }
    }
}

/// Concrete appearance, the value written to `<html data-theme>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Persists theme choices through an injected [`PreferenceStore`].
///
/// The controller never touches the document; callers apply the returned
/// [`Appearance`] themselves, keeping this logic runnable (and testable)
/// outside a browser.
#[derive(Debug, Default)]
pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, normalized. `Auto` when nothing (or junk) is stored.
    pub fn load(&self) -> Theme {
        Theme::normalize(self.store.get(THEME_STORAGE_KEY).as_deref())
    }

    /// Record an explicit choice and return the appearance to apply.
    /// `Auto` clears the stored value instead of writing one.
    pub fn select(&self, theme: Theme, prefers_light: bool) -> Appearance {
        match theme {
            Theme::Auto => self.store.remove(THEME_STORAGE_KEY),
            explicit => self.store.set(THEME_STORAGE_KEY, explicit.as_str()),
        }
        theme.resolve(prefers_light)
    }
}
