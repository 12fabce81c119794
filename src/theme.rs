//! Light/dark theme preference and its toggle button.
//!
//! Reads the stored preference, mirrors it onto the `data-theme` attribute of
//! the `<html>` element, and flips it on toggle-button clicks. Every toggle is
//! written back to storage under `ThemeConfig::storage_key`.
//!
//! TRADE-OFFS
//! ==========
//! An inline head script may already have set `data-theme` before this module
//! runs (to avoid a flash of the wrong theme). A valid stored value still wins,
//! so the two can never disagree after mount.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::storage::PreferenceStore;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Two-valued display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or attribute value; anything but `light`/`dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle button: it shows the theme a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Темная тема",
            Self::Dark => "Светлая тема",
        }
    }
}

/// Pick the initial theme: stored value, then a pre-set root attribute, then light.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, root_attr: Option<&str>) -> Theme {
    stored
        .and_then(Theme::parse)
        .or_else(|| root_attr.and_then(Theme::parse))
        .unwrap_or_default()
}

/// Current theme plus the storage key it persists under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
    key: String,
}

impl ThemeState {
    pub fn load(store: &dyn PreferenceStore, key: &str, root_attr: Option<&str>) -> Self {
        let stored = store.get(key);
        Self {
            current: resolve_initial(stored.as_deref(), root_attr),
            key: key.to_owned(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self, store: &dyn PreferenceStore) -> Theme {
        self.current = self.current.toggled();
        store.set(&self.key, self.current.as_str());
        self.current
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::{THEME_ATTRIBUTE, Theme, ThemeState};
    use crate::config::ThemeConfig;
    use crate::dom;
    use crate::error::DomError;
    use crate::storage::LocalStorage;

    /// Apply the stored theme and bind the toggle button.
    ///
    /// The theme is applied even when the toggle button is absent; only the
    /// click binding is skipped in that case.
    pub fn mount(document: &Document, config: &ThemeConfig) -> Result<(), DomError> {
        let root = document
            .document_element()
            .ok_or(DomError::Unavailable("documentElement"))?;
        let state = ThemeState::load(&LocalStorage, &config.storage_key, root.get_attribute(THEME_ATTRIBUTE).as_deref());
        apply(&root, state.current());

        if let Some(body) = document.body() {
            let ready_class = config.ready_class.clone();
            dom::on_window_load(document, move || dom::set_class(&body, &ready_class, true))?;
        }

        let toggle = dom::by_id(document, &config.toggle_id)?;
        render_toggle(&toggle, config, state.current());

        let state = Rc::new(RefCell::new(state));
        let config = config.clone();
        let button = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            let next = state.borrow_mut().toggle(&LocalStorage);
            apply(&root, next);
            render_toggle(&button, &config, next);
            log::debug!("theme switched to {}", next.as_str());
        })
    }

    fn apply(root: &Element, theme: Theme) {
        dom::set_attribute(root, THEME_ATTRIBUTE, theme.as_str());
    }

    fn render_toggle(toggle: &Element, config: &ThemeConfig, theme: Theme) {
        if let Ok(icon) = dom::query_in(toggle, &config.icon_selector) {
            icon.set_class_name(theme.icon_class());
        }
        if let Ok(label) = dom::query_in(toggle, &config.label_selector) {
            label.set_text_content(Some(theme.toggle_label()));
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;
