//! Page configuration: selectors, timings, and texts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the markup the portfolio page ships with. A page may
//! override any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "timings": { "submit_delay_ms": 500 } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Top-level configuration for every interactive unit.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub filter: FilterConfig,
    pub form: FormConfig,
    pub reveal: RevealConfig,
    pub timings: Timings,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub icon_selector: String,
    pub label_selector: String,
    pub ready_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            toggle_id: "themeToggle".to_owned(),
            icon_selector: "i".to_owned(),
            label_selector: ".theme-switcher__text".to_owned(),
            ready_class: "theme-initialized".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_id: String,
    pub menu_selector: String,
    pub link_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: "navToggle".to_owned(),
            menu_selector: ".nav__menu".to_owned(),
            link_selector: ".nav__link".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub button_selector: String,
    pub card_selector: String,
    pub filter_attribute: String,
    pub category_attribute: String,
    pub active_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_selector: ".filter-btn".to_owned(),
            card_selector: ".project-card".to_owned(),
            filter_attribute: "data-filter".to_owned(),
            category_attribute: "data-category".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub field_selector: String,
    pub required_selector: String,
    pub submit_selector: String,
    pub error_class: String,
    pub sending_html: String,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_owned(),
            field_selector: "input, textarea".to_owned(),
            required_selector: "input[required], textarea[required]".to_owned(),
            submit_selector: "button[type=\"submit\"]".to_owned(),
            error_class: "error".to_owned(),
            sending_html: "<i class=\"fas fa-spinner fa-spin\"></i> Отправка...".to_owned(),
            success_message: "Сообщение успешно отправлено! Я свяжусь с вами в ближайшее время.".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub target_selector: String,
    pub reveal_class: String,
    pub progress_selector: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_selector: ".skill-card, .project-card, .course-card, .timeline-item".to_owned(),
            reveal_class: "animate-in".to_owned(),
            progress_selector: ".progress-fill".to_owned(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

/// Delays for timer-sequenced visual transitions, in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    pub card_show_delay_ms: u32,
    pub card_hide_delay_ms: u32,
    pub progress_delay_ms: u32,
    pub submit_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            card_show_delay_ms: 100,
            card_hide_delay_ms: 300,
            progress_delay_ms: 300,
            submit_delay_ms: 2000,
        }
    }
}

/// Read the inline configuration block from the hosting document.
///
/// Falls back to defaults when the block is absent or malformed.
#[cfg(feature = "hydrate")]
pub fn load(document: &web_sys::Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            SiteConfig::default()
        }
    }
}
