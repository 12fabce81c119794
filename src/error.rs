//! Error types for DOM wiring and configuration.
//!
//! DESIGN
//! ======
//! A missing element is reported as an error value so callers can log and
//! skip the unit; nothing here is fatal to the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while attaching a unit to the hosting document.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("javascript error in {context}: {message}")]
    Js { context: &'static str, message: String },
}

impl DomError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    /// Whether this error means "element absent", which callers treat as a skip.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl DomError {
    pub fn js(context: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

/// Failure while parsing an in-page configuration block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
