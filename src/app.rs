//! Page bootstrap: mounts every interactive unit against the document.
//!
//! Units are independent; one failing or missing never prevents the others
//! from mounting.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::error::DomError;

/// Result of mounting one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// The hosting page has no markup for this unit.
    Skipped(String),
    Failed(String),
}

impl MountOutcome {
    #[must_use]
    pub fn from_result(result: Result<(), DomError>) -> Self {
        match result {
            Ok(()) => Self::Mounted,
            Err(e) if e.is_skip() => Self::Skipped(e.to_string()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::MountOutcome;
    use crate::config::SiteConfig;
    use crate::error::DomError;
    use crate::{filter, form, nav, reveal, theme};

    pub fn mount_all(document: &Document, config: &SiteConfig) {
        let timings = config.timings;
        settle("theme", theme::mount(document, &config.theme));
        settle("nav", nav::mount(document, &config.nav));
        settle("filter", filter::mount(document, &config.filter, timings));
        settle("form", form::mount(document, &config.form, timings));
        settle("reveal", reveal::mount_reveal(document, &config.reveal));
        settle("progress", reveal::mount_progress(document, &config.reveal, timings));
    }

    fn settle(unit: &str, result: Result<(), DomError>) {
        match MountOutcome::from_result(result) {
            MountOutcome::Mounted => log::debug!("{unit}: mounted"),
            MountOutcome::Skipped(reason) => log::debug!("{unit}: skipped ({reason})"),
            MountOutcome::Failed(reason) => log::warn!("{unit}: {reason}"),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount_all;
