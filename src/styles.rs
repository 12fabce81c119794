//! Animation stylesheet injected at startup.
//!
//! Reveal targets start hidden and offset; `.animate-in` brings them back.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

pub const STYLE_ELEMENT_ID: &str = "portfolio-animations";

pub const ANIMATION_CSS: &str = "
.skill-card,
.project-card,
.course-card,
.timeline-item {
    opacity: 0;
    transform: translateY(30px);
    transition: all 0.6s ease;
}

.animate-in {
    opacity: 1;
    transform: translateY(0);
}

.progress-fill {
    transition: width 1s ease-in-out;
}

.form-input.error {
    border-color: #ef4444;
}
";

/// Append the animation stylesheet to `<head>` unless already present.
#[cfg(feature = "hydrate")]
pub fn inject(document: &web_sys::Document) -> Result<(), crate::error::DomError> {
    use crate::error::DomError;

    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| DomError::missing("head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| DomError::js("createElement", &e))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(ANIMATION_CSS));
    head.append_child(&style)
        .map_err(|e| DomError::js("appendChild", &e))?;
    Ok(())
}
