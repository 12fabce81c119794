//! Contact form validation and simulated submission.
//!
//! DESIGN
//! ======
//! Validation is pure: the browser layer snapshots each field into a
//! `FieldSnapshot`, validates it here, and renders the outcome as inline text
//! in the element whose id is the field id plus `Error`. Submission never
//! reaches the network; a timer stands in for the request.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

// =============================================================================
// TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// Kind of an `<input>` from its `type` attribute.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

/// Inline validation message for one field.
#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Это поле обязательно для заполнения")]
    Required,
    #[error("Введите корректный email адрес")]
    InvalidEmail,
}

/// Point-in-time copy of a form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FieldSnapshot {
    /// # Errors
    ///
    /// Returns the single `FieldError` that applies to this field, if any.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_value(self.kind, self.required, &self.value)
    }

    #[must_use]
    pub fn error_element_id(&self) -> String {
        error_element_id(&self.id)
    }
}

/// Outcome of validating every required field on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    pub errors: Vec<(String, FieldError)>,
}

impl SubmissionReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error_for(&self, field_id: &str) -> Option<FieldError> {
        self.errors.iter().find(|(id, _)| id == field_id).map(|(_, e)| *e)
    }
}

/// Guards against a second submit while the simulated request is pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
}

impl SubmissionState {
    /// Move to `Sending`; false if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Sending;
                true
            }
            Self::Sending => false,
        }
    }

    pub fn finish(&mut self) {
        *self = Self::Idle;
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    match &*EMAIL_RE {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

/// Validate a raw control value.
///
/// # Errors
///
/// `Required` when a required value is blank; `InvalidEmail` when an email
/// value is present but malformed. Never both.
pub fn validate_value(kind: FieldKind, required: bool, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return if required { Err(FieldError::Required) } else { Ok(()) };
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Validate the required fields of a submission.
pub fn validate_submission<'a, I>(fields: I) -> SubmissionReport
where
    I: IntoIterator<Item = &'a FieldSnapshot>,
{
    let errors = fields
        .into_iter()
        .filter(|field| field.required)
        .filter_map(|field| field.validate().err().map(|e| (field.id.clone(), e)))
        .collect();
    SubmissionReport { errors }
}

/// Id of the inline error element paired with `field_id`.
#[must_use]
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}Error")
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

    use super::{FieldError, FieldKind, FieldSnapshot, SubmissionState, validate_submission};
    use crate::config::{FormConfig, Timings};
    use crate::dom;
    use crate::error::DomError;

    #[derive(Clone)]
    enum Field {
        Input(HtmlInputElement),
        TextArea(HtmlTextAreaElement),
    }

    impl Field {
        fn from_element(element: &Element) -> Option<Self> {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                return Some(Self::Input(input.clone()));
            }
            element.dyn_ref::<HtmlTextAreaElement>().cloned().map(Self::TextArea)
        }

        fn element(&self) -> &Element {
            match self {
                Self::Input(el) => el.as_ref(),
                Self::TextArea(el) => el.as_ref(),
            }
        }

        fn snapshot(&self) -> FieldSnapshot {
            match self {
                Self::Input(el) => FieldSnapshot {
                    id: el.id(),
                    kind: FieldKind::from_input_type(&el.type_()),
                    required: el.required(),
                    value: el.value(),
                },
                Self::TextArea(el) => FieldSnapshot {
                    id: el.id(),
                    kind: FieldKind::TextArea,
                    required: el.required(),
                    value: el.value(),
                },
            }
        }
    }

    struct Context {
        document: Document,
        form: HtmlFormElement,
        config: FormConfig,
        timings: Timings,
        state: Cell<SubmissionState>,
    }

    /// Bind field validation and submit handling on the contact form.
    pub fn mount(document: &Document, config: &FormConfig, timings: Timings) -> Result<(), DomError> {
        let form = dom::by_id(document, &config.form_id)?
            .dyn_ref::<HtmlFormElement>()
            .cloned()
            .ok_or_else(|| DomError::missing(format!("form#{}", config.form_id)))?;
        let ctx = Rc::new(Context {
            document: document.clone(),
            form: form.clone(),
            config: config.clone(),
            timings,
            state: Cell::new(SubmissionState::Idle),
        });

        for field in dom::query_all_in(&form, &config.field_selector)
            .iter()
            .filter_map(Field::from_element)
        {
            let (on_blur, ctx_blur) = (field.clone(), Rc::clone(&ctx));
            dom::listen(field.element(), "blur", move |_| {
                render(&ctx_blur, &on_blur, on_blur.snapshot().validate());
            })?;
            let (on_input, ctx_input) = (field.clone(), Rc::clone(&ctx));
            dom::listen(field.element(), "input", move |_| {
                render(&ctx_input, &on_input, Ok(()));
            })?;
        }

        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            submit(&ctx);
        })
    }

    fn submit(ctx: &Rc<Context>) {
        let fields: Vec<Field> = dom::query_all_in(&ctx.form, &ctx.config.required_selector)
            .iter()
            .filter_map(Field::from_element)
            .collect();
        let snapshots: Vec<FieldSnapshot> = fields.iter().map(Field::snapshot).collect();
        let report = validate_submission(&snapshots);

        for (field, snapshot) in fields.iter().zip(&snapshots) {
            let outcome = report.error_for(&snapshot.id).map_or(Ok(()), Err);
            render(ctx, field, outcome);
        }
        if !report.is_valid() {
            log::debug!("contact form blocked: {} invalid field(s)", report.errors.len());
            return;
        }

        let mut state = ctx.state.get();
        if !state.begin() {
            return;
        }
        ctx.state.set(state);
        simulate_send(ctx);
    }

    fn simulate_send(ctx: &Rc<Context>) {
        let button = match dom::query_in(&ctx.form, &ctx.config.submit_selector) {
            Ok(el) => el.dyn_ref::<HtmlButtonElement>().cloned(),
            Err(e) => {
                log::debug!("contact form has no submit button: {e}");
                None
            }
        };
        let original_html = button.as_ref().map(|b| b.inner_html());
        if let Some(button) = &button {
            button.set_inner_html(&ctx.config.sending_html);
            button.set_disabled(true);
        }

        let ctx = Rc::clone(ctx);
        dom::after(ctx.timings.submit_delay_ms, move || {
            if let Ok(window) = dom::window() {
                dom::report(window.alert_with_message(&ctx.config.success_message), "alert");
            }
            ctx.form.reset();
            if let (Some(button), Some(html)) = (button, original_html) {
                button.set_inner_html(&html);
                button.set_disabled(false);
            }
            let mut state = ctx.state.get();
            state.finish();
            ctx.state.set(state);
            log::info!("contact form submitted");
        });
    }

    fn render(ctx: &Context, field: &Field, outcome: Result<(), FieldError>) {
        let element = field.element();
        dom::set_class(element, &ctx.config.error_class, outcome.is_err());

        let Ok(error_el) = dom::by_id(&ctx.document, &field.snapshot().error_element_id()) else {
            return;
        };
        match outcome {
            Err(e) => {
                error_el.set_text_content(Some(&e.to_string()));
                dom::set_style(&error_el, "display", "block");
            }
            Ok(()) => dom::set_style(&error_el, "display", "none"),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;
