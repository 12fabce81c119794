use pretty_assertions::assert_eq;

use super::*;

fn field(id: &str, kind: FieldKind, required: bool, value: &str) -> FieldSnapshot {
    FieldSnapshot {
        id: id.to_owned(),
        kind,
        required,
        value: value.to_owned(),
    }
}

fn contact_fields(name: &str, email: &str, message: &str) -> Vec<FieldSnapshot> {
    vec![
        field("name", FieldKind::Text, true, name),
        field("email", FieldKind::Email, true, email),
        field("subject", FieldKind::Text, false, ""),
        field("message", FieldKind::TextArea, true, message),
    ]
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_pattern_accepts_plain_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for bad in ["abc@", "abc", "@example.com", "user@example", "user @example.com", "a@b@c.d"] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

// =============================================================
// validate_value
// =============================================================

#[test]
fn required_blank_value_is_required_error() {
    assert_eq!(validate_value(FieldKind::Text, true, ""), Err(FieldError::Required));
    assert_eq!(validate_value(FieldKind::TextArea, true, "   \n"), Err(FieldError::Required));
}

#[test]
fn required_blank_email_reports_required_not_format() {
    assert_eq!(validate_value(FieldKind::Email, true, "  "), Err(FieldError::Required));
}

#[test]
fn optional_blank_value_is_ok() {
    assert_eq!(validate_value(FieldKind::Email, false, ""), Ok(()));
}

#[test]
fn malformed_email_is_format_error() {
    assert_eq!(validate_value(FieldKind::Email, true, "abc@"), Err(FieldError::InvalidEmail));
    assert_eq!(validate_value(FieldKind::Email, false, "abc@"), Err(FieldError::InvalidEmail));
}

#[test]
fn email_value_is_trimmed_before_matching() {
    assert_eq!(validate_value(FieldKind::Email, true, "  user@example.com  "), Ok(()));
}

#[test]
fn text_fields_skip_email_check() {
    assert_eq!(validate_value(FieldKind::Text, true, "abc@"), Ok(()));
}

#[test]
fn error_messages() {
    assert_eq!(FieldError::Required.to_string(), "Это поле обязательно для заполнения");
    assert_eq!(FieldError::InvalidEmail.to_string(), "Введите корректный email адрес");
}

#[test]
fn input_type_maps_to_kind() {
    assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
    assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
    assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
    assert_eq!(FieldKind::from_input_type(""), FieldKind::Text);
}

#[test]
fn error_element_id_appends_suffix() {
    assert_eq!(error_element_id("email"), "emailError");
    assert_eq!(field("message", FieldKind::TextArea, true, "").error_element_id(), "messageError");
}

// =============================================================
// validate_submission
// =============================================================

#[test]
fn valid_submission_has_no_errors() {
    let fields = contact_fields("Ann", "ann@example.com", "Hello");
    let report = validate_submission(&fields);
    assert!(report.is_valid());
}

#[test]
fn empty_required_field_yields_exactly_one_error_for_it() {
    let fields = contact_fields("", "ann@example.com", "Hello");
    let report = validate_submission(&fields);
    assert!(!report.is_valid());
    assert_eq!(report.errors, vec![("name".to_owned(), FieldError::Required)]);
}

#[test]
fn malformed_email_blocks_submission() {
    let fields = contact_fields("Ann", "abc@", "Hello");
    let report = validate_submission(&fields);
    assert!(!report.is_valid());
    assert_eq!(report.error_for("email"), Some(FieldError::InvalidEmail));
    assert_eq!(report.error_for("name"), None);
}

#[test]
fn every_invalid_required_field_is_reported_in_order() {
    let fields = contact_fields("", "", " ");
    let report = validate_submission(&fields);
    assert_eq!(
        report.errors,
        vec![
            ("name".to_owned(), FieldError::Required),
            ("email".to_owned(), FieldError::Required),
            ("message".to_owned(), FieldError::Required),
        ]
    );
}

#[test]
fn optional_fields_are_not_checked_on_submit() {
    let mut fields = contact_fields("Ann", "ann@example.com", "Hello");
    fields.push(field("backup", FieldKind::Email, false, "abc@"));
    assert!(validate_submission(&fields).is_valid());
}

// =============================================================
// SubmissionState
// =============================================================

#[test]
fn submission_state_blocks_double_submit() {
    let mut state = SubmissionState::default();
    assert!(state.begin());
    assert_eq!(state, SubmissionState::Sending);
    assert!(!state.begin());
}

#[test]
fn submission_state_allows_resubmit_after_finish() {
    let mut state = SubmissionState::default();
    assert!(state.begin());
    state.finish();
    assert_eq!(state, SubmissionState::Idle);
    assert!(state.begin());
}
