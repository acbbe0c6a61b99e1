use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Just saying hi.".to_owned(),
    }
}

// =============================================================
// Completeness
// =============================================================

#[test]
fn default_form_is_incomplete() {
    assert!(!ContactForm::default().is_complete());
}

#[test]
fn filled_form_is_complete() {
    assert!(filled().is_complete());
}

#[test]
fn whitespace_only_field_is_incomplete() {
    let mut form = filled();
    form.subject = "   ".to_owned();
    assert!(!form.is_complete());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_passes() {
    assert!(filled().validate().is_ok());
}

#[test]
fn blank_field_reported() {
    let mut form = filled();
    form.message = String::new();
    assert!(form.validate().is_err());
}

#[test]
fn email_without_at_rejected() {
    let mut form = filled();
    form.email = "ada.example.com".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn email_without_dotted_domain_rejected() {
    let mut form = filled();
    form.email = "ada@localhost".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn email_with_empty_local_part_rejected() {
    let mut form = filled();
    form.email = "@example.com".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn email_with_surrounding_whitespace_accepted() {
    let mut form = filled();
    form.email = "  ada@example.com ".to_owned();
    assert!(form.validate().is_ok());
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_defaults_idle() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
}
