//! Non-interactive drivers for the booking wizard.
//!
//! These run the same `BookingWizard` the terminal front end uses, feeding it
//! a complete `FormData` instead of keystrokes.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{BookingError, Result};
use crate::notify::{Notification, Notifier};
use crate::wizard::{BookingWizard, Field, FormData, Outcome, Step, StepValidation, SummaryItem, validate_step};

/// A confirmed booking: what was shown for review and what was announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub summary: Vec<SummaryItem>,
    pub notification: Notification,
}

/// Read a `FormData` JSON document. Missing fields read as empty.
pub fn load_form<P: AsRef<Path>>(path: P) -> Result<FormData> {
    let content = fs::read_to_string(&path)?;
    let form = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), "form loaded");
    Ok(form)
}

/// Drive a fresh wizard through every step with `form` and submit it.
///
/// Each field is set on the step that owns it, then the step is advanced.
/// The first step that refuses to advance aborts the run with
/// [`BookingError::StepIncomplete`].
pub fn book<N: Notifier>(form: &FormData, notifier: N) -> Result<Booking> {
    let mut wizard = BookingWizard::new(notifier);

    loop {
        let step = wizard.step();
        for &field in step.fields() {
            wizard.set_field(field, form.get(field));
        }

        if step.is_final() {
            break;
        }

        if let Outcome::Blocked { .. } = wizard.advance() {
            return Err(incomplete(step, &wizard));
        }
    }

    let summary = wizard.summary();
    match wizard.submit() {
        Outcome::Submitted(notification) => {
            info!(body = %notification.body, "headless booking confirmed");
            Ok(Booking {
                summary,
                notification,
            })
        }
        _ => Err(incomplete(wizard.step(), &wizard)),
    }
}

fn incomplete<N: Notifier>(step: Step, wizard: &BookingWizard<N>) -> BookingError {
    BookingError::StepIncomplete {
        step,
        errors: wizard.errors().clone(),
    }
}

/// Validation result of every step against `form`, in step order.
pub fn validate_form(form: &FormData) -> Vec<StepValidation> {
    Step::all().map(|step| validate_step(step, form)).collect()
}

/// Optional fields left empty, for reporting.
pub fn skipped_optional(form: &FormData) -> Vec<Field> {
    Field::all()
        .filter(|&field| field.is_optional() && form.get(field).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn complete_form() -> FormData {
        FormData {
            service: "Bridal Experience".into(),
            stylist: "Quinn Martins - Senior Stylist".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-1234".into(),
            date: "2024-06-01".into(),
            time: "2:00 PM".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_book_complete_form() {
        let mut sink: Vec<Notification> = Vec::new();
        let booking = book(&complete_form(), &mut sink).unwrap();

        assert_eq!(
            booking.notification.body,
            "Bridal Experience with Quinn Martins on 2024-06-01 at 2:00 PM."
        );
        assert_eq!(booking.summary.len(), 7);
        assert_eq!(sink, vec![booking.notification]);
    }

    #[test]
    fn test_book_stops_at_first_incomplete_step() {
        let mut form = complete_form();
        form.email = "not-an-email".into();
        form.time.clear();

        let err = book(&form, Vec::new()).unwrap_err();
        match err {
            BookingError::StepIncomplete { step, errors } => {
                assert_eq!(step, Step::PersonalDetails);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.get(Field::Email), Some("Email address is invalid"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_form_reports_every_step() {
        let report = validate_form(&FormData::default());
        assert_eq!(report.len(), 4);
        assert_eq!(report[0].errors.len(), 2);
        assert_eq!(report[1].errors.len(), 3);
        assert_eq!(report[2].errors.len(), 2);
        assert!(report[3].is_valid());
    }

    #[test]
    fn test_load_form_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"service": "Velvet Transformation", "phone": "555"}"#).unwrap();

        let form = load_form(&path).unwrap();
        assert_eq!(form.service, "Velvet Transformation");
        assert_eq!(form.phone, "555");
        assert!(form.name.is_empty());
        assert_eq!(skipped_optional(&form), vec![Field::Notes]);
    }

    #[test]
    fn test_load_form_rejects_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(load_form(&path), Err(BookingError::Json(_))));
        assert!(matches!(
            load_form(dir.path().join("missing.json")),
            Err(BookingError::Io(_))
        ));
    }
}
