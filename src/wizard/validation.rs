//! Step validation.
//!
//! Each step owns a fixed table of rules. Validation is a pure function of
//! `(step, form)`: it never touches wizard state, the caller decides what to
//! do with the result.
//!
//! Emptiness is an exact empty-string check. Values are never trimmed, so
//! `"   "` passes a required check. For email the required check runs first
//! and short-circuits the format check.

use regex::Regex;
use std::sync::LazyLock;

use super::form::{ErrorMap, Field, FormData};
use super::step::Step;

/// Whole value must be non-whitespace runs around '@' and a later '.'.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// What a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Field must not be the empty string
    Required { missing: &'static str },
    /// Field must be present and shaped like an email address
    Email {
        missing: &'static str,
        invalid: &'static str,
    },
}

/// One row of a step's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
    pub check: Check,
}

impl Rule {
    const fn required(field: Field, missing: &'static str) -> Self {
        Self {
            field,
            check: Check::Required { missing },
        }
    }

    /// Message for `value`, or `None` when the rule passes.
    pub fn evaluate(&self, value: &str) -> Option<&'static str> {
        match self.check {
            Check::Required { missing } => value.is_empty().then_some(missing),
            Check::Email { missing, invalid } => {
                if value.is_empty() {
                    Some(missing)
                } else if !is_valid_email(value) {
                    Some(invalid)
                } else {
                    None
                }
            }
        }
    }
}

const SERVICE_RULES: &[Rule] = &[
    Rule::required(Field::Service, "Please select a service"),
    Rule::required(Field::Stylist, "Please select a stylist"),
];

const CONTACT_RULES: &[Rule] = &[
    Rule::required(Field::Name, "Name is required"),
    Rule {
        field: Field::Email,
        check: Check::Email {
            missing: "Email is required",
            invalid: "Email address is invalid",
        },
    },
    Rule::required(Field::Phone, "Phone number is required"),
];

const SCHEDULE_RULES: &[Rule] = &[
    Rule::required(Field::Date, "Please select a date"),
    Rule::required(Field::Time, "Please select a time"),
];

/// Rule table for a step. The confirmation step has none.
pub const fn rules(step: Step) -> &'static [Rule] {
    match step {
        Step::ServiceSelection => SERVICE_RULES,
        Step::PersonalDetails => CONTACT_RULES,
        Step::Schedule => SCHEDULE_RULES,
        Step::Confirmation => &[],
    }
}

/// Result of checking one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValidation {
    pub step: Step,
    pub errors: ErrorMap,
}

impl StepValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check `form` against the rules of `step`.
pub fn validate_step(step: Step, form: &FormData) -> StepValidation {
    let errors = rules(step)
        .iter()
        .filter_map(|rule| rule.evaluate(form.get(rule.field)).map(|msg| (rule.field, msg)))
        .collect();
    StepValidation { step, errors }
}

/// Email shape check: `\S+@\S+\.\S+` over the whole value.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, phone: &str) -> FormData {
        FormData {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_service_step_reports_both_fields() {
        let result = validate_step(Step::ServiceSelection, &FormData::default());
        assert!(!result.is_valid());
        assert_eq!(result.errors.get(Field::Service), Some("Please select a service"));
        assert_eq!(result.errors.get(Field::Stylist), Some("Please select a stylist"));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_only_current_step_fields_are_checked() {
        // Contact fields are empty but step 1 does not look at them
        let form = FormData {
            service: "Bridal Experience".into(),
            stylist: "Quinn Martins - Senior Stylist".into(),
            ..Default::default()
        };
        assert!(validate_step(Step::ServiceSelection, &form).is_valid());
    }

    #[test]
    fn test_contact_step_messages() {
        let result = validate_step(Step::PersonalDetails, &FormData::default());
        assert_eq!(result.errors.get(Field::Name), Some("Name is required"));
        assert_eq!(result.errors.get(Field::Email), Some("Email is required"));
        assert_eq!(result.errors.get(Field::Phone), Some("Phone number is required"));
    }

    #[test]
    fn test_invalid_email_only() {
        let result = validate_step(Step::PersonalDetails, &contact("Jane Doe", "not-an-email", "555-1234"));
        let expected: ErrorMap = [(Field::Email, "Email address is invalid")].into_iter().collect();
        assert_eq!(result.errors, expected);
    }

    #[test]
    fn test_whitespace_email_is_invalid_not_missing() {
        let result = validate_step(Step::PersonalDetails, &contact("Jane", "   ", "555"));
        assert_eq!(result.errors.get(Field::Email), Some("Email address is invalid"));
    }

    #[test]
    fn test_whitespace_name_passes_required_check() {
        let result = validate_step(Step::PersonalDetails, &contact(" ", "a@b.co", "555"));
        assert!(result.is_valid());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("jane.doe@com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa mple.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@.com"));
    }

    #[test]
    fn test_schedule_step() {
        let form = FormData {
            date: "2024-06-01".into(),
            ..Default::default()
        };
        let result = validate_step(Step::Schedule, &form);
        let expected: ErrorMap = [(Field::Time, "Please select a time")].into_iter().collect();
        assert_eq!(result.errors, expected);
    }

    #[test]
    fn test_confirmation_always_valid() {
        assert!(validate_step(Step::Confirmation, &FormData::default()).is_valid());
        assert!(rules(Step::Confirmation).is_empty());
    }

    #[test]
    fn test_notes_never_required() {
        for step in Step::all() {
            assert!(rules(step).iter().all(|r| r.field != Field::Notes));
        }
    }
}
