//! Error handling module for the booking wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Field validation failures are NOT errors: they live in the wizard's
//! `ErrorMap`. These types cover the host around the wizard (files, terminal,
//! unknown field names, steps that stay incomplete in headless mode).

use crate::wizard::{ErrorMap, Step};
use thiserror::Error;

/// Main error type for the salon booking crate
#[derive(Error, Debug)]
pub enum BookingError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A field name that is not one of the eight form fields
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// A step position outside 1..=4
    #[error("Invalid step position: {0}")]
    InvalidStep(u8),

    /// A step refused to advance; carries the messages it produced
    #[error("{step} is incomplete: {}", describe_errors(.errors))]
    StepIncomplete { step: Step, errors: ErrorMap },
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

fn describe_errors(errors: &ErrorMap) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

// Convenient error constructors
impl BookingError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Field;

    #[test]
    fn test_error_display() {
        let err = BookingError::terminal("Failed to enable raw mode");
        assert_eq!(err.to_string(), "Terminal error: Failed to enable raw mode");

        let err = BookingError::InvalidStep(7);
        assert_eq!(err.to_string(), "Invalid step position: 7");

        let err = BookingError::UnknownField("nickname".into());
        assert_eq!(err.to_string(), "Unknown form field: nickname");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BookingError = io_err.into();
        assert!(matches!(err, BookingError::Io(_)));
    }

    #[test]
    fn test_step_incomplete_lists_messages() {
        let errors: ErrorMap = [
            (Field::Name, "Name is required"),
            (Field::Phone, "Phone number is required"),
        ]
        .into_iter()
        .collect();
        let err = BookingError::StepIncomplete {
            step: Step::PersonalDetails,
            errors,
        };
        assert_eq!(
            err.to_string(),
            "Step 2 (Personal Details) is incomplete: name: Name is required; phone: Phone number is required"
        );
    }
}
