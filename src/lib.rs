//! Salon Booking Library
//!
//! A four-step appointment booking wizard: a pure state machine core, a
//! ratatui front end and headless drivers for the command line.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod headless;
pub mod notify;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use config::BookingConfig;
pub use error::{BookingError, Result};
pub use headless::{Booking, book, validate_form};
pub use notify::{LogNotifier, Notification, Notifier, ToastQueue};
pub use wizard::{
    Action, BookingWizard, ErrorMap, Field, FormData, Outcome, Reduction, Step, StepStatus,
    StepValidation, SummaryItem, WizardState, validate_step,
};
