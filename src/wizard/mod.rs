//! Booking wizard core
//!
//! A four-step form reducer with no I/O:
//! - `step` - ordered steps, transition table and named guards
//! - `form` - form fields, form data and the error map
//! - `validation` - per-step rule tables
//! - `machine` - pure reducer and the owning `BookingWizard`
//! - `projection` - progress, step markers and the confirmation summary

mod form;
mod machine;
pub mod projection;
mod step;
pub mod validation;

pub use form::{ErrorMap, Field, FormData};
pub use machine::{Action, BookingWizard, Outcome, Reduction, WizardState};
pub use projection::{StepStatus, SummaryItem};
pub use step::{Guard, Step};
pub use validation::{StepValidation, is_valid_email, validate_step};
