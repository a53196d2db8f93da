//! The wizard state machine.
//!
//! [`WizardState::reduce`] is a pure reducer: it takes the current state and
//! an [`Action`] and returns a brand-new state plus what happened. The
//! [`BookingWizard`] owns one state, swaps it whole on every action and
//! forwards confirmation notifications to its [`Notifier`].

use tracing::{debug, info};

use super::form::{ErrorMap, Field, FormData};
use super::projection::{self, StepStatus, SummaryItem};
use super::step::Step;
use super::validation::validate_step;
use crate::error::{BookingError, Result};
use crate::notify::{Notification, Notifier};

/// Everything the wizard knows. Owned exclusively by the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub form: FormData,
    pub errors: ErrorMap,
}

/// User input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField { field: Field, value: String },
    SelectService(String),
    Advance,
    Retreat,
    Submit,
}

/// What an action did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A field was written; `cleared_error` says whether an error entry went away
    FieldUpdated { field: Field, cleared_error: bool },
    /// The position changed
    Moved { from: Step, to: Step },
    /// The step's guard failed; errors were committed, position unchanged
    Blocked { step: Step, failing: usize },
    /// Nothing moved (retreat on the first step, advance on the last)
    Unchanged,
    /// A booking was confirmed and the wizard was reset
    Submitted(Notification),
}

/// Result of reducing one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub state: WizardState,
    pub outcome: Outcome,
}

impl WizardState {
    /// State at mount and after every successful submit.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Apply `action` and return the next state. Never mutates `self`.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Reduction {
        match action {
            Action::SetField { field, value } => self.edit(field, value),
            Action::SelectService(value) => self.edit(Field::Service, value),
            Action::Advance => self.advance(),
            Action::Retreat => self.retreat(),
            Action::Submit => self.submit(),
        }
    }

    fn edit(&self, field: Field, value: String) -> Reduction {
        let cleared_error = self.errors.contains(field);
        Reduction {
            state: Self {
                step: self.step,
                form: self.form.with(field, value),
                errors: self.errors.without(field),
            },
            outcome: Outcome::FieldUpdated {
                field,
                cleared_error,
            },
        }
    }

    /// Commit the guard's errors and report the block.
    fn blocked(&self, errors: ErrorMap) -> Reduction {
        let failing = errors.len();
        Reduction {
            state: Self {
                step: self.step,
                form: self.form.clone(),
                errors,
            },
            outcome: Outcome::Blocked {
                step: self.step,
                failing,
            },
        }
    }

    fn advance(&self) -> Reduction {
        let check = validate_step(self.step, &self.form);
        if !check.is_valid() {
            return self.blocked(check.errors);
        }

        let to = self.step.next().unwrap_or(self.step);
        let outcome = if to == self.step {
            Outcome::Unchanged
        } else {
            Outcome::Moved {
                from: self.step,
                to,
            }
        };
        Reduction {
            state: Self {
                step: to,
                form: self.form.clone(),
                errors: ErrorMap::new(),
            },
            outcome,
        }
    }

    fn retreat(&self) -> Reduction {
        match self.step.previous() {
            Some(to) => Reduction {
                state: Self {
                    step: to,
                    ..self.clone()
                },
                outcome: Outcome::Moved {
                    from: self.step,
                    to,
                },
            },
            None => Reduction {
                state: self.clone(),
                outcome: Outcome::Unchanged,
            },
        }
    }

    fn submit(&self) -> Reduction {
        let check = validate_step(self.step, &self.form);
        if !check.is_valid() {
            return self.blocked(check.errors);
        }

        let notification = Notification::booking_confirmed(projection::confirmation_message(&self.form));
        Reduction {
            state: Self::initial(),
            outcome: Outcome::Submitted(notification),
        }
    }

    /// Fill fraction for the progress indicator.
    pub fn progress(&self) -> f64 {
        projection::progress_fraction(self.step)
    }

    /// Status of every step relative to the current one.
    pub fn step_markers(&self) -> Vec<(Step, StepStatus)> {
        projection::step_markers(self.step)
    }

    /// Confirmation summary of the current form.
    pub fn summary(&self) -> Vec<SummaryItem> {
        projection::summary(&self.form)
    }
}

/// The booking wizard: one exclusively owned state plus a notification sink.
#[derive(Debug)]
pub struct BookingWizard<N: Notifier> {
    state: WizardState,
    notifier: N,
}

impl<N: Notifier + Default> Default for BookingWizard<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

impl<N: Notifier> BookingWizard<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: WizardState::initial(),
            notifier,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn form(&self) -> &FormData {
        &self.state.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Apply one action, replacing the state as a whole.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let Reduction { state, outcome } = self.state.reduce(action);
        self.state = state;

        match &outcome {
            Outcome::FieldUpdated {
                field,
                cleared_error,
            } => debug!(%field, cleared_error, "field updated"),
            Outcome::Moved { from, to } => info!(from = from.position(), to = to.position(), "step changed"),
            Outcome::Blocked { step, failing } => debug!(
                step = step.position(),
                guard = %step.guard(),
                failing,
                "transition blocked"
            ),
            Outcome::Unchanged => debug!(step = self.state.step.position(), "no transition"),
            Outcome::Submitted(notification) => {
                info!(body = %notification.body, "booking submitted");
                self.notifier.notify(notification.clone());
            }
        }
        outcome
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Outcome {
        self.dispatch(Action::SetField {
            field,
            value: value.into(),
        })
    }

    /// Set a field by its JSON name (`"email"`, `"time"`, ...).
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<Outcome> {
        let field: Field = name
            .parse()
            .map_err(|_| BookingError::UnknownField(name.to_string()))?;
        Ok(self.set_field(field, value))
    }

    pub fn select_service(&mut self, service: impl Into<String>) -> Outcome {
        self.dispatch(Action::SelectService(service.into()))
    }

    pub fn advance(&mut self) -> Outcome {
        self.dispatch(Action::Advance)
    }

    pub fn retreat(&mut self) -> Outcome {
        self.dispatch(Action::Retreat)
    }

    pub fn submit(&mut self) -> Outcome {
        self.dispatch(Action::Submit)
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn summary(&self) -> Vec<SummaryItem> {
        self.state.summary()
    }
}
