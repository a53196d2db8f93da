//! Application state definitions
//!
//! `AppState` owns the booking wizard directly together with the catalog the
//! choice inputs offer, which input has focus and whether help is showing.

use std::time::Instant;

use tracing::debug;

use crate::components::keybindings::KeyAction;
use crate::config::BookingConfig;
use crate::notify::ToastQueue;
use crate::wizard::{BookingWizard, Field, Outcome, Step};

/// How an input is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Cycled through a fixed list with Left/Right
    Choice,
    /// Typed character by character
    Text,
}

impl InputKind {
    pub const fn of(field: Field) -> Self {
        match field {
            Field::Service | Field::Stylist | Field::Time => Self::Choice,
            _ => Self::Text,
        }
    }
}

/// Direction to cycle a choice input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Backward,
}

/// Next option after `current` in `options`, wrapping around.
///
/// A value that is not in the list (including the empty, unset value)
/// starts at the first option going forward and the last going back.
pub fn cycle_option<'a>(options: &'a [String], current: &str, direction: Cycle) -> Option<&'a str> {
    let len = options.len();
    if len == 0 {
        return None;
    }

    let index = match (options.iter().position(|o| o == current), direction) {
        (None, Cycle::Forward) => 0,
        (None, Cycle::Backward) => len - 1,
        (Some(i), Cycle::Forward) => (i + 1) % len,
        (Some(i), Cycle::Backward) => (i + len - 1) % len,
    };
    options.get(index).map(String::as_str)
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// The booking wizard; its notifier is the on-screen toast queue
    pub wizard: BookingWizard<ToastQueue>,
    /// Catalog offered by the choice inputs
    pub catalog: BookingConfig,
    /// Index of the focused input within the current step
    pub focus: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookingConfig::default())
    }
}

impl AppState {
    pub fn new(catalog: BookingConfig) -> Self {
        let toasts = ToastQueue::new(catalog.toast_duration());
        Self {
            wizard: BookingWizard::new(toasts),
            catalog,
            focus: 0,
            help_visible: false,
        }
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    /// Inputs shown on the current step
    pub fn inputs(&self) -> &'static [Field] {
        self.step().fields()
    }

    /// Field whose input has focus, if the step has inputs
    pub fn focused_field(&self) -> Option<Field> {
        self.inputs().get(self.focus).copied()
    }

    /// Options offered for a choice field
    pub fn options(&self, field: Field) -> &[String] {
        match field {
            Field::Service => &self.catalog.services,
            Field::Stylist => &self.catalog.stylists,
            Field::Time => &self.catalog.time_slots,
            _ => &[],
        }
    }

    /// Apply a bound key action. Returns true when the app should quit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Dismiss => self.wizard.notifier_mut().dismiss(),
            KeyAction::NextInput => self.move_focus(Cycle::Forward),
            KeyAction::PreviousInput => self.move_focus(Cycle::Backward),
            KeyAction::NextOption => self.cycle_focused(Cycle::Forward),
            KeyAction::PreviousOption => self.cycle_focused(Cycle::Backward),
            KeyAction::DeleteChar => self.delete_char(),
            KeyAction::Advance => {
                self.transition(|wizard| wizard.advance());
            }
            KeyAction::Retreat => {
                self.transition(|wizard| wizard.retreat());
            }
            KeyAction::Submit => {
                self.transition(|wizard| wizard.submit());
            }
        }
        false
    }

    /// Append a typed character to the focused text input.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let mut value = self.wizard.form().get(field).to_string();
        value.push(c);
        self.wizard.set_field(field, value);
    }

    /// Drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        self.wizard.notifier_mut().expire(now);
    }

    fn focused_text_field(&self) -> Option<Field> {
        self.focused_field()
            .filter(|&field| InputKind::of(field) == InputKind::Text)
    }

    fn delete_char(&mut self) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let mut value = self.wizard.form().get(field).to_string();
        if value.pop().is_some() {
            self.wizard.set_field(field, value);
        }
    }

    fn move_focus(&mut self, direction: Cycle) {
        let len = self.inputs().len();
        if len == 0 {
            return;
        }
        self.focus = match direction {
            Cycle::Forward => (self.focus + 1) % len,
            Cycle::Backward => (self.focus + len - 1) % len,
        };
    }

    fn cycle_focused(&mut self, direction: Cycle) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if InputKind::of(field) != InputKind::Choice {
            return;
        }

        let current = self.wizard.form().get(field);
        let Some(next) = cycle_option(self.options(field), current, direction).map(str::to_string) else {
            return;
        };

        if field == Field::Service {
            self.wizard.select_service(next);
        } else {
            self.wizard.set_field(field, next);
        }
    }

    /// Run a wizard transition and reset focus if the step changed.
    fn transition(&mut self, f: impl FnOnce(&mut BookingWizard<ToastQueue>) -> Outcome) -> Outcome {
        let before = self.step();
        let outcome = f(&mut self.wizard);
        if self.step() != before || matches!(outcome, Outcome::Submitted(_)) {
            debug!(from = before.position(), to = self.step().position(), "focus reset");
            self.focus = 0;
        }
        outcome
    }
}
