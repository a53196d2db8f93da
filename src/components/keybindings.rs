//! Keybinding system for step-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the wizard step.
//! Printable characters are not bindings: they go to the focused text input.

use crate::wizard::Step;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NextInput,
    PreviousInput,
    NextOption,
    PreviousOption,
    DeleteChar,
    Advance,
    Retreat,
    Submit,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self::with_modifiers(key, KeyModifiers::NONE, action, display, description)
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding. Extra modifiers on the
    /// event are tolerated (terminals report Shift with BackTab).
    pub fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.key == key && modifiers.contains(self.modifiers)
    }
}

/// Step-aware keybinding registry
pub struct KeybindingContext {
    /// Step-specific keybindings
    step_bindings: HashMap<Step, Vec<Keybinding>>,
    /// Global keybindings (available on every step)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            step_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all steps
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::with_modifiers(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL,
                KeyAction::Dismiss,
                "Ctrl-D",
                "Dismiss notification",
            ),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl-C",
                "Quit",
            ),
        ];

        let focus = || {
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextInput, "Tab", "Next field"),
                Keybinding::new(KeyCode::Down, KeyAction::NextInput, "Down", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousInput, "Shift-Tab", "Previous field"),
                Keybinding::new(KeyCode::Up, KeyAction::PreviousInput, "Up", "Previous field"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Next option"),
                Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Previous option"),
            ]
        };

        // Service selection: choices only, nothing to go back to
        let mut service = focus();
        service.push(Keybinding::new(KeyCode::Enter, KeyAction::Advance, "Enter", "Next"));
        self.step_bindings.insert(Step::ServiceSelection, service);

        // Personal details and schedule: text entry plus navigation
        for step in [Step::PersonalDetails, Step::Schedule] {
            let mut bindings = focus();
            bindings.extend([
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete character"),
                Keybinding::new(KeyCode::Enter, KeyAction::Advance, "Enter", "Next"),
                Keybinding::new(KeyCode::Esc, KeyAction::Retreat, "Esc", "Back"),
            ]);
            self.step_bindings.insert(step, bindings);
        }

        // Confirmation: review only
        self.step_bindings.insert(
            Step::Confirmation,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Confirm booking"),
                Keybinding::new(KeyCode::Esc, KeyAction::Retreat, "Esc", "Back"),
            ],
        );
    }

    /// Get all bindings for a step (step-specific + global)
    pub fn get_bindings(&self, step: Step) -> Vec<&Keybinding> {
        self.step_bindings
            .get(&step)
            .into_iter()
            .flatten()
            .chain(self.global_bindings.iter())
            .collect()
    }

    /// Action bound to a key event on `step`, if any
    pub fn resolve(&self, step: Step, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.get_bindings(step)
            .into_iter()
            .find(|binding| binding.matches(key, modifiers))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for a step (key hints shown at the bottom)
    pub fn get_nav_items(&self, step: Step) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(step);
        let bound = |action: KeyAction| bindings.iter().find(|b| b.action == action);

        let mut items = Vec::new();

        // Combine the paired keys into single items for cleaner display
        if bound(KeyAction::NextInput).is_some() {
            items.push(NavBarItem::new("Tab", "Field"));
        }
        if bound(KeyAction::NextOption).is_some() {
            items.push(NavBarItem::new("←/→", "Choose"));
        }

        for action in [KeyAction::Advance, KeyAction::Submit, KeyAction::Retreat, KeyAction::Help, KeyAction::Quit] {
            if let Some(binding) = bound(action) {
                items.push(NavBarItem::new(&binding.display, &binding.description));
            }
        }

        items
    }

    /// Get full help content for a step (for the help overlay)
    pub fn get_help_content(&self, step: Step) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            (
                "Navigation",
                &[KeyAction::NextInput, KeyAction::PreviousInput, KeyAction::NextOption, KeyAction::PreviousOption],
            ),
            (
                "Booking",
                &[KeyAction::DeleteChar, KeyAction::Advance, KeyAction::Submit, KeyAction::Retreat],
            ),
            ("General", &[KeyAction::Help, KeyAction::Dismiss, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(step);
        groups
            .into_iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_step_specific_keys() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Step::Confirmation, KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyAction::Submit)
        );
        assert_eq!(
            ctx.resolve(Step::Schedule, KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyAction::Advance)
        );
        assert_eq!(ctx.resolve(Step::ServiceSelection, KeyCode::Esc, KeyModifiers::NONE), None);
        assert_eq!(ctx.resolve(Step::Confirmation, KeyCode::Tab, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_resolve_tolerates_shift_on_backtab() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Step::PersonalDetails, KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(KeyAction::PreviousInput)
        );
    }

    #[test]
    fn test_plain_characters_are_unbound() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(Step::PersonalDetails, KeyCode::Char('c'), KeyModifiers::NONE), None);
        assert_eq!(
            ctx.resolve(Step::PersonalDetails, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_nav_items_follow_step() {
        let ctx = KeybindingContext::new();
        let labels: Vec<String> = ctx
            .get_nav_items(Step::Confirmation)
            .into_iter()
            .map(|item| item.action_label)
            .collect();
        assert_eq!(labels, vec!["Confirm booking", "Back", "Help", "Quit"]);

        let first = ctx.get_nav_items(Step::ServiceSelection);
        assert_eq!(first[0], NavBarItem::new("Tab", "Field"));
        assert!(first.iter().all(|item| item.action_label != "Back"));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let titles: Vec<String> = ctx
            .get_help_content(Step::Confirmation)
            .into_iter()
            .map(|section| section.title)
            .collect();
        assert_eq!(titles, vec!["Booking", "General"]);
        assert_eq!(ctx.get_help_content(Step::Schedule).len(), 3);
    }
}
