//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, step indicator, progress gauge, nav bar and help
//! - `screens` - Per-step input forms, confirmation summary and toasts

mod header;
pub mod screens;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, UiConstants};
use header::HeaderRenderer;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current wizard state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let area = f.area();
        f.render_widget(Block::default().style(Style::default().bg(Colors::BG_PRIMARY)), area);

        let [header_area, description_area, content_area, nav_bar_area] = Layout::vertical([
            Constraint::Length(UiConstants::HEADER_HEIGHT),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
        ])
        .areas(area);

        let step = state.step();
        self.header.render(f, header_area, step);
        header::render_description(f, description_area, step);
        screens::render_step(f, content_area, state);
        header::render_nav_bar(f, nav_bar_area, step, keybinding_ctx);

        if let Some(toast) = state.wizard.notifier().latest() {
            screens::render_toast(f, area, toast);
        }

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, step, keybinding_ctx);
        }
    }
}
