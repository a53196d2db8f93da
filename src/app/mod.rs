//! Application module
//!
//! Contains the main application loop and keyboard handling.
//!
//! # Module Structure
//! - `state` - Application state (AppState, input kinds, option cycling)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Cycle, InputKind, cycle_option};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::BookingConfig;
use crate::error::Result;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    pub fn new(catalog: BookingConfig) -> Self {
        Self {
            state: AppState::new(catalog),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.state.tick(Instant::now());
            self.draw(terminal)?;

            if crossterm::event::poll(POLL_INTERVAL)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        info!("Quit requested");
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, &self.keybinding_context);
        })?;
        Ok(())
    }

    /// Handle a keyboard event. Returns true when the app should quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind == KeyEventKind::Release {
            return false;
        }

        let step = self.state.step();
        let action = self
            .keybinding_context
            .resolve(step, key_event.code, key_event.modifiers);

        // Help overlay swallows everything but closing it and quitting
        if self.state.help_visible {
            return match (action, key_event.code) {
                (Some(KeyAction::Quit), _) => true,
                (Some(KeyAction::Help), _) | (_, KeyCode::Esc) => {
                    self.state.help_visible = false;
                    false
                }
                _ => false,
            };
        }

        if let Some(action) = action {
            debug!(?action, step = step.position(), "key action");
            return self.state.apply(action);
        }

        if let KeyCode::Char(c) = key_event.code {
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.state.insert_char(c);
            }
        }

        false
    }
}
