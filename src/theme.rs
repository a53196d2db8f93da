//! Centralized theme and styling for the booking TUI
//!
//! Every color and style the renderer uses lives here so the screens never
//! hardcode a palette.
//!
//! # Usage
//! ```rust
//! use salon_booking::theme::{Colors, Styles, Theme};
//! use salon_booking::wizard::StepStatus;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let marker_style = Theme::step_style(StepStatus::Current);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::wizard::StepStatus;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette: deep velvet backgrounds with gold accents
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Main background
    pub const BG_PRIMARY: Color = Color::Rgb(24, 16, 28);

    /// Panels that sit on top of the main background (summary, help)
    pub const BG_SECONDARY: Color = Color::Rgb(36, 24, 42);

    /// Gauge background
    pub const BG_GAUGE: Color = Color::Rgb(48, 36, 54);

    pub const FG_PRIMARY: Color = Color::White;
    pub const FG_SECONDARY: Color = Color::Gray;
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Gold, used for borders and titles
    pub const PRIMARY: Color = Color::Rgb(212, 175, 55);

    /// Rose, used for the focused input
    pub const SECONDARY: Color = Color::Rgb(219, 112, 147);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::LightRed;
    pub const INFO: Color = Color::LightBlue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Self::SECONDARY;
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Step indicator colors
    pub const STEP_COMPLETE: Color = Color::Green;
    pub const STEP_CURRENT: Color = Self::PRIMARY;
    pub const STEP_UPCOMING: Color = Color::DarkGray;

    pub const PROGRESS: Color = Self::PRIMARY;
    pub const NAV_HINT: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Commonly used style combinations
pub struct Styles;

impl Styles {
    /// Screen and panel titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Border of the focused input
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Border of an input whose field has an error
    pub fn border_error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Field error message under an input
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Colors::INFO)
    }

    /// Summary row label
    pub fn label() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Key names in the navigation bar
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    /// Style of a step in the step indicator
    pub fn step_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Completed => Style::default().fg(Colors::STEP_COMPLETE),
            StepStatus::Current => Style::default()
                .fg(Colors::STEP_CURRENT)
                .add_modifier(Modifier::BOLD),
            StepStatus::Upcoming => Style::default().fg(Colors::STEP_UPCOMING),
        }
    }

    /// Marker drawn in front of a step: a check mark once completed,
    /// otherwise the step's position.
    pub fn step_marker(status: StepStatus, position: u8) -> String {
        match status {
            StepStatus::Completed => "✓".to_string(),
            StepStatus::Current | StepStatus::Upcoming => position.to_string(),
        }
    }

    /// Border style for an input given focus and error state
    pub fn input_border(focused: bool, has_error: bool) -> Style {
        if has_error {
            Styles::border_error()
        } else if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// Layout dimensions
pub struct UiConstants;

impl UiConstants {
    /// Step indicator plus gauge
    pub const HEADER_HEIGHT: u16 = 5;

    /// One bordered input line
    pub const INPUT_HEIGHT: u16 = 3;

    /// Line under each input reserved for its error
    pub const ERROR_HEIGHT: u16 = 1;

    pub const NAV_BAR_HEIGHT: u16 = 1;

    pub const TOAST_WIDTH: u16 = 48;
    pub const TOAST_HEIGHT: u16 = 4;

    pub const HELP_WIDTH_PCT: u16 = 60;
    pub const HELP_HEIGHT_PCT: u16 = 70;
}

/// Fixed UI text
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = " Salon Booking ";

    pub const CANCELLATION_POLICY: &'static str = "By confirming your booking, you agree to our cancellation policy. You can reschedule or cancel your appointment up to 24 hours in advance.";

    /// Shown in an unset choice input
    pub const CHOICE_PLACEHOLDER: &'static str = "Select an option";
}
