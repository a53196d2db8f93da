//! Header and common widget rendering
//!
//! Title banner, step indicator, progress gauge, navigation bar and the
//! help overlay.

use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, Theme, UiText};
use crate::wizard::Step;
use crate::wizard::projection::{progress_percent, step_markers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Header renderer: banner, step indicator and progress gauge
pub struct HeaderRenderer {
    banner: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            banner: Line::from(Span::styled(UiText::APP_TITLE, Styles::title())).centered(),
        }
    }

    /// Render the whole header into `area`
    pub fn render(&self, f: &mut Frame, area: Rect, step: Step) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let [banner_area, steps_area, gauge_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area);

        f.render_widget(Paragraph::new(self.banner.clone()), banner_area);
        render_step_indicator(f, steps_area, step);
        render_progress_bar(f, gauge_area, step);
    }
}

/// Step indicator line: check mark for completed steps, position otherwise
pub fn step_indicator_line(current: Step) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (step, status)) in step_markers(current).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ›  ", Styles::text_muted()));
        }
        let style = Theme::step_style(status);
        spans.push(Span::styled(
            format!("{} {}", Theme::step_marker(status, step.position()), step.title()),
            style,
        ));
    }
    Line::from(spans).centered()
}

fn render_step_indicator(f: &mut Frame, area: Rect, step: Step) {
    f.render_widget(Paragraph::new(step_indicator_line(step)), area);
}

/// Render progress bar sized by how far along the wizard is
pub fn render_progress_bar(f: &mut Frame, area: Rect, step: Step) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Progress "),
        )
        .gauge_style(Styles::progress())
        .percent(progress_percent(step));
    f.render_widget(gauge, area);
}

/// Render the step description under the header
pub fn render_description(f: &mut Frame, area: Rect, step: Step) {
    let description = Paragraph::new(vec![
        Line::from(Span::styled(step.title(), Styles::title())),
        Line::from(Span::styled(step.description(), Styles::text_secondary())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(description, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, step: Step, keybinding_ctx: &KeybindingContext) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(step) {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{}]", item.key_display), Styles::key_hint()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, step: Step, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(step, keybinding_ctx);
    help_overlay.render(f, f.area());
}
