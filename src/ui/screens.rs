//! Wizard step screens.
//!
//! - Service selection, personal details and schedule render their inputs
//!   as bordered boxes with the field's error message underneath
//! - Confirmation renders the booking summary and the cancellation policy
//! - Toasts float in the top-right corner

use crate::app::{AppState, InputKind};
use crate::notify::Toast;
use crate::theme::{Colors, Styles, Theme, UiConstants, UiText};
use crate::wizard::{Field, Step};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

// ============================================================================
// Step Dispatch
// ============================================================================

/// Render the body of the current step
pub fn render_step(f: &mut Frame, area: Rect, state: &AppState) {
    match state.step() {
        Step::Confirmation => render_confirmation(f, area, state),
        _ => render_inputs(f, area, state),
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Text shown inside an input box.
///
/// Choices show their value between arrows (or a placeholder while unset);
/// the focused text input gets a cursor block.
pub fn input_text(kind: InputKind, value: &str, focused: bool) -> String {
    match kind {
        InputKind::Choice if value.is_empty() => format!("‹ {} ›", UiText::CHOICE_PLACEHOLDER),
        InputKind::Choice => format!("‹ {value} ›"),
        InputKind::Text if focused => format!("{value}█"),
        InputKind::Text => value.to_string(),
    }
}

fn render_inputs(f: &mut Frame, area: Rect, state: &AppState) {
    let inputs = state.inputs();
    let rows = Layout::vertical(
        inputs
            .iter()
            .map(|_| Constraint::Length(UiConstants::INPUT_HEIGHT + UiConstants::ERROR_HEIGHT))
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(area);

    for (index, (&field, &row)) in inputs.iter().zip(rows.iter()).enumerate() {
        render_input(f, row, state, field, index == state.focus);
    }
}

fn render_input(f: &mut Frame, area: Rect, state: &AppState, field: Field, focused: bool) {
    let [box_area, error_area] = Layout::vertical([
        Constraint::Length(UiConstants::INPUT_HEIGHT),
        Constraint::Length(UiConstants::ERROR_HEIGHT),
    ])
    .areas(area);

    let error = state.wizard.errors().get(field);
    let title = if field.is_optional() {
        format!(" {} (optional) ", field.label())
    } else {
        format!(" {} ", field.label())
    };

    let kind = InputKind::of(field);
    let value = state.wizard.form().get(field);
    let text_style = if kind == InputKind::Choice && value.is_empty() {
        Styles::text_muted()
    } else {
        Styles::text()
    };

    let input = Paragraph::new(Span::styled(input_text(kind, value, focused), text_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::input_border(focused, error.is_some()))
            .title(title),
    );
    f.render_widget(input, box_area);

    if let Some(message) = error {
        f.render_widget(
            Paragraph::new(Span::styled(format!("  {message}"), Styles::error())),
            error_area,
        );
    }
}

// ============================================================================
// Confirmation
// ============================================================================

/// Summary rows for the confirmation screen
pub fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
    state
        .wizard
        .summary()
        .into_iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(format!("{:<9}", format!("{}:", item.label)), Styles::label()),
                Span::styled(item.value, Styles::text()),
            ])
        })
        .collect()
}

fn render_confirmation(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = summary_lines(state);
    let summary_height = lines.len() as u16 + 2;

    let [summary_area, policy_area] = Layout::vertical([
        Constraint::Length(summary_height),
        Constraint::Min(3),
    ])
    .areas(area);

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Booking Summary ")
            .style(Style::default().bg(Colors::BG_SECONDARY)),
    );
    f.render_widget(summary, summary_area);

    let policy = Paragraph::new(Span::styled(UiText::CANCELLATION_POLICY, Styles::info()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(policy, policy_area);
}

// ============================================================================
// Toast
// ============================================================================

/// Render a toast in the top-right corner of `parent`
pub fn render_toast(f: &mut Frame, parent: Rect, toast: &Toast) {
    let width = UiConstants::TOAST_WIDTH.min(parent.width);
    let height = UiConstants::TOAST_HEIGHT.min(parent.height);
    let area = Rect::new(parent.right().saturating_sub(width), parent.y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::success())
        .title(Line::from(Span::styled(
            format!(" {} ", toast.notification.title),
            Styles::success(),
        )))
        .style(Style::default().bg(Colors::BG_SECONDARY));

    let body = Paragraph::new(toast.notification.body.clone())
        .style(Styles::text())
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_text() {
        assert_eq!(input_text(InputKind::Choice, "", false), "‹ Select an option ›");
        assert_eq!(input_text(InputKind::Choice, "2:00 PM", true), "‹ 2:00 PM ›");
        assert_eq!(input_text(InputKind::Text, "Jane", true), "Jane█");
        assert_eq!(input_text(InputKind::Text, "Jane", false), "Jane");
    }

    #[test]
    fn test_summary_lines_strip_stylist_role() {
        let mut state = AppState::default();
        state.wizard.set_field(Field::Stylist, "Morgan Reed - Creative Director");
        let lines = summary_lines(&state);
        let stylist: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(stylist, "Stylist: Morgan Reed");
    }
}
