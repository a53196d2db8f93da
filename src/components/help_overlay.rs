//! Help overlay component
//!
//! Displays step-sensitive help in a centered window over the wizard.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles, UiConstants};
use crate::wizard::Step;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const CLOSE_HINT: &str = "Press F1 or Esc to close";

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given step
    pub fn new(step: Step, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(step);
        Self {
            content: Self::build_content(&sections, step),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], step: Step) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled("  Salon Booking Help  ", Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Styles::text_muted()),
                Span::styled(step.to_string(), Style::default().fg(Colors::SECONDARY)),
            ]),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{key:<12}"), Styles::key_hint()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Typing in a text field edits it directly.",
            Styles::text_secondary(),
        )));

        lines
    }

    /// Lines shown in the overlay
    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centered over `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(UiConstants::HELP_WIDTH_PCT, UiConstants::HELP_HEIGHT_PCT, parent);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Help ")
            .title_bottom(Line::from(Span::styled(CLOSE_HINT, Styles::text_muted())).centered())
            .style(Style::default().bg(Colors::BG_SECONDARY));

        let help = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(help, area);
    }
}

/// Rectangle of the given percentage size centered in `area`
pub fn centered_rect(width_pct: u16, height_pct: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_pct)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_pct)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_current_step() {
        let overlay = HelpOverlay::new(Step::Schedule, &KeybindingContext::new());
        let text: String = overlay
            .lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("Step 3 (Schedule)"));
        assert!(text.contains("Delete character"));
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let parent = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 70, parent);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 35);
        assert_eq!(rect.x, 20);
    }
}
