//! Placeholders shown in place of a list or note body.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// "No notes yet" and friends, with an optional hint on how to get some.
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    render_placeholder(f, area, title, message, theme::loading_style(), hint);
}

/// Shown until the first response arrives.
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    render_placeholder(f, area, title, message, theme::loading_style(), None);
}

/// A failed load, with what to press to retry.
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, error: &str, hint: &str) {
    render_placeholder(f, area, title, error, theme::error_style(), Some(hint));
}

fn render_placeholder(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::default(), Line::from(Span::styled(message, style))];
    if let Some(hint) = hint {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(hint, theme::help_text_style())));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
