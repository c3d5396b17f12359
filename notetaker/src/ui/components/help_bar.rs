//! Bottom-of-screen key hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// A key and what it does, e.g. `("n", "new")`
pub type Hint<'a> = (&'a str, &'a str);

/// Render hints as `key: action` pairs separated by bars, keys highlighted.
/// A trailing `note` (scroll position and the like) is appended dimmed.
pub fn render_help_bar(f: &mut Frame, area: Rect, hints: &[Hint], note: Option<&str>) {
    let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme::muted_style()));
        }
        spans.push(Span::styled(*key, theme::header_style()));
        spans.push(Span::styled(format!(": {}", action), theme::help_text_style()));
    }
    if let Some(note) = note {
        spans.push(Span::styled(format!(" {}", note), theme::muted_style()));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}
