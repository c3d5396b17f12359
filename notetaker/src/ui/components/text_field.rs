//! Bordered single-line input used by the auth and note forms.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

const CURSOR: &str = "▏";

pub fn render_text_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled(CURSOR, theme::loading_style()));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::input_border_style(focused))
            .title(label),
    );

    f.render_widget(input, area);
}

/// Multi-line variant, scrolled so the last lines stay visible while typing
pub fn render_text_area(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let mut lines: Vec<Line> = value.split('\n').map(Line::raw).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CURSOR, theme::loading_style()));
        }
    }

    let scroll = scroll_offset(lines.len(), area.height.saturating_sub(2));

    let input = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::input_border_style(focused))
            .title(label),
    );

    f.render_widget(input, area);
}

/// Rows to skip so the last line stays in view
fn scroll_offset(line_count: usize, visible_rows: u16) -> u16 {
    let hidden = line_count.saturating_sub(visible_rows as usize);
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_last_line_visible() {
        assert_eq!(scroll_offset(3, 10), 0);
        assert_eq!(scroll_offset(12, 10), 2);
    }

    #[test]
    fn scroll_saturates_for_huge_content() {
        assert_eq!(scroll_offset(70_000, 5), u16::MAX);
    }
}
