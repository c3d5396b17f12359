//! Search box shown above the notes list.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the search box. While `active`, keystrokes go to the query and
/// the border is highlighted.
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool) {
    let title = if active {
        "Search (Enter: keep, Esc: clear)"
    } else {
        "Search (/ to edit)"
    };

    let input = Paragraph::new(query).style(theme::loading_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::input_border_style(active))
            .title(title),
    );

    f.render_widget(input, area);
}
