use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme};

/// Render a confirmation popup for deleting the note titled `title`
pub fn render_delete_confirmation(f: &mut Frame, title: &str) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Delete Note ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Question
            Constraint::Length(1), // Consequence
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let question = Paragraph::new(format!("Delete \"{}\"?", title))
        .style(theme::loading_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(question, chunks[0]);

    let consequence = Paragraph::new("This action cannot be undone.")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(consequence, chunks[1]);

    let instructions = Line::from(vec![
        Span::styled(
            "[Y]es ",
            theme::success_style().add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled("[N]o ", theme::error_style().add_modifier(Modifier::BOLD)),
        Span::raw("/ "),
        Span::styled("[Esc]", theme::help_text_style()),
        Span::raw(" Cancel"),
    ]);
    let instructions_para = Paragraph::new(instructions).alignment(Alignment::Center);
    f.render_widget(instructions_para, chunks[3]);
}
