use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::state::{NoteField, NoteFormState};
use crate::ui::{layouts, theme};

use super::text_field;

/// Render the create/edit note dialog over the current screen
pub fn render_note_form(f: &mut Frame, form: &NoteFormState) {
    let title = if form.is_edit_mode() {
        " Edit Note "
    } else {
        " New Note "
    };

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::FORM,
        title,
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(theme::INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    text_field::render_text_field(
        f,
        chunks[0],
        "Title",
        &form.title,
        form.focus == NoteField::Title,
    );
    text_field::render_text_area(
        f,
        chunks[1],
        "Content",
        &form.content,
        form.focus == NoteField::Content,
    );

    let hint = Paragraph::new("Tab: switch field | Ctrl+S: save | Esc: cancel")
        .style(theme::help_text_style());
    f.render_widget(hint, chunks[2]);
}
