use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{
    notes::{Note, NotesStore},
    NoteDetailState, Progress,
};
use crate::ui::{
    components::{
        empty_state,
        help_bar::{self, Hint},
        screen_title,
    },
    layouts, theme, utils,
};

const HINTS: &[Hint] = &[
    ("e", "edit"),
    ("d", "delete"),
    ("Esc", "back"),
    ("L", "log out"),
    ("?", "help"),
];

pub fn render(f: &mut Frame, state: &NoteDetailState, notes: &NotesStore, progress: &Progress) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let note = notes.get(&state.note_id);
    let title = note.map(|n| n.title.as_str()).unwrap_or("Note");
    screen_title::render_screen_title(f, title_area, title, progress, None);

    match note {
        Some(note) => render_note(f, content_area, note),
        None if !notes.is_loaded() => {
            empty_state::render_loading_state(f, content_area, "Note", "Loading note...")
        }
        None => empty_state::render_empty_state(f, content_area, "Note", "Note not found", None),
    }

    help_bar::render_help_bar(f, help_area, HINTS, None);
}

fn render_note(f: &mut Frame, area: Rect, note: &Note) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let mut dates = vec![
        Span::styled("Created ", theme::muted_style()),
        Span::raw(utils::fmt_datetime(&note.created_at)),
    ];
    if note.was_edited() {
        dates.push(Span::styled("  ·  Updated ", theme::muted_style()));
        dates.push(Span::raw(utils::fmt_datetime(&note.updated_at)));
    }
    f.render_widget(Paragraph::new(Line::from(dates)), chunks[0]);

    let content = Paragraph::new(note.content())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, chunks[1]);
}
