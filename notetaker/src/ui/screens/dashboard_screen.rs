use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use notetaker_auth::StoredSession;

use crate::state::{notes::NotesStore, DashboardState, InputMode, LoadingState, Progress};
use crate::ui::{
    components::{
        empty_state,
        help_bar::{self, Hint},
        screen_title, search_input,
    },
    layouts, theme, utils,
};

const HINTS: &[Hint] = &[
    ("n", "new"),
    ("Enter", "open"),
    ("/", "search"),
    ("r", "refresh"),
    ("L", "log out"),
    ("?", "help"),
];

pub fn render(
    f: &mut Frame,
    state: &DashboardState,
    notes: &NotesStore,
    session: Option<&StoredSession>,
    progress: &Progress,
) {
    let (title_area, search_area, content_area, help_area) =
        layouts::screen_layout_with_search(f.area());

    let title = match session {
        Some(session) => format!("Welcome, {}!", session.user.full_name),
        None => "Dashboard".to_string(),
    };
    screen_title::render_screen_title(
        f,
        title_area,
        &title,
        progress,
        Some(&state.notes_loading),
    );
    search_input::render_search_input(
        f,
        search_area,
        &state.search_query,
        state.input_mode == InputMode::Search,
    );
    render_content(f, content_area, state, notes);
    help_bar::render_help_bar(f, help_area, HINTS, None);
}

fn render_content(f: &mut Frame, area: Rect, state: &DashboardState, notes: &NotesStore) {
    if !notes.is_loaded() {
        match &state.notes_loading {
            LoadingState::Error(message) => {
                empty_state::render_error_state(f, area, "Notes", message, "Press r to retry");
            }
            _ => empty_state::render_loading_state(f, area, "Notes", "Loading..."),
        }
        return;
    }

    let visible = state.visible_notes(notes);

    if visible.is_empty() {
        if state.search_query.is_empty() {
            empty_state::render_empty_state(
                f,
                area,
                "Notes",
                "No notes yet",
                Some("Press n to create your first note"),
            );
        } else {
            empty_state::render_empty_state(
                f,
                area,
                "Notes",
                "No notes found",
                Some("Try a different search term, or Esc to clear"),
            );
        }
        return;
    }

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Preview"),
        Cell::from(Text::from("Updated").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = visible
        .iter()
        .map(|note| {
            Row::new(vec![
                Cell::from(note.title.clone()),
                Cell::from(utils::single_line(note.preview())).style(theme::help_text_style()),
                Cell::from(Text::from(utils::fmt_date(&note.updated_at)).right_aligned())
                    .style(theme::muted_style()),
            ])
        })
        .collect();

    let title = if state.search_query.is_empty() {
        format!("Notes ({})", notes.len())
    } else {
        format!("Notes ({} of {})", visible.len(), notes.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(55),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}
