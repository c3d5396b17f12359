use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use crate::state::{LandingAction, LandingState, Progress, LANDING_ACTIONS};
use crate::ui::{
    components::{help_bar, screen_title},
    layouts, theme,
};

const TAGLINE: &str = "Your notes, one passcode away. No passwords to remember.";

pub fn render(f: &mut Frame, state: &LandingState, progress: &Progress) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "NoteTaker", progress, None);
    render_content(f, content_area, state);
    help_bar::render_help_bar(
        f,
        help_area,
        &[
            ("j/k", "move"),
            ("Enter", "open"),
            ("s", "sign up"),
            ("i", "sign in"),
            ("?", "help"),
            ("q", "quit"),
        ],
        None,
    );
}

fn render_content(f: &mut Frame, area: Rect, state: &LandingState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let tagline = Paragraph::new(TAGLINE)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(tagline, chunks[0]);

    let rows: Vec<Row> = LANDING_ACTIONS
        .iter()
        .map(|action| {
            let (label, description) = match action {
                LandingAction::Signup => ("Sign up", "Create an account with your email"),
                LandingAction::Signin => ("Sign in", "Use a one-time passcode sent to your email"),
            };
            Row::new(vec![label, description])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(20)])
        .block(Block::default().borders(Borders::ALL).title("Get started"))
        .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, chunks[1], &mut state.table_state.borrow_mut());
}
