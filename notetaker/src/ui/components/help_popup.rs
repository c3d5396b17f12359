use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::{AuthMode, InputMode};
use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Landing(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "Open selected page"));
            items.push(("s", "Sign up"));
            items.push(("i", "Sign in"));
        }
        Screen::Auth(form) => {
            items.push(("Tab/↓", "Next field"));
            items.push(("Shift+Tab/↑", "Previous field"));
            items.push(("Ctrl+O", "Send OTP to the email entered"));
            items.push(("Enter", "Next field, send OTP or submit"));
            items.push(("Ctrl+L", "Clear the focused field"));
            if form.mode == AuthMode::Signup {
                items.push(("", "All fields are required to sign up"));
            }
            items.push(("Esc", "Go back"));
        }
        Screen::Dashboard(state) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "Open selected note"));
            items.push(("n", "Create a new note"));
            items.push(("/", "Search notes"));
            if state.input_mode == InputMode::Search {
                items.push(("Type", "Filter notes by title or content"));
                items.push(("Enter", "Exit search (keep query)"));
                items.push(("Esc", "Clear search"));
                items.push(("Backspace", "Delete last character"));
            }
            items.push(("r", "Refresh notes"));
            items.push(("L", "Log out"));
        }
        Screen::NoteDetail(..) => {
            items.push(("e", "Edit note"));
            items.push(("d/Backspace", "Delete note"));
            items.push(("L", "Log out"));
            items.push(("Esc", "Back to dashboard"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
        }
    }

    if matches!(screen, Screen::Dashboard(..) | Screen::NoteDetail(..)) {
        items.push(("", ""));
        items.push(("--- Note dialog ---", ""));
        items.push(("Tab", "Switch between title and content"));
        items.push(("Enter", "Next field / new line in content"));
        items.push(("Ctrl+S", "Save note"));
        items.push(("Esc", "Close without saving"));
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("h/←", "Navigate back"));
    items.push(("g then d", "Go to dashboard"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top of list"));
    items.push(("G", "Navigate to bottom of list"));
    items.push(("?", "Toggle this help"));
    items.push(("q/Ctrl+C", "Quit application"));

    items
}
