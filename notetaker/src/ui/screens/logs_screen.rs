use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::{LogBuffer, LogEntry};
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar},
    layouts, theme,
};

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Session logs ({} entries)", state.total_entries);
    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);
    render_logs(f, content_area, state, log_buffer);
    render_help(f, help_area, state);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let total = log_buffer.len();

    if total == 0 {
        empty_state::render_empty_state(f, area, "Session Logs", "No logs yet", None);
        return;
    }

    // Header row, its margin and the borders
    let inner_height = area.height.saturating_sub(4) as usize;
    let entries = log_buffer.window(state.scroll_offset, inner_height);
    let end = total.saturating_sub(state.scroll_offset);
    let start = end.saturating_sub(entries.len());

    let rows: Vec<Row> = entries.iter().map(log_row).collect();

    let widths = [
        Constraint::Length(12), // Time
        Constraint::Length(5),  // Level
        Constraint::Length(25), // Target
        Constraint::Min(30),    // Message
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            start + 1,
            end,
            total
        )))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn log_row(entry: &LogEntry) -> Row<'static> {
    let (level_str, level_style) = match entry.level {
        Level::ERROR => ("ERROR", theme::error_style().add_modifier(Modifier::BOLD)),
        Level::WARN => ("WARN ", theme::loading_style()),
        Level::INFO => ("INFO ", theme::success_style()),
        Level::DEBUG => ("DEBUG", Style::default().fg(Color::Blue)),
        Level::TRACE => ("TRACE", theme::muted_style()),
    };

    Row::new(vec![
        entry.timestamp.format("%H:%M:%S%.3f").to_string(),
        level_str.to_string(),
        shorten_target(&entry.target, 25),
        entry.message.clone(),
    ])
    .style(level_style)
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState) {
    let scroll_info =
        (state.scroll_offset > 0).then(|| format!("(scrolled {} from bottom)", state.scroll_offset));

    help_bar::render_help_bar(
        f,
        area,
        &[
            ("j/k", "scroll"),
            ("G", "newest"),
            ("gg", "oldest"),
            ("PgUp/PgDn", "page"),
            ("Esc", "back"),
        ],
        scroll_info.as_deref(),
    );
}

/// Keep the tail of a module path, which is the informative part
fn shorten_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        return target.to_string();
    }
    let tail: String = target.chars().skip(len - max_len + 1).collect();
    format!("…{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_targets_keep_their_tail() {
        let shortened = shorten_target("notetaker::background::data_loader", 20);
        assert_eq!(shortened.chars().count(), 20);
        assert!(shortened.ends_with("data_loader"));
        assert_eq!(shorten_target("notetaker::app", 20), "notetaker::app");
    }
}
