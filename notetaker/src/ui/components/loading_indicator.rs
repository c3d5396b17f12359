use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::{LoadingState, Progress};
use crate::ui::theme;

/// Render the indicator in the top-right corner.
///
/// The throbber spins while any remote call is in flight. Otherwise the
/// screen's own loading state is shown as a check or a cross.
pub fn render_loading_indicator(
    f: &mut Frame,
    area: Rect,
    progress: &Progress,
    loading_state: Option<&LoadingState>,
) {
    if progress.is_active() {
        let throbber = throbber_widgets_tui::Throbber::default()
            .throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
        f.render_stateful_widget(throbber, area, &mut progress.throbber.clone());
        return;
    }

    let (text, color) = match loading_state {
        Some(LoadingState::Loaded) => ("✓", theme::COLOR_SUCCESS),
        Some(LoadingState::Error(_)) => ("x", theme::COLOR_ERROR),
        _ => return,
    };

    let indicator =
        Paragraph::new(Span::styled(text, Style::default().fg(color))).alignment(Alignment::Right);

    f.render_widget(indicator, area);
}
