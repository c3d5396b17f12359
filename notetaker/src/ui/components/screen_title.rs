//! Screen title with the progress indicator on the right.

use ratatui::prelude::Rect;
use ratatui::{widgets::Paragraph, Frame};

use crate::state::{LoadingState, Progress};
use crate::ui::{layouts, theme};

use super::loading_indicator;

pub fn render_screen_title(
    f: &mut Frame,
    area: Rect,
    title: &str,
    progress: &Progress,
    loading_state: Option<&LoadingState>,
) {
    let (title_area, indicator_area) = layouts::title_with_loading(area);

    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);
    loading_indicator::render_loading_indicator(f, indicator_area, progress, loading_state);
}
