use std::collections::VecDeque;

use ratatui::{
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::{Toast, ToastKind};
use crate::ui::{layouts, theme, utils};

/// Render toasts stacked in the top-right corner, oldest first
pub fn render_toasts(f: &mut Frame, toasts: &VecDeque<Toast>) {
    for (index, toast) in toasts.iter().enumerate() {
        let Some(area) = layouts::toast_area(f.area(), index as u16) else {
            break;
        };

        let (title, style) = match toast.kind {
            ToastKind::Success => (" ✓ ", theme::success_style()),
            ToastKind::Error => (" ✗ ", theme::error_style()),
        };

        let width = area.width.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(utils::truncate(&toast.message, width))
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(title),
            );

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
