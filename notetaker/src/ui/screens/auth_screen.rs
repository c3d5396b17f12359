use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AuthField, AuthFormState, AuthMode, Progress};
use crate::ui::{
    components::{help_bar, screen_title, text_field},
    layouts, theme,
};

pub fn render(f: &mut Frame, form: &AuthFormState, progress: &Progress) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = match form.mode {
        AuthMode::Signup => "Sign up",
        AuthMode::Signin => "Sign in",
    };
    screen_title::render_screen_title(f, title_area, title, progress, None);
    render_form(f, content_area, form, progress);
    help_bar::render_help_bar(
        f,
        help_area,
        &[
            ("Tab", "next field"),
            ("Ctrl+O", "send OTP"),
            ("Enter", "continue"),
            ("Esc", "back"),
        ],
        None,
    );
}

fn render_form(f: &mut Frame, area: Rect, form: &AuthFormState, progress: &Progress) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(theme::INPUT_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        let label = match field {
            AuthField::Dob => "Date of birth (YYYY-MM-DD)",
            other => other.label(),
        };
        text_field::render_text_field(
            f,
            *chunk,
            label,
            form.value(*field),
            form.focus == *field,
        );
    }

    f.render_widget(status_line(form, progress), chunks[fields.len()]);
}

fn status_line(form: &AuthFormState, progress: &Progress) -> Paragraph<'static> {
    let (text, style) = if progress.is_pending("send_otp") {
        ("Sending OTP...", theme::loading_style())
    } else if progress.is_pending("auth") {
        match form.mode {
            AuthMode::Signup => ("Creating account...", theme::loading_style()),
            AuthMode::Signin => ("Signing in...", theme::loading_style()),
        }
    } else if form.otp_sent {
        (
            "OTP sent. Check your email, then press Enter on the OTP field.",
            theme::success_style(),
        )
    } else {
        (
            "Enter your email and press Ctrl+O to receive a one-time passcode.",
            theme::help_text_style(),
        )
    };

    Paragraph::new(text).style(style)
}

