use chrono::{DateTime, Local, Utc};

/// Calendar date in local time, e.g. "Mar 4, 2024"
pub fn fmt_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%b %-d, %Y")
        .to_string()
}

/// Date and time in local time, e.g. "Mar 4, 2024 09:15"
pub fn fmt_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%b %-d, %Y %H:%M")
        .to_string()
}

/// Collapse line breaks so multi-line text fits in a table cell
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max` characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_joins_lines() {
        assert_eq!(single_line("milk\n eggs\t\tbread  "), "milk eggs bread");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("a longer target name", 8), "a longe…");
    }
}
