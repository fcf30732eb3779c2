//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    lines.push(Line::from(""));

    Paragraph::new(lines)
}

/// Every entry is filtered out or the working copy is clean
pub fn nothing_shown_state(hidden: usize) -> Paragraph<'static> {
    if hidden == 0 {
        empty_state("Working copy is clean.", None)
    } else {
        let hint = format!("{hidden} entries hidden by filters");
        empty_state("Nothing to show.", Some(&hint))
    }
}
