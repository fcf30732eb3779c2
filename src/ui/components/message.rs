//! Error, notification and activity message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};
use crate::ui::symbols;

/// Error banner line: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

fn notification_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Done:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Notification for the title bar, truncated to `max_width` columns
///
/// Returns an empty line when there is no room for at least one message character.
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);

    // " | " + label + " " + message + " "
    let fixed = 3 + label.len() + 1 + 1;
    let room = max_width.saturating_sub(fixed);
    let length = notification.message.chars().count();
    let message = if length <= room {
        notification.message.clone()
    } else if room >= 2 {
        let kept: String = notification.message.chars().take(room - 1).collect();
        format!("{kept}{}", symbols::input::ELLIPSIS)
    } else {
        return Line::default();
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(format!("{message} "), Style::default().fg(color)),
    ])
}

/// `svn update running…` style activity marker
pub fn build_running_line(command: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" svn {command} running{} ", symbols::input::ELLIPSIS),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    ))
}
