//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar(prefix: Vec<Span<'static>>, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
pub fn status_bar_area(area: Rect) -> Option<Rect> {
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar in the last row of the frame
pub fn render_status_bar(frame: &mut Frame, prefix: Vec<Span<'static>>, hints: &[KeyHint]) {
    let Some(area) = status_bar_area(frame.area()) else {
        return;
    };

    frame.render_widget(Paragraph::new(build_status_bar(prefix, hints)), area);
}
