//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Row just above the status bar, inset from the borders
pub fn error_banner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(3),
        width: area.width.saturating_sub(4),
        height: 1,
    }
}

/// Render an error message near the bottom of the screen
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let area = error_banner_area(frame.area());
    frame.render_widget(Paragraph::new(components::build_error_line(error)), area);
}
