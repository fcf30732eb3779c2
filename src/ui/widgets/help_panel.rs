//! Help panel widget
//!
//! `build_help_lines()` renders the binding tables from `keys`.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// Sections shown in the help panel, in order
const SECTIONS: &[(&str, &[keys::KeyBindEntry])] = &[
    ("Global", keys::GLOBAL_KEYS),
    ("Navigation", keys::NAV_KEYS),
    ("Marks and filters", keys::MARK_KEYS),
    ("svn commands", keys::COMMAND_KEYS),
    ("Input", keys::INPUT_KEYS),
];

/// All help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    for (title, entries) in SECTIONS {
        lines.push(Line::from(format!("{title}:")).underlined());
        for entry in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
                Span::raw(entry.description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" tis - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
