//! Rendering tests for the Help panel

use ratatui::{Terminal, backend::TestBackend};

use super::screen_text;
use tis::ui::widgets::render_help_panel;

#[test]
fn test_help_panel_full() {
    let mut terminal = Terminal::new(TestBackend::new(80, 90)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 0);
        })
        .unwrap();

    let text = screen_text(terminal.backend());
    assert!(text.contains("tis - Help"));
    for section in ["Global:", "Navigation:", "Marks and filters:", "svn commands:"] {
        assert!(text.contains(section), "missing {section}");
    }
    assert!(text.contains("Kill running svn"));
}

#[test]
fn test_help_panel_scrolls() {
    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 0);
        })
        .unwrap();
    assert!(screen_text(terminal.backend()).contains("Key bindings:"));

    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 5);
        })
        .unwrap();
    assert!(!screen_text(terminal.backend()).contains("Key bindings:"));
}
