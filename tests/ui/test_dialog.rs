//! Rendering tests for Dialog components

use ratatui::{Terminal, backend::TestBackend};

use super::screen_text;
use tis::ui::components::dialog::{Dialog, DialogCallback};

fn draw(dialog: &Dialog, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            dialog.render(frame, frame.area());
        })
        .unwrap();
    screen_text(terminal.backend())
}

#[test]
fn test_confirm_dialog_basic() {
    let dialog = Dialog::confirm(
        "Remove",
        "Schedule src/foo.c for deletion?",
        None,
        DialogCallback::Remove {
            paths: vec!["src/foo.c".to_string()],
        },
    );

    let text = draw(&dialog, 60, 12);
    assert!(text.contains("Remove"));
    assert!(text.contains("Schedule src/foo.c for deletion?"));
}

#[test]
fn test_confirm_dialog_with_detail() {
    let dialog = Dialog::confirm(
        "Revert",
        "Revert 3 entries?",
        Some("Local modifications will be lost.".to_string()),
        DialogCallback::Revert {
            paths: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        },
    );

    let text = draw(&dialog, 60, 14);
    assert!(text.contains("Revert 3 entries?"));
    assert!(text.contains("Local modifications will be lost."));
}

#[test]
fn test_prompt_dialog_shows_question() {
    let dialog = Dialog::prompt(
        "svn: username",
        "Username:",
        false,
        DialogCallback::AnswerPrompt,
    );

    let text = draw(&dialog, 70, 20);
    assert!(text.contains("svn: username"));
    assert!(text.contains("Username:"));
}
