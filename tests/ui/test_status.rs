//! Rendering tests for Status View

use ratatui::{Terminal, backend::TestBackend};

use super::screen_text;
use tis::model::{EntryModel, EntryStatus, Filters, Notification, StatusListing, StatusRecord};
use tis::ui::views::{StatusInputMode, StatusView};

fn record(path: &str, file_status: char, revision: i64, author: &str) -> StatusRecord {
    StatusRecord {
        path: path.to_string(),
        status: EntryStatus {
            file_status,
            local_revision: revision,
            last_changed_revision: revision,
            author: author.to_string(),
            ..EntryStatus::default()
        },
    }
}

fn sample_model() -> EntryModel {
    let mut model = EntryModel::new();
    model.replace_all(StatusListing {
        records: vec![
            record(".", ' ', 12, "bob"),
            record("src", ' ', 12, "bob"),
            record("src/main.c", 'M', 12, "alice"),
            record("src/util.c", 'C', 11, "carol"),
            record("README", 'A', 0, ""),
        ],
        head_revision: None,
        verbose: true,
    });
    model
}

fn draw(view: &StatusView, notification: Option<&Notification>, running: Option<&str>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), notification, running);
        })
        .unwrap();
    screen_text(terminal.backend())
}

#[test]
fn test_status_view_clean() {
    let mut model = EntryModel::new();
    model.replace_all(StatusListing {
        records: vec![record(".", ' ', 3, "bob")],
        head_revision: None,
        verbose: true,
    });
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::new(false, true));

    let text = draw(&view, None, None);
    assert!(text.contains("tis - trunk"));
    assert!(text.contains("1 entries hidden by filters"));
}

#[test]
fn test_status_view_with_files() {
    let model = sample_model();
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::new(false, true));

    let text = draw(&view, None, None);
    assert!(text.contains("main.c"));
    assert!(text.contains("util.c"));
    assert!(text.contains("README"));
    assert!(text.contains("alice"));
}

#[test]
fn test_status_view_full_paths() {
    let model = sample_model();
    let mut view = StatusView::new("trunk");
    view.set_full_paths(true);
    view.redraw(&model, &Filters::default());

    let text = draw(&view, None, None);
    assert!(text.contains("src/main.c"));
    assert!(text.contains("src/util.c"));
}

#[test]
fn test_status_view_notification_in_title() {
    let model = sample_model();
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::default());

    let notification = Notification::success("commit: 1 path, revision 13");
    let text = draw(&view, Some(&notification), None);
    assert!(text.contains("commit: 1 path, revision 13"));
}

#[test]
fn test_status_view_running_command_wins_over_notification() {
    let model = sample_model();
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::default());

    let notification = Notification::info("Sorting enabled");
    let text = draw(&view, Some(&notification), Some("update"));
    assert!(text.contains("svn update running"));
    assert!(!text.contains("Sorting enabled"));
}

#[test]
fn test_status_view_commit_editor() {
    let model = sample_model();
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::default());
    view.start_commit_input();
    assert_eq!(view.input_mode, StatusInputMode::CommitInput);

    let text = draw(&view, None, None);
    assert!(text.contains("Commit message"));
    assert!(text.contains("[Ctrl+S]"));
}

#[test]
fn test_status_view_propset_bar() {
    let model = sample_model();
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::default());
    view.start_propset_input();
    view.input_buffer = "svn:eol-style native".to_string();

    let text = draw(&view, None, None);
    assert!(text.contains("Property (name value): svn:eol-style native"));
}

#[test]
fn test_status_view_marked_row() {
    let mut model = sample_model();
    model.set_marked("src/main.c", true);
    let mut view = StatusView::new("trunk");
    view.redraw(&model, &Filters::default());

    let row = view
        .listing()
        .rows()
        .iter()
        .find(|r| r.path == "src/main.c")
        .unwrap();
    assert!(row.text.starts_with('*'));
    let text = draw(&view, None, None);
    assert!(text.contains(&row.text));
}
