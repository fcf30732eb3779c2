//! Status actions: marks, filters, and svn commands on the selected entries

mod dialog;

use std::fs;
use std::path::Path;

use crate::model::{Elide, EntryModel, Notification};
use crate::svn::constants::flags;
use crate::svn::{Arg, CommandKind, SvnError};
use crate::ui::components::{Dialog, DialogCallback};
use crate::ui::views::StatusAction;

use super::state::App;

impl App {
    pub(crate) fn handle_status_action(&mut self, action: StatusAction) {
        match action {
            StatusAction::None => {}
            StatusAction::Mark(marked) => self.mark_selected(marked),
            StatusAction::UnmarkAll => {
                let count = self.model.unmark_all();
                self.redraw();
                self.notification = Some(Notification::info(format!("Unmarked {count} entries")));
            }
            StatusAction::ToggleElide { subtree } => self.toggle_elide(subtree),
            StatusAction::ToggleHideUnknown => {
                self.filters.hide_unknown = !self.filters.hide_unknown;
                self.redraw();
            }
            StatusAction::ToggleHideUnmodified => {
                self.filters.hide_unmodified = !self.filters.hide_unmodified;
                self.redraw();
            }
            StatusAction::ToggleSort => {
                let enabled = !self.model.sort_enabled();
                self.model.set_sort_enabled(enabled);
                self.notification = Some(Notification::info(if enabled {
                    "Sorting enabled"
                } else {
                    "Sorting disabled"
                }));
                self.refresh();
            }
            StatusAction::ToggleFullPaths => {
                let full_paths = !self.status_view.full_paths();
                self.status_view.set_full_paths(full_paths);
                self.redraw();
            }
            StatusAction::Refresh => self.refresh(),
            StatusAction::Update => {
                self.start(CommandKind::Update, &[]);
            }
            StatusAction::Commit { message } => self.commit(message),
            StatusAction::Add => self.run_on_targets(CommandKind::Add, Vec::new()),
            StatusAction::Remove => self.confirm_remove(),
            StatusAction::DeleteUnversioned => self.confirm_delete_unversioned(),
            StatusAction::Revert => self.confirm_revert(),
            StatusAction::Resolved => self.run_on_targets(CommandKind::Resolved, Vec::new()),
            StatusAction::Lock => self.run_on_targets(CommandKind::Lock, Vec::new()),
            StatusAction::Unlock => self.run_on_targets(CommandKind::Unlock, Vec::new()),
            StatusAction::Propset { name, value } => {
                self.run_on_targets(CommandKind::Propset, vec![name.into(), value.into()])
            }
            StatusAction::Info => {
                self.start(CommandKind::Info, &[]);
            }
            StatusAction::Cleanup => {
                self.start(CommandKind::Cleanup, &[]);
            }
            StatusAction::Kill => self.kill_running(),
        }
    }

    /// Marked paths, or the path at the cursor when nothing is marked
    pub(crate) fn targets(&self) -> Vec<String> {
        let marked: Vec<String> = self.model.marked().map(|e| e.path.clone()).collect();
        if !marked.is_empty() {
            return marked;
        }
        self.status_view
            .selected_path()
            .map(|path| vec![path.to_string()])
            .unwrap_or_default()
    }

    fn mark_selected(&mut self, marked: bool) {
        let Some(path) = self.status_view.selected_path().map(str::to_string) else {
            return;
        };
        if self.model.set_marked(&path, marked) {
            self.redraw();
            self.status_view.move_down(self.visible_count());
        }
    }

    fn toggle_elide(&mut self, subtree: bool) {
        let Some(row) = self.status_view.selected_row() else {
            return;
        };
        if subtree && !row.is_dir {
            self.notification = Some(Notification::info("Only directories have contents to elide"));
            return;
        }
        let path = row.path.clone();
        let current = self
            .model
            .get(&path)
            .map(|e| e.ui_state.elide)
            .unwrap_or_default();
        let elide = match (subtree, current) {
            (true, Elide::Subtree) | (false, Elide::SelfOnly) => Elide::None,
            (true, _) => Elide::Subtree,
            (false, _) => Elide::SelfOnly,
        };

        // The row itself disappears, so step off it first
        if elide == Elide::SelfOnly {
            self.status_view.move_down(self.visible_count());
        }
        self.model.set_elide(&path, elide);
        self.redraw();
    }

    fn commit(&mut self, message: String) {
        let paths = self.targets();
        if paths.is_empty() {
            return;
        }
        log::info!("committing {} paths", paths.len());
        let args = [
            Arg::from(flags::MESSAGE),
            Arg::from(message),
            Arg::from(flags::END_OF_OPTIONS),
            Arg::from(paths),
        ];
        self.start(CommandKind::Commit, &args);
    }

    /// Run `kind` with `leading` arguments followed by the target paths
    pub(crate) fn run_on_targets(&mut self, kind: CommandKind, mut leading: Vec<Arg>) {
        let paths = self.targets();
        if paths.is_empty() {
            self.notification = Some(Notification::info(format!("Nothing selected for {kind}")));
            return;
        }
        leading.push(Arg::from(flags::END_OF_OPTIONS));
        leading.push(Arg::from(paths));
        self.start(kind, &leading);
    }

    fn confirm_revert(&mut self) {
        let paths = self.targets();
        if paths.is_empty() {
            return;
        }
        self.active_dialog = Some(Dialog::confirm(
            "Revert",
            format!("Revert {}?", describe_paths(&paths)),
            Some("Local modifications will be lost.".to_string()),
            DialogCallback::Revert { paths },
        ));
    }

    fn confirm_remove(&mut self) {
        let paths = self.targets();
        if paths.is_empty() {
            return;
        }
        self.active_dialog = Some(Dialog::confirm(
            "Remove",
            format!("Schedule {} for deletion?", describe_paths(&paths)),
            None,
            DialogCallback::Remove { paths },
        ));
    }

    fn confirm_delete_unversioned(&mut self) {
        let paths: Vec<String> = self
            .targets()
            .into_iter()
            .filter(|path| {
                self.model
                    .get(path)
                    .is_some_and(|e| e.status.is_unknown())
            })
            .collect();
        if paths.is_empty() {
            self.notification = Some(Notification::info("No unversioned entries selected"));
            return;
        }
        self.active_dialog = Some(Dialog::confirm(
            "Delete",
            format!("Delete {} from disk?", describe_paths(&paths)),
            Some("Unversioned files cannot be recovered.".to_string()),
            DialogCallback::DeleteUnversioned { paths },
        ));
    }

    /// Remove unversioned paths from disk and from the model
    pub(crate) fn delete_unversioned(&mut self, paths: &[String]) {
        let root = self.session.working_dir().to_path_buf();
        let mut deleted = 0;
        for path in paths {
            let Some(entry) = self.model.get(path) else {
                continue;
            };
            let full_path = EntryModel::full_path(&root, entry);
            match remove_from_disk(&full_path) {
                Ok(()) => {
                    log::info!("deleted {}", full_path.display());
                    self.model.remove(path);
                    deleted += 1;
                }
                Err(e) => {
                    log::warn!("could not delete {}: {}", full_path.display(), e);
                    self.error_message = Some(format!("Cannot delete {path}: {e}"));
                }
            }
        }
        self.redraw();
        if deleted > 0 {
            self.notification = Some(Notification::success(format!("Deleted {deleted} entries")));
        }
    }

    fn kill_running(&mut self) {
        match self.session.kill() {
            Ok(()) => {}
            Err(SvnError::NotRunning) => {
                self.notification = Some(Notification::info("No svn command is running"));
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}

fn remove_from_disk(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// `a.txt` or `3 entries`
fn describe_paths(paths: &[String]) -> String {
    match paths {
        [only] => only.clone(),
        _ => format!("{} entries", paths.len()),
    }
}
