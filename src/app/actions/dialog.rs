//! Dialog result handling

use crate::svn::constants::flags;
use crate::svn::{Arg, CommandKind};
use crate::ui::components::{DialogCallback, DialogResult};

use crate::app::state::App;

impl App {
    /// Handle dialog result
    ///
    /// The dialog is closed before its callback runs, so a callback may open
    /// another one.
    pub(crate) fn handle_dialog_result(&mut self, result: DialogResult) {
        let Some(dialog) = self.active_dialog.take() else {
            return;
        };

        match (dialog.callback_id, result) {
            (DialogCallback::AnswerPrompt, DialogResult::Answered(answer)) => {
                if let Err(e) = self.session.answer(&answer) {
                    self.error_message = Some(e.to_string());
                }
            }
            (DialogCallback::AnswerPrompt, _) => {
                // Nobody else can answer; the process would wait forever
                if let Err(e) = self.session.kill() {
                    log::debug!("prompt cancelled after exit: {}", e);
                }
            }
            (_, DialogResult::Cancelled) => {}
            (DialogCallback::Revert { paths }, _) => {
                self.run_on_paths(CommandKind::Revert, paths);
            }
            (DialogCallback::Remove { paths }, _) => {
                self.run_on_paths(CommandKind::Remove, paths);
            }
            (DialogCallback::DeleteUnversioned { paths }, _) => {
                self.delete_unversioned(&paths);
            }
        }
    }

    fn run_on_paths(&mut self, kind: CommandKind, paths: Vec<String>) {
        let args = [Arg::from(flags::END_OF_OPTIONS), Arg::from(paths)];
        self.start(kind, &args);
    }
}
