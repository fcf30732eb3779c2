//! svn runs and their completion pipeline
//!
//! Every run is started in the background. [`App::on_tick`] drains the process and,
//! once it exits, parses the capture and reconciles the model inside the session's
//! completion callback, before the slot is released.

use crate::model::{EntryModel, Filters, Notification, RepoInfo};
use crate::persist::WorkingCopyState;
use crate::svn::{Arg, CommandKind, Completion, ExitClass, ParseOutput, RunOptions, parse};
use crate::ui::components::{Dialog, DialogCallback};
use crate::ui::views::StatusView;

use super::state::App;

/// Command to start once a completion has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    Refresh,
    Info,
}

/// The parts of [`App`] a completion writes to
struct Reconciler<'a> {
    model: &'a mut EntryModel,
    filters: &'a Filters,
    status_view: &'a mut StatusView,
    repo_info: &'a mut Option<RepoInfo>,
    wc_state: &'a mut WorkingCopyState,
    error_message: &'a mut Option<String>,
    notification: &'a mut Option<Notification>,
}

impl Reconciler<'_> {
    fn complete(&mut self, completion: &Completion, capture: &str) -> Option<FollowUp> {
        let kind = completion.kind;
        match completion.exit {
            ExitClass::Finished => {}
            ExitClass::Killed => {
                log::info!("svn {} killed", kind);
                *self.notification = Some(Notification::info(format!("svn {kind} killed")));
                return None;
            }
            ExitClass::Failed(code) => {
                log::warn!("svn {} failed: {:?}", kind, code);
                *self.error_message = Some(match &completion.error {
                    Some(e) => e.to_string(),
                    None => format!("svn {kind} failed"),
                });
                return None;
            }
        }

        let parsed = match parse(capture, &kind) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Model stays as it was
                *self.error_message = Some(e.to_string());
                return None;
            }
        };
        *self.error_message = None;

        match parsed {
            ParseOutput::Listing(listing) => {
                self.model.replace_all(listing);
                self.status_view.redraw(self.model, self.filters);
                log::info!("status listed {} entries", self.model.len());
                self.repo_info.is_none().then_some(FollowUp::Info)
            }
            ParseOutput::Actions(list) => {
                let report = self.model.apply_actions(&list);
                self.status_view.redraw(self.model, self.filters);
                if !report.missed.is_empty() {
                    log::debug!("svn {} paths not in listing: {:?}", kind, report.missed);
                }
                *self.notification = Some(Notification::for_patch(
                    kind.subcommand(),
                    &report,
                    list.new_revision,
                ));
                None
            }
            ParseOutput::Info(info) => {
                if let Some(name) = info.module_name() {
                    self.status_view.set_title(name.clone());
                    self.wc_state.module_name = Some(name);
                }
                self.wc_state.record_branch(&info.url);
                *self.repo_info = Some(info);
                None
            }
            ParseOutput::Nothing => {
                *self.notification = Some(Notification::success(format!("svn {kind} finished")));
                Some(FollowUp::Refresh)
            }
        }
    }
}

impl App {
    /// Start a full `svn status` listing
    pub fn refresh(&mut self) {
        let kind = CommandKind::Status {
            verbose: self.config.verbose,
            show_updates: self.config.show_updates,
        };
        self.start(kind, &[]);
    }

    /// Start `kind` in the background; reports a busy slot or launch failure
    pub(crate) fn start(&mut self, kind: CommandKind, args: &[Arg]) -> bool {
        match self.session.run(kind, args, RunOptions::background()) {
            Ok(_) => {
                log::debug!("started svn {}", kind);
                true
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                false
            }
        }
    }

    /// Drain the running process and handle its completion or prompt
    pub fn on_tick(&mut self) {
        self.clear_expired_notification();

        let mut follow_up = None;
        let prompt = {
            let Self {
                session,
                model,
                filters,
                status_view,
                repo_info,
                wc_state,
                error_message,
                notification,
                ..
            } = self;
            let mut reconciler = Reconciler {
                model,
                filters,
                status_view,
                repo_info,
                wc_state,
                error_message,
                notification,
            };
            session.poll(|completion, capture| {
                follow_up = reconciler.complete(completion, capture);
            })
        };

        if let Some(prompt) = prompt {
            self.active_dialog = Some(Dialog::prompt(
                prompt.title(),
                prompt.text.clone(),
                prompt.is_secret(),
                DialogCallback::AnswerPrompt,
            ));
        }

        match follow_up {
            Some(FollowUp::Refresh) => self.refresh(),
            Some(FollowUp::Info) => {
                self.start(CommandKind::Info, &[]);
            }
            None => {}
        }
    }

    /// Name shown in the status bar while a command runs
    pub(crate) fn running_command(&self) -> Option<String> {
        self.session.running_kind().map(|kind| kind.to_string())
    }
}
