//! Application state and view management

use std::cell::Cell;

use crate::config::Config;
use crate::model::{EntryModel, Filters, Notification, RepoInfo};
use crate::persist::{StateStore, WorkingCopyState};
use crate::svn::Session;
use crate::ui::components::Dialog;
use crate::ui::views::StatusView;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Status,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// svn process slot for this working copy
    pub session: Session,
    /// Authoritative entry list
    pub model: EntryModel,
    /// Hide rules applied on every redraw
    pub filters: Filters,
    /// Status view state
    pub status_view: StatusView,
    pub config: Config,
    /// Result of the last `svn info`
    pub repo_info: Option<RepoInfo>,
    /// State saved for this working copy on quit
    pub(crate) wc_state: WorkingCopyState,
    pub(crate) state_store: Option<StateStore>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Last known frame height (updated during render)
    pub(crate) last_frame_height: Cell<u16>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
}

impl App {
    /// Build the app around a session and start the first listing
    pub fn new(session: Session, config: Config, state_store: Option<StateStore>) -> Self {
        let root = session.working_dir().to_path_buf();
        let wc_state = state_store
            .as_ref()
            .and_then(|store| store.get(&root))
            .cloned()
            .unwrap_or_else(|| WorkingCopyState {
                sort_enabled: config.sort_enabled,
                ..WorkingCopyState::default()
            });

        let mut model = EntryModel::new();
        model.set_sort_enabled(wc_state.sort_enabled);
        model.seed_ui_state(wc_state.ui_seeds());

        let title = wc_state
            .module_name
            .clone()
            .unwrap_or_else(|| root.display().to_string());
        let mut status_view = StatusView::new(title);
        status_view.set_full_paths(config.full_paths);

        let mut app = Self {
            running: true,
            current_view: View::Status,
            session,
            model,
            filters: Filters::new(config.hide_unknown, config.hide_unmodified),
            status_view,
            config,
            repo_info: None,
            wc_state,
            state_store,
            error_message: None,
            notification: None,
            active_dialog: None,
            last_frame_height: Cell::new(24),
            help_scroll: 0,
        };

        app.refresh();
        app
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if view == View::Help {
            self.help_scroll = 0;
        }
        self.current_view = view;
    }

    /// Rows available to the listing in the last frame
    pub(crate) fn visible_count(&self) -> usize {
        // Status bar row and the view's top/bottom borders
        StatusView::visible_count(self.last_frame_height.get().saturating_sub(3))
    }

    /// Re-render the listing from the model
    pub(crate) fn redraw(&mut self) {
        self.status_view.redraw(&self.model, &self.filters);
    }

    /// Save per working-copy state, stop any running svn and leave the loop
    pub(crate) fn quit(&mut self) {
        if self.session.is_busy()
            && let Err(e) = self.session.kill()
        {
            log::warn!("could not kill svn on quit: {}", e);
        }

        self.wc_state.sort_enabled = self.model.sort_enabled();
        self.wc_state.elide_list = self.model.elide_list();
        if let Some(store) = self.state_store.as_mut() {
            store.set(self.session.working_dir(), self.wc_state.clone());
            if let Err(e) = store.save() {
                log::warn!("could not save state: {}", e);
            }
        }

        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
