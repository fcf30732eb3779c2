//! Data models for tis
//!
//! UI-independent structures: what svn reports about each path, the user's own
//! annotations, and the reconciliation of both into one entry list.

mod action;
pub mod entry;
mod entry_model;
mod filter;
mod notification;
mod repo_info;
pub mod status;

pub use action::{ActionList, PatchAction};
pub use entry::{Elide, Entry, ExtraAction, UiState};
pub use entry_model::{ColumnWidths, EntryModel, PatchReport};
pub use filter::{ElidedDirs, Filters, HideReason, Visibility};
pub use notification::{Notification, NotificationKind};
pub use repo_info::RepoInfo;
pub use status::{EntryStatus, RepoLock, StatusListing, StatusRecord};
