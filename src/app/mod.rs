//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `refresh`: svn runs and the completion pipeline
//! - `actions`: Status actions and dialog results
//! - `input`: Key event handling
//! - `render`: UI rendering

mod actions;
mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, View};
