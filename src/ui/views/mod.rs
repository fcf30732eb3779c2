//! View components

mod status;

pub use status::{StatusAction, StatusInputMode, StatusView};
