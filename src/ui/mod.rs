//! UI layer
//!
//! The pure listing projection plus the ratatui views, widgets and theme that draw it.

pub mod components;
pub mod listing;
pub mod navigation;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
