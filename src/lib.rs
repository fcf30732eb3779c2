//! tis - Text-mode Interface for Subversion
//!
//! A TUI front end for `svn status`.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`svn`]: svn process control and output parsing
//! - [`model`]: Working-copy entries and their reconciliation
//! - [`keys`]: Key binding definitions
//! - [`ui`]: User interface components
//! - [`config`], [`persist`], [`logging`]: Settings, saved state and log output

pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod persist;
pub mod svn;
pub mod ui;
