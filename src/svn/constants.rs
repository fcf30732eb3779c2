//! svn-specific constants
//!
//! Centralized definitions for svn command names, flags, and output markers.

/// svn command binary name
pub const SVN_COMMAND: &str = "svn";

/// svn subcommands
pub mod commands {
    pub const STATUS: &str = "status";
    pub const INFO: &str = "info";
    pub const COMMIT: &str = "commit";
    pub const UPDATE: &str = "update";
    pub const ADD: &str = "add";
    pub const REMOVE: &str = "remove";
    pub const PROPSET: &str = "propset";
    pub const REVERT: &str = "revert";
    pub const RESOLVED: &str = "resolved";
    pub const LOCK: &str = "lock";
    pub const UNLOCK: &str = "unlock";
    pub const CLEANUP: &str = "cleanup";
}

/// svn command flags
pub mod flags {
    /// Show full revision information
    pub const VERBOSE: &str = "-v";
    /// Contact the repository to find out-of-date items
    pub const SHOW_UPDATES: &str = "-u";
    /// Commit message
    pub const MESSAGE: &str = "-m";
    /// Disallow prompting (added to every synchronous run)
    pub const NON_INTERACTIVE: &str = "--non-interactive";
    /// Pass separate targets
    pub const END_OF_OPTIONS: &str = "--";
}

/// Environment overlay applied to every svn process.
///
/// Forces untranslated messages; the parsers only understand the C locale.
pub const DEFAULT_ENVIRONMENT: &[&str] = &["LC_ALL", "LANGUAGE", "LC_MESSAGES=C"];

/// Markers in svn output
pub mod markers {
    /// Start of an svn error or warning line
    pub const ERROR_PREFIX: &str = "svn: ";
    /// Start of an svn warning line
    pub const WARNING_PREFIX: &str = "svn: warning:";
    /// Binary file marker in add/commit output
    pub const BINARY: &str = "(bin)";
}
