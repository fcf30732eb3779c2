//! svn command execution layer
//!
//! This module runs the `svn` binary in a single process slot and parses its output.

mod command;
pub mod constants;
mod executor;
mod interactive;
/// Parser module (public for integration testing)
pub mod parser;
mod process;

pub use command::{Arg, CommandKind, EnvOverride, LaunchSpec, apply_env_overrides, flatten_args};
pub use executor::{Completion, ExitClass, RunMode, RunOptions, Session, SessionConfig};
pub use interactive::{Prompt, PromptKind};
pub use parser::{ParseOutput, Parser, parse};
pub use process::{ChildHandle, ExitCode, Launcher, ProcessEvent, Stream, SystemLauncher};

use std::io;
use thiserror::Error;

/// Errors that can occur when executing svn commands
#[derive(Error, Debug)]
pub enum SvnError {
    #[error("svn is busy running `{running}`")]
    Busy { running: CommandKind },

    #[error("Unexpected output from svn {kind} at line {line_number}: {line}")]
    ParseError {
        kind: CommandKind,
        line_number: usize,
        line: String,
    },

    #[error("{message}")]
    ToolReported { message: String },

    #[error("svn command failed (exit code {})", exit_code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    CommandFailed { exit_code: Option<i32> },

    #[error("svn process was killed")]
    Killed,

    #[error("No svn process is running")]
    NotRunning,

    #[error("No prompt is waiting for an answer")]
    NoPendingPrompt,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("svn is not installed or not in PATH")]
    SvnNotFound,
}
