//! Command descriptions: kinds, argument lists, and environment overlays

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::constants::{commands, flags};

/// Which svn subcommand produced a capture
///
/// The same tag selects the parser and the completion handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `svn status`, with the listing options that shape its columns
    Status { verbose: bool, show_updates: bool },
    Info,
    Commit,
    Update,
    Add,
    Remove,
    Propset,
    Revert,
    Resolved,
    Lock,
    Unlock,
    Cleanup,
}

impl CommandKind {
    /// svn subcommand name
    pub fn subcommand(&self) -> &'static str {
        match self {
            Self::Status { .. } => commands::STATUS,
            Self::Info => commands::INFO,
            Self::Commit => commands::COMMIT,
            Self::Update => commands::UPDATE,
            Self::Add => commands::ADD,
            Self::Remove => commands::REMOVE,
            Self::Propset => commands::PROPSET,
            Self::Revert => commands::REVERT,
            Self::Resolved => commands::RESOLVED,
            Self::Lock => commands::LOCK,
            Self::Unlock => commands::UNLOCK,
            Self::Cleanup => commands::CLEANUP,
        }
    }

    /// Arguments placed before the caller's arguments
    pub fn leading_args(&self) -> Vec<&'static str> {
        let mut args = vec![self.subcommand()];
        if let Self::Status {
            verbose,
            show_updates,
        } = self
        {
            if *verbose {
                args.push(flags::VERBOSE);
            }
            if *show_updates {
                args.push(flags::SHOW_UPDATES);
            }
        }
        args
    }

    /// Does this command rebuild the whole entry list?
    pub fn is_full_listing(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

/// One element of an argument list
///
/// Lists nest arbitrarily; absent and empty values are dropped when flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Value(String),
    List(Vec<Arg>),
    Absent,
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Value(value.clone())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Flatten nested argument lists, dropping absent and empty elements
pub fn flatten_args(args: &[Arg]) -> Vec<String> {
    fn walk(arg: &Arg, out: &mut Vec<String>) {
        match arg {
            Arg::Value(v) if v.is_empty() => {}
            Arg::Value(v) => out.push(v.clone()),
            Arg::List(items) => items.iter().for_each(|a| walk(a, out)),
            Arg::Absent => {}
        }
    }

    let mut out = Vec::new();
    for arg in args {
        walk(arg, &mut out);
    }
    out
}

/// Entry of the environment overlay list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvOverride {
    /// `VAR=VALUE`
    Set { name: String, value: String },
    /// `VAR`
    Unset(String),
}

impl EnvOverride {
    /// Parse `VAR=VALUE` (set) or `VAR` (unset)
    pub fn parse(spec: &str) -> Self {
        match spec.split_once('=') {
            Some((name, value)) => Self::Set {
                name: name.to_string(),
                value: value.to_string(),
            },
            None => Self::Unset(spec.to_string()),
        }
    }
}

/// Overlay the override list onto an ambient environment
///
/// Later overrides win over earlier ones.
pub fn apply_env_overrides<I>(ambient: I, overrides: &[EnvOverride]) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env: BTreeMap<String, String> = ambient.into_iter().collect();
    for o in overrides {
        match o {
            EnvOverride::Set { name, value } => {
                env.insert(name.clone(), value.clone());
            }
            EnvOverride::Unset(name) => {
                env.remove(name);
            }
        }
    }
    env
}

/// Everything needed to start one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
    /// Keep stdin open for prompt answers
    pub interactive: bool,
}
