//! Interactive prompt recognition
//!
//! svn asks for credentials and certificate decisions on its output streams and
//! then waits on stdin. Only the phrasings below are recognized; any other text is
//! left in the capture buffer for the user to read.

use regex::Regex;
use std::sync::LazyLock;

/// `Username: `
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Username:\s*$").expect("Invalid username prompt regex"));

/// `Password for 'alice': `
static PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Password for '([^']*)':\s*$").expect("Invalid password prompt regex")
});

/// `(R)eject, accept (t)emporarily or accept (p)ermanently? `
/// `(R)eject or accept (t)emporarily? `
static AUTHENTICITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(R\)eject(, accept \(t\)emporarily)? or accept \([tp]\)(emporarily|ermanently)\?\s*$")
        .expect("Invalid authenticity prompt regex")
});

/// `Store password unencrypted (yes/no)? `
static STORE_PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Store password unencrypted \(yes/no\)\?\s*$")
        .expect("Invalid store password prompt regex")
});

/// Kind of question svn is asking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Username,
    /// Input must be masked
    Password,
    /// Server certificate: reject / accept temporarily / accept permanently
    Authenticity,
    /// yes / no
    StorePassword,
}

/// A question waiting for an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    /// Prompt text as printed by svn
    pub text: String,
}

impl Prompt {
    /// Should the answer be masked while typed?
    pub fn is_secret(&self) -> bool {
        self.kind == PromptKind::Password
    }

    /// Short label for the dialog title
    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Username => "svn: username",
            PromptKind::Password => "svn: password",
            PromptKind::Authenticity => "svn: server certificate",
            PromptKind::StorePassword => "svn: store password",
        }
    }
}

/// Match a (possibly unterminated) output line against the known prompts
pub(crate) fn detect_prompt(line: &str) -> Option<Prompt> {
    let line = line.trim_end_matches(['\r', '\n']);
    let kind = if USERNAME_REGEX.is_match(line) {
        PromptKind::Username
    } else if PASSWORD_REGEX.is_match(line) {
        PromptKind::Password
    } else if AUTHENTICITY_REGEX.is_match(line) {
        PromptKind::Authenticity
    } else if STORE_PASSWORD_REGEX.is_match(line) {
        PromptKind::StorePassword
    } else {
        return None;
    };

    Some(Prompt {
        kind,
        text: line.trim_end().to_string(),
    })
}
