//! UI symbols (markers, masks)

/// Row markers in the status listing
pub mod markers {
    /// Selection mark in the first column
    pub const MARKED: char = '*';
    /// Out-of-date marker after the status columns
    pub const REMOTE_UPDATE: char = '*';
}

/// Text input
pub mod input {
    /// Replaces each typed character of a secret answer
    pub const MASK: char = '●';
    /// Prefix for a truncated input line
    pub const ELLIPSIS: char = '…';
}
