//! Captured svn output used across tests

/// `svn status -v` of a small working copy
pub const STATUS_VERBOSE: &str = "\
\x20                12        10 bob          .
M                12        11 alice        src/foo.c
                 12         9 bob          src
A                 0         ? ?            src/new.c
C                12        12 carol        src/bar.c
?                                          notes.txt
";

/// `svn status -v` after `src/foo.c` was committed as r13
pub const STATUS_AFTER_COMMIT: &str = "\
\x20                13        13 bob          .
                 13        13 alice        src/foo.c
                 12         9 bob          src
A                 0         ? ?            src/new.c
C                12        12 carol        src/bar.c
?                                          notes.txt
";

pub const INFO: &str = "\
Path: .
Working Copy Root Path: /home/alice/wc
URL: svn://host/repo/trunk
Relative URL: ^/trunk
Repository Root: svn://host/repo
Repository UUID: 1b8e4a72-0000-0000-0000-000000000000
Revision: 12
Node Kind: directory
Schedule: normal
Last Changed Author: bob
Last Changed Rev: 10
Last Changed Date: 2024-01-29 15:30:00 +0900 (Mon, 29 Jan 2024)

";

pub const COMMIT_FOO: &str = "\
Sending        src/foo.c
Transmitting file data .done
Committing transaction...
Committed revision 13.
";

pub const UPDATE_CONFLICT: &str = "\
Updating '.':
C    src/foo.c
Updated to revision 14.
Summary of conflicts:
  Text conflicts: 1
";

pub const ADD_NOTES: &str = "A         notes.txt\n";

pub const REVERT_BAR: &str = "Reverted 'src/bar.c'\n";

pub const NOT_A_WORKING_COPY: &str =
    "svn: warning: W155007: '/tmp/x' is not a working copy\nsvn: E200009: Could not display info for all targets because some targets don't exist\n";
