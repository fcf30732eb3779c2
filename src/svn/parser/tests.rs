use super::*;
use crate::model::{PatchAction, RepoLock};

fn status_verbose(output: &str) -> StatusListing {
    Parser::parse_status(output, true, false).unwrap()
}

#[test]
fn test_parse_status_verbose_line() {
    let listing = status_verbose("M    42    37  alice       src/foo.c\n");
    assert_eq!(listing.records.len(), 1);

    let record = &listing.records[0];
    assert_eq!(record.path, "src/foo.c");
    assert_eq!(record.status.file_status, 'M');
    assert_eq!(record.status.prop_status, ' ');
    assert_eq!(record.status.local_revision, 42);
    assert_eq!(record.status.last_changed_revision, 37);
    assert_eq!(record.status.author, "alice");
    assert!(!record.status.remote_update);
}

#[test]
fn test_parse_status_verbose_full_width_columns() {
    let output = "\
M                12        11 alice        src/foo.c
                 12        10 bob          .
 M +              -         ? ?            src/copied.c
A                 0         ? ?            src/new.c
?                                          notes.txt
";
    let listing = status_verbose(output);
    let paths: Vec<&str> = listing.records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["src/foo.c", ".", "src/copied.c", "src/new.c", "notes.txt"]
    );

    let copied = &listing.records[2].status;
    assert_eq!(copied.prop_status, 'M');
    assert!(copied.with_history);
    assert_eq!(copied.local_revision, -1);
    assert_eq!(copied.last_changed_revision, -1);
    assert_eq!(copied.author, "");

    let added = &listing.records[3].status;
    assert_eq!(added.local_revision, 0);

    let unknown = &listing.records[4].status;
    assert!(unknown.is_unknown());
    assert_eq!(unknown.local_revision, -1);
}

#[test]
fn test_parse_status_lock_and_switch_columns() {
    let output = "\
M                12        10 bob          plain.c
  L              12        10 bob          locked_dir
    S            12        10 bob          branch_dir
     K           12        10 bob          mine.c
     O           12        10 bob          theirs.c
      C          12        10 bob          tree.c
";
    let listing = status_verbose(output);
    let status = |i: usize| &listing.records[i + 1].status;

    assert!(status(0).wc_locked);
    assert!(status(1).switched);
    assert_eq!(status(2).repo_lock, Some(RepoLock::HeldHere));
    assert_eq!(status(3).repo_lock, Some(RepoLock::HeldByOther));
    assert!(status(4).tree_conflict);
    assert!(status(4).is_conflicted());
}

#[test]
fn test_parse_status_non_verbose_is_path_only() {
    let output = "M       src/foo.c\n?       scratch.txt\nA  +    src/moved.c\n";
    let listing = Parser::parse_status(output, false, false).unwrap();

    assert_eq!(listing.records.len(), 3);
    assert_eq!(listing.records[0].path, "src/foo.c");
    assert_eq!(listing.records[0].status.local_revision, -1);
    assert!(listing.records[2].status.with_history);
    assert!(!listing.verbose);
}

#[test]
fn test_parse_status_show_updates() {
    let output = "\
M              965   wc/bar.c
       *       965   wc/foo.c
A              0     wc/new.c
Status against revision:    981
";
    let listing = Parser::parse_status(output, false, true).unwrap();

    assert_eq!(listing.head_revision, Some(981));
    assert_eq!(listing.records.len(), 3);
    assert!(!listing.records[0].status.remote_update);
    assert_eq!(listing.records[0].status.local_revision, 965);

    let foo = &listing.records[1];
    assert_eq!(foo.path, "wc/foo.c");
    assert!(foo.status.remote_update);
    assert!(foo.status.is_unmodified());
}

#[test]
fn test_parse_status_verbose_show_updates() {
    let output = "\
M              965      938 kfogel       wc/bar.c
        *      965      922 sussman      wc/foo.c
Status against revision:    981
";
    let listing = Parser::parse_status(output, true, true).unwrap();
    let foo = &listing.records[1];
    assert!(foo.status.remote_update);
    assert_eq!(foo.status.last_changed_revision, 922);
    assert_eq!(foo.status.author, "sussman");
}

#[test]
fn test_parse_status_show_updates_incoming_item() {
    let output = "\
M              965   wc/bar.c
        *            wc/incoming.c
Status against revision:    981
";
    let listing = Parser::parse_status(output, false, true).unwrap();
    assert_eq!(listing.records.len(), 2);

    let incoming = &listing.records[1];
    assert_eq!(incoming.path, "wc/incoming.c");
    assert!(incoming.status.remote_update);
    assert_eq!(incoming.status.local_revision, -1);
    assert!(incoming.status.author.is_empty());
}

#[test]
fn test_parse_status_verbose_show_updates_incoming_item() {
    let output = "\
M              965      938 kfogel       wc/bar.c
        *                                   wc/incoming.c
        *      965      922 sussman      wc/foo.c
Status against revision:    981
";
    let listing = Parser::parse_status(output, true, true).unwrap();
    assert_eq!(listing.records.len(), 3);

    let incoming = &listing.records[1];
    assert_eq!(incoming.path, "wc/incoming.c");
    assert!(incoming.status.remote_update);
    assert_eq!(incoming.status.local_revision, -1);
    assert_eq!(incoming.status.last_changed_revision, -1);
    assert!(incoming.status.author.is_empty());

    // A versioned out-of-date item still reads its columns
    assert_eq!(listing.records[2].status.local_revision, 965);
}

#[test]
fn test_parse_status_external_merges_second_record() {
    let output = "\
X                                          ext
                 12        10 bob          src

Performing status on external item at 'ext':
                 30        28 carol        ext
M                30        29 carol        ext/lib.c
";
    let listing = status_verbose(output);
    let paths: Vec<&str> = listing.records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["ext", "src", "ext/lib.c"]);

    let ext = &listing.records[0].status;
    assert_eq!(ext.file_status, 'X');
    assert_eq!(ext.local_revision, 30);
    assert_eq!(ext.author, "carol");
}

#[test]
fn test_parse_status_external_header_only_affects_next_record() {
    let output = "\
X       ext

Performing status on external item at 'ext':
M       ext/lib.c
M       ext
";
    let listing = Parser::parse_status(output, false, false).unwrap();
    // `ext` listed again later is a normal record that replaces the first
    assert_eq!(listing.records.len(), 2);
    assert_eq!(listing.records[0].status.file_status, 'M');
}

#[test]
fn test_parse_status_changelists() {
    let output = "\
M       plain.c

--- Changelist 'fixes':
M       src/a.c
A       src/b.c
";
    let listing = Parser::parse_status(output, false, false).unwrap();
    assert_eq!(listing.records[0].status.changelist, None);
    assert_eq!(listing.records[1].status.changelist.as_deref(), Some("fixes"));
    assert_eq!(listing.records[2].status.changelist.as_deref(), Some("fixes"));
}

#[test]
fn test_parse_status_skips_conflict_noise() {
    let output = "\
svn: warning: W155010: The node 'x' was not found.
      C src/tree.c
      >   local file edit, incoming file delete upon update
Summary of conflicts:
  Tree conflicts: 1
";
    let listing = Parser::parse_status(output, false, false).unwrap();
    assert_eq!(listing.records.len(), 1);
    assert!(listing.records[0].status.tree_conflict);
}

#[test]
fn test_parse_status_unexpected_line_is_error() {
    let output = "M       ok.c\nthis is not status output\n";
    let err = Parser::parse_status(output, false, false).unwrap_err();
    match err {
        SvnError::ParseError {
            line_number, line, ..
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "this is not status output");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_status_verbose_missing_revisions_is_error() {
    let err = Parser::parse_status("M       src/foo.c\n", true, false).unwrap_err();
    assert!(matches!(err, SvnError::ParseError { line_number: 1, .. }));
}

#[test]
fn test_parse_status_is_idempotent_and_unique() {
    let output = "\
M                12        11 alice        a.c
M                12        11 alice        a.c
?                                          b.c
";
    let first = status_verbose(output);
    let second = status_verbose(output);
    assert_eq!(first, second);
    assert_eq!(first.records.len(), 2);
}

#[test]
fn test_parse_status_crlf_and_empty() {
    let listing = Parser::parse_status("M       a.c\r\n\r\n", false, false).unwrap();
    assert_eq!(listing.records[0].path, "a.c");
    assert!(status_verbose("").records.is_empty());
}

#[test]
fn test_parse_commit() {
    let output = "\
Sending        src/foo.c
Adding  (bin)  img/logo.png
Deleting       old.c
Replacing      swapped.c
Transmitting file data ...done
Committing transaction...
Committed revision 101.
";
    let list = Parser::parse_commit(output).unwrap();
    assert_eq!(
        list.actions,
        vec![
            ("src/foo.c".to_string(), PatchAction::Committed),
            ("img/logo.png".to_string(), PatchAction::Committed),
            ("old.c".to_string(), PatchAction::CommittedDeletion),
            ("swapped.c".to_string(), PatchAction::Committed),
        ]
    );
    assert_eq!(list.new_revision, Some(101));
}

#[test]
fn test_parse_commit_single_file() {
    let list = Parser::parse_commit("Sending        src/foo.c\nCommitted revision 101.\n").unwrap();
    assert_eq!(
        list.actions,
        vec![("src/foo.c".to_string(), PatchAction::Committed)]
    );
    assert_eq!(list.new_revision, Some(101));
}

#[test]
fn test_parse_commit_unexpected_line() {
    let err = Parser::parse_commit("Sending        a.c\nUploading a.c\n").unwrap_err();
    assert!(matches!(err, SvnError::ParseError { line_number: 2, .. }));
}

#[test]
fn test_parse_update_conflict() {
    let list = Parser::parse_update("C   src/bar.c\n").unwrap();
    assert_eq!(
        list.actions,
        vec![("src/bar.c".to_string(), PatchAction::Conflicted)]
    );
}

#[test]
fn test_parse_update_codes() {
    let output = "\
Updating '.':
U    src/a.c
A    src/new.c
G    src/merged.c
 U   src/props.c
 C   src/propconflict.c
D    src/gone.c
   C src/tree.c
UU   src/both.c
  B  src/lockbroken.c
Updated to revision 42.
";
    let list = Parser::parse_update(output).unwrap();
    assert_eq!(
        list.actions,
        vec![
            ("src/a.c".to_string(), PatchAction::Updated),
            ("src/new.c".to_string(), PatchAction::Updated),
            ("src/merged.c".to_string(), PatchAction::Merged),
            ("src/props.c".to_string(), PatchAction::PropertyUpdated),
            ("src/propconflict.c".to_string(), PatchAction::PropertyConflicted),
            ("src/tree.c".to_string(), PatchAction::Conflicted),
            ("src/both.c".to_string(), PatchAction::Updated),
        ]
    );
    assert_eq!(list.new_revision, Some(42));
}

#[test]
fn test_parse_update_at_revision_is_not_a_bump() {
    let list = Parser::parse_update("Updating '.':\nAt revision 42.\n").unwrap();
    assert!(list.is_empty());
    assert_eq!(list.new_revision, None);
}

#[test]
fn test_parse_update_skips_externals_and_summary() {
    let output = "\
Updating '.':

Fetching external item into 'ext':
U    ext/lib.c
Updated external to revision 7.

Restored 'src/missing.c'
Skipped 'src/obstructed.c' -- Node remains in conflict
Updated to revision 43.
Summary of conflicts:
  Skipped paths: 1
";
    let list = Parser::parse_update(output).unwrap();
    assert_eq!(
        list.actions,
        vec![("ext/lib.c".to_string(), PatchAction::Updated)]
    );
    assert_eq!(list.new_revision, Some(43));
}

#[test]
fn test_parse_update_unexpected_line() {
    let err = Parser::parse_update("Q    src/a.c\n").unwrap_err();
    assert!(matches!(err, SvnError::ParseError { line_number: 1, .. }));
}

#[test]
fn test_parse_add_and_remove() {
    let added = Parser::parse_add("A         src/new.c\nA  (bin)  img/logo.png\n").unwrap();
    assert_eq!(
        added.actions,
        vec![
            ("src/new.c".to_string(), PatchAction::AddedWc),
            ("img/logo.png".to_string(), PatchAction::AddedWc),
        ]
    );

    let removed = Parser::parse_remove("D         src/old.c\n").unwrap();
    assert_eq!(
        removed.actions,
        vec![("src/old.c".to_string(), PatchAction::RemovedWc)]
    );

    assert!(Parser::parse_add("D         src/old.c\n").is_err());
}

#[test]
fn test_parse_propset_variants() {
    let output = "\
property 'svn:eol-style' set on 'src/foo.c'
property 'svn:ignore' set (recursively) on 'src'
property 'owner' deleted from 'README'.
";
    let list = Parser::parse_propset(output).unwrap();
    let paths: Vec<&str> = list.actions.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["src/foo.c", "src", "README"]);
    assert!(
        list.actions
            .iter()
            .all(|(_, a)| *a == PatchAction::PropertyChanged)
    );
}

#[test]
fn test_parse_revert_resolved_lock_unlock() {
    let reverted = Parser::parse_revert("Reverted 'src/foo.c'\n").unwrap();
    assert_eq!(reverted.actions[0], ("src/foo.c".to_string(), PatchAction::Reverted));

    let resolved = Parser::parse_resolved("Resolved conflicted state of 'src/bar.c'\n").unwrap();
    assert_eq!(resolved.actions[0], ("src/bar.c".to_string(), PatchAction::Resolved));

    let locked = Parser::parse_lock("'src/foo.c' locked by user 'alice'.\n").unwrap();
    assert_eq!(locked.actions[0], ("src/foo.c".to_string(), PatchAction::Locked));

    let unlocked = Parser::parse_unlock("'src/foo.c' unlocked.\n").unwrap();
    assert_eq!(unlocked.actions[0], ("src/foo.c".to_string(), PatchAction::Unlocked));
}

#[test]
fn test_parse_info() {
    let output = "\
Path: .
Working Copy Root Path: /home/alice/wc
URL: svn://host/repo/trunk
Relative URL: ^/trunk
Repository Root: svn://host/repo
Repository UUID: 1b8e4a72-0000-0000-0000-000000000000
Revision: 42
Node Kind: directory
Schedule: normal
Last Changed Author: alice
Last Changed Rev: 40
Last Changed Date: 2024-01-29 15:30:00 +0900 (Mon, 29 Jan 2024)

";
    let info = Parser::parse_info(output).unwrap();
    assert_eq!(info.path, ".");
    assert_eq!(info.working_copy_root.as_deref(), Some("/home/alice/wc"));
    assert_eq!(info.url, "svn://host/repo/trunk");
    assert_eq!(info.repository_root, "svn://host/repo");
    assert_eq!(info.revision, 42);
    assert_eq!(info.node_kind, "directory");
    assert_eq!(info.last_changed_author.as_deref(), Some("alice"));
    assert_eq!(info.last_changed_revision, 40);
    assert_eq!(info.module_name().as_deref(), Some("trunk"));
}

#[test]
fn test_parse_info_lock_comment_and_tree_conflict() {
    let output = "\
Path: src/foo.c
URL: svn://host/repo/trunk/src/foo.c
Revision: 42
Lock Comment (2 lines):
fixing: the parser
second line
Tree conflict: local file edit, incoming file delete upon update
  Source  left: (file) ^/trunk/src/foo.c@41
";
    let info = Parser::parse_info(output).unwrap();
    assert_eq!(info.revision, 42);
}

#[test]
fn test_parse_info_garbage_is_error() {
    assert!(Parser::parse_info("no colon here\n").is_err());
}

#[test]
fn test_parse_dispatches_by_kind() {
    let kind = CommandKind::Status {
        verbose: true,
        show_updates: false,
    };
    let parsed = parse("M    42    37  alice       src/foo.c\n", &kind).unwrap();
    assert!(matches!(parsed, ParseOutput::Listing(ref l) if l.records.len() == 1));

    let parsed = parse("Sending        a.c\nCommitted revision 3.\n", &CommandKind::Commit).unwrap();
    assert!(matches!(parsed, ParseOutput::Actions(ref l) if l.new_revision == Some(3)));

    let parsed = parse("Path: .\nRevision: 1\n", &CommandKind::Info).unwrap();
    assert!(matches!(parsed, ParseOutput::Info(ref i) if i.revision == 1));

    assert_eq!(
        parse("anything", &CommandKind::Cleanup).unwrap(),
        ParseOutput::Nothing
    );
}

#[test]
fn test_parse_error_names_command() {
    let err = parse("bogus\n", &CommandKind::Add).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected output from svn add at line 1: bogus"
    );
}
