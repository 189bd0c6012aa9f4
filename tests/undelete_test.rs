mod common;

use common::{arg, options, read, write, ScriptedFs};
use delete_cli_core::{
    CoreError, DeleteExecutor, FileSystem, FixedAnswer, Flags, Options, RealFileSystem, RunSummary, UndeleteExecutor,
};
use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

fn undelete_with<P: AsRef<Path>>(fs: &dyn FileSystem, options: &Options, paths: &[P]) -> (RunSummary, String) {
    let args: Vec<String> = paths.iter().map(|p| arg(p.as_ref())).collect();
    let mut prompter = FixedAnswer(true);
    let mut status = Vec::new();
    let summary = UndeleteExecutor::new(fs, options, &mut prompter, &mut status)
        .run(&args)
        .unwrap();
    (summary, String::from_utf8(status).unwrap())
}

fn undelete<P: AsRef<Path>>(flags: Flags, paths: &[P]) -> (RunSummary, String) {
    undelete_with(&RealFileSystem, &options(flags), paths)
}

fn recursive() -> Flags {
    Flags {
        recursive: true,
        ..Flags::default()
    }
}

#[test]
fn round_trip_restores_tree_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path().join("d");
    write(&d.join("a"), "alpha");
    write(&d.join("sub/b"), "beta");
    std::os::unix::fs::symlink("a", d.join("link")).unwrap();

    let options = options(recursive());
    let mut prompter = FixedAnswer(true);
    let mut status = Vec::new();
    let deleted = DeleteExecutor::new(&RealFileSystem, &options, &mut prompter, &mut status)
        .run(&[arg(&d)])
        .unwrap();
    assert!(deleted.is_success());
    assert!(!d.exists());

    let (summary, _) = undelete(recursive(), &[&d]);

    assert!(summary.is_success());
    assert_eq!(summary.processed, 5);
    assert_eq!(read(&d.join("a")), "alpha");
    assert_eq!(read(&d.join("sub/b")), "beta");
    assert_eq!(fs::read_link(d.join("link")).unwrap(), Path::new("a"));
    assert!(!dir.path().join(".#d").exists());
    assert!(!d.join(".#sub").exists());
}

#[test]
fn non_utf8_hidden_children_are_restored() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    write(&a.join(OsStr::from_bytes(b".#caf\xe9")), "c");

    let (summary, _) = undelete(recursive(), &[&a]);

    assert!(summary.is_success());
    assert_eq!(summary.processed, 1);
    assert_eq!(read(&a.join(OsStr::from_bytes(b"caf\xe9"))), "c");
}

#[test]
fn recursive_undelete_of_live_directory_restores_hidden_children() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    write(&a.join(".#x"), "x");
    write(&a.join(".#y"), "y");

    let (summary, _) = undelete(recursive(), &[&a]);

    assert!(summary.is_success());
    assert_eq!(summary.processed, 2);
    assert_eq!(read(&a.join("x")), "x");
    assert_eq!(read(&a.join("y")), "y");
}

#[test]
fn plain_undelete_restores_only_the_named_entry() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join(".#d/.#inner"), "i");

    let (summary, _) = undelete(Flags::default(), &[&dir.path().join("d")]);

    assert!(summary.is_success());
    assert!(dir.path().join("d/.#inner").exists());
}

#[test]
fn hidden_argument_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join(".#f"), "f");

    let (summary, _) = undelete(Flags::default(), &[&dir.path().join(".#f")]);

    assert!(summary.is_success());
    assert_eq!(read(&dir.path().join("f")), "f");
}

#[test]
fn existing_live_directory_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let x = dir.path().join("x");
    write(&dir.path().join(".#x"), "restored");
    write(&x.join("deep/file"), "in the way");

    let (summary, _) = undelete(Flags::default(), &[&x]);

    assert!(summary.is_success());
    assert!(x.is_file());
    assert_eq!(read(&x), "restored");
}

#[test]
fn interactive_overwrite_can_be_declined() {
    let dir = tempfile::tempdir().unwrap();
    let x = dir.path().join("x");
    write(&dir.path().join(".#x"), "old");
    write(&x, "current");

    let options = options(Flags {
        interactive: true,
        ..Flags::default()
    });
    let mut prompter = FixedAnswer(false);
    let mut status = Vec::new();
    let summary = UndeleteExecutor::new(&RealFileSystem, &options, &mut prompter, &mut status)
        .run(&[arg(&x)])
        .unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(read(&x), "current");
    assert_eq!(read(&dir.path().join(".#x")), "old");
}

#[test]
fn nothing_to_restore_is_not_found_but_siblings_continue() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join(".#present"), "p");

    let (summary, status) = undelete(
        Flags::default(),
        &[&dir.path().join("absent"), &dir.path().join("present")],
    );

    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].error.is_not_found());
    assert!(status.contains("absent: no such file or directory"));
    assert!(dir.path().join("present").exists());
}

#[test]
fn force_suppresses_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (summary, status) = undelete(
        Flags {
            force: true,
            ..Flags::default()
        },
        &[&dir.path().join("absent")],
    );
    assert!(summary.is_success());
    assert!(status.is_empty());
}

#[test]
fn failed_nested_restore_keeps_ancestor_hidden() {
    let dir = tempfile::tempdir().unwrap();
    let hidden_dir = dir.path().join(".#d");
    write(&hidden_dir.join(".#f"), "f");
    write(&hidden_dir.join(".#g"), "g");

    let fs = ScriptedFs::failing_rename_of(hidden_dir.join(".#f"));
    let (summary, _) = undelete_with(&fs, &options(recursive()), &[&dir.path().join("d")]);

    assert_eq!(summary.failures.len(), 2);
    assert!(matches!(summary.failures[0].error, CoreError::Io(..)));
    assert!(matches!(summary.failures[1].error, CoreError::Aborted(_)));
    assert!(hidden_dir.is_dir());
    assert!(!dir.path().join("d").exists());
    // The sibling that did not fail was restored inside the hidden directory.
    assert!(hidden_dir.join("g").exists());
}

#[test]
fn directories_only_restores_the_directory_alone() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join(".#d/.#f"), "f");
    write(&dir.path().join(".#file"), "file");

    let (summary, _) = undelete(
        Flags {
            recursive: true,
            directories_only: true,
            ..Flags::default()
        },
        &[&dir.path().join("d"), &dir.path().join("file")],
    );

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(dir.path().join("d/.#f").exists());
    assert!(dir.path().join(".#file").exists());
}

#[test]
fn dry_run_reports_live_paths_without_renaming() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join(".#d/.#f"), "f");

    let (summary, status) = undelete(
        Flags {
            recursive: true,
            dry_run: true,
            ..Flags::default()
        },
        &[&dir.path().join("d")],
    );

    assert!(summary.is_success());
    let expected_first = format!("undelete: {}: would be undeleted", dir.path().join("d/f").display());
    assert_eq!(status.lines().next(), Some(expected_first.as_str()));
    assert!(dir.path().join(".#d/.#f").exists());
}

#[test]
fn overlapping_arguments_restore_each_entry_once() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join(".#d/.#f"), "f");

    let (summary, _) = undelete(
        recursive(),
        &[&dir.path().join("d"), &dir.path().join("d")],
    );

    assert!(summary.is_success());
    assert_eq!(summary.processed, 2);
    assert_eq!(read(&dir.path().join("d/f")), "f");
}

#[test]
fn mount_point_in_the_way_is_refused_and_both_entries_stay() {
    let dir = tempfile::tempdir().unwrap();
    let x = dir.path().join("x");
    write(&dir.path().join(".#x"), "deleted");
    write(&x.join("mounted"), "live");
    write(&dir.path().join(".#later"), "later");

    let fs = ScriptedFs::mounted_at(&x);
    let (summary, status) = undelete_with(&fs, &options(Flags::default()), &[&x, &dir.path().join("later")]);

    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(summary.failures[0].error, CoreError::CollisionBoundary(_)));
    assert!(status.contains("mount point"), "{status}");
    assert_eq!(read(&dir.path().join(".#x")), "deleted");
    assert_eq!(read(&x.join("mounted")), "live");
    assert_eq!(read(&dir.path().join("later")), "later");
}

#[test]
fn collision_that_survives_removal_stops_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let x = dir.path().join("x");
    write(&dir.path().join(".#x"), "deleted");
    write(&x, "live");
    write(&dir.path().join(".#later"), "later");

    let fs = ScriptedFs {
        ignore_removals: true,
        ..ScriptedFs::default()
    };
    let options = options(Flags::default());
    let mut prompter = FixedAnswer(true);
    let mut status = Vec::new();
    let err = UndeleteExecutor::new(&fs, &options, &mut prompter, &mut status)
        .run(&[arg(&x), arg(&dir.path().join("later"))])
        .unwrap_err();

    assert!(err.is_fatal());
    assert!(matches!(err, CoreError::InvariantViolation(_)));
    assert_eq!(read(&x), "live");
    assert!(dir.path().join(".#later").exists());
}
