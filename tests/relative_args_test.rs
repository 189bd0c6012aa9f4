mod common;

use common::{options, read, write};
use delete_cli_core::{FixedAnswer, Flags, RealFileSystem, UndeleteExecutor};
use std::env;

// Changes the working directory, so it lives alone in this test binary.
#[test]
fn overlapping_relative_arguments_restore_each_entry_once() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("d/.#x"), "x");
    env::set_current_dir(dir.path()).unwrap();

    let options = options(Flags {
        recursive: true,
        ..Flags::default()
    });
    let mut prompter = FixedAnswer(true);
    let mut status = Vec::new();
    let summary = UndeleteExecutor::new(&RealFileSystem, &options, &mut prompter, &mut status)
        .run(&["d", "./d/x"])
        .unwrap();

    assert!(summary.is_success(), "{}", String::from_utf8_lossy(&status));
    assert_eq!(summary.processed, 1);
    assert_eq!(read(&dir.path().join("d/x")), "x");
}
