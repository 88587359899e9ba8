use crate::common::command::{
    gitlet_commit, init_repository_dir, run_gitlet_command, staged_files,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_with_an_empty_message_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "one".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    gitlet_commit(dir.path(), "")
        .assert()
        .success()
        .stdout(predicate::eq("Please enter a commit message.\n"));

    // aborting leaves the staged file in place
    assert_eq!(staged_files(dir.path()), vec!["a.txt".to_string()]);
}
