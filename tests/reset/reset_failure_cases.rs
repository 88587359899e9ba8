use crate::common::command::{
    branch_tip, gitlet_commit, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn resetting_to_an_unknown_commit_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["reset", "deadbeef"])
        .assert()
        .success()
        .stdout(predicate::eq("No commit with that id exists.\n"));
}

#[rstest]
fn untracked_files_block_reset(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "v1".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "first").assert().success();

    let tip_before = branch_tip(dir.path(), "master");

    write_file(FileSpec::new(dir.path().join("loose.txt"), "keep".to_string()));

    run_gitlet_command(dir.path(), &["reset", &tip_before])
        .assert()
        .success()
        .stdout(predicate::eq(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        ));

    // aborting has no side effects
    assert_eq!(branch_tip(dir.path(), "master"), tip_before);
    assert!(dir.path().join("loose.txt").is_file());
}
