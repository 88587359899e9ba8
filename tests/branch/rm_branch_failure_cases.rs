use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn removing_the_current_branch_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", "master"])
        .assert()
        .success()
        .stdout(predicate::eq("Cannot remove the current branch.\n"));
}

#[rstest]
fn removing_a_missing_branch_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", "ghost"])
        .assert()
        .success()
        .stdout(predicate::eq("A branch with that name does not exist.\n"));
}
