use crate::common::command::{
    branch_tip, gitlet_commit, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{read_file, write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// Merging a branch that is strictly ahead moves the tip instead of
/// creating a merge commit.
#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "base".to_string()));
    run_gitlet_command(dir.path(), &["add", "."])
        .assert()
        .success();
    gitlet_commit(dir.path(), "base").assert().success();

    run_gitlet_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("x.txt"), "X".to_string()));
    run_gitlet_command(dir.path(), &["add", "x.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "add x").assert().success();

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["merge", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq("Current branch fast-forwarded.\n"));

    // master's tip now equals dev's tip and the tree matches it
    assert_eq!(
        branch_tip(dir.path(), "master"),
        branch_tip(dir.path(), "dev")
    );
    assert_eq!(read_file(&dir.path().join("x.txt")), "X");
}
