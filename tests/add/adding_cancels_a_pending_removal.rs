use crate::common::command::{
    gitlet_commit, init_repository_dir, run_gitlet_command, staged_files, stdout_of,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn adding_cancels_a_pending_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "hello".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "add a").assert().success();

    run_gitlet_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    let status = stdout_of(&mut run_gitlet_command(dir.path(), &["status"]));
    assert!(status.contains("=== Removed Files ===\na.txt\n"));

    // recreating the tracked contents and re-adding cancels the removal
    // without staging anything
    write_file(FileSpec::new(dir.path().join("a.txt"), "hello".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let status = stdout_of(&mut run_gitlet_command(dir.path(), &["status"]));
    assert!(status.contains("=== Removed Files ===\n\n"));
    assert!(staged_files(dir.path()).is_empty());
}
