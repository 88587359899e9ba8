use crate::common::command::{
    gitlet_commit, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_files_edited_after_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "one".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "add a").assert().success();

    write_file(FileSpec::new(dir.path().join("a.txt"), "edited".to_string()));

    let status = stdout_of(&mut run_gitlet_command(dir.path(), &["status"]));
    assert!(status.contains("a.txt (modified)\n"));
}

#[rstest]
fn report_files_edited_after_staging(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "one".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("a.txt"), "edited".to_string()));

    let status = stdout_of(&mut run_gitlet_command(dir.path(), &["status"]));
    assert!(status.contains("a.txt (modified)\n"));
}

#[rstest]
fn staged_and_unchanged_files_are_not_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "one".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let status = stdout_of(&mut run_gitlet_command(dir.path(), &["status"]));
    assert!(status.contains("=== Staged Files ===\na.txt\n"));
    assert!(status.contains("=== Modifications Not Staged For Commit ===\n\n"));
}
