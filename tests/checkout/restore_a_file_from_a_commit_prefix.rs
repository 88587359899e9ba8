use crate::common::command::{
    commit_ids_from_log, gitlet_commit, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{read_file, write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn restore_a_file_from_a_commit_prefix(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("b.txt"), "one".to_string()));
    run_gitlet_command(dir.path(), &["add", "b.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "first version").assert().success();

    write_file(FileSpec::new(dir.path().join("b.txt"), "two".to_string()));
    run_gitlet_command(dir.path(), &["add", "b.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "second version")
        .assert()
        .success();

    let ids = commit_ids_from_log(dir.path());
    let first_version = &ids[1];

    // full fingerprint
    run_gitlet_command(dir.path(), &["checkout", first_version, "--", "b.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("b.txt")), "one");

    // short prefix of the same commit
    write_file(FileSpec::new(dir.path().join("b.txt"), "two".to_string()));
    run_gitlet_command(dir.path(), &["checkout", &first_version[..8], "--", "b.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("b.txt")), "one");
}
