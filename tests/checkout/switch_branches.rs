use crate::common::command::{
    gitlet_commit, head_branch, init_repository_dir, run_gitlet_command, staged_files,
};
use crate::common::file::{read_file, write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn switch_branches(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "v1".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "base").assert().success();

    run_gitlet_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    assert_eq!(head_branch(dir.path()), "dev");

    write_file(FileSpec::new(dir.path().join("a.txt"), "v2".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "dev edit").assert().success();

    // switching back restores master's version of the file
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    assert_eq!(head_branch(dir.path()), "master");
    assert_eq!(read_file(&dir.path().join("a.txt")), "v1");

    // and forward again to the dev version
    run_gitlet_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("a.txt")), "v2");

    // materialization empties the staging directory
    assert!(staged_files(dir.path()).is_empty());
}
