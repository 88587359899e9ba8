use crate::common::command::{init_repository_dir, run_gitlet_command, staged_files};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn removing_a_staged_file_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("new.txt"), "fresh".to_string()));
    run_gitlet_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();
    assert_eq!(staged_files(dir.path()), vec!["new.txt".to_string()]);

    run_gitlet_command(dir.path(), &["rm", "new.txt"])
        .assert()
        .success();

    // the addition is cancelled, but the working copy survives because the
    // head commit never tracked the file
    assert!(staged_files(dir.path()).is_empty());
    assert!(dir.path().join("new.txt").is_file());
}
