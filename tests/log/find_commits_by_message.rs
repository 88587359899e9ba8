use crate::common::command::{
    commit_ids_from_log, gitlet_commit, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_commits_by_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "1".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "interesting work")
        .assert()
        .success();

    let head_id = commit_ids_from_log(dir.path())[0].clone();

    let output = stdout_of(&mut run_gitlet_command(dir.path(), &["find", "interesting work"]));
    assert_eq!(output, format!("{}\n", head_id));

    // the match is exact, not a substring search
    run_gitlet_command(dir.path(), &["find", "interesting"])
        .assert()
        .success()
        .stdout(predicate::eq("Found no commit with that message.\n"));
}
