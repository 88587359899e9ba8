use crate::common::command::{
    gitlet_commit, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

/// After a merge, `log` walks the current branch's first parents: the
/// merged-in branch's own commits never appear, while the merge commit
/// itself shows its two abbreviated parents.
#[rstest]
fn log_follows_only_primary_parents(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("base.txt"), "base".to_string()));
    run_gitlet_command(dir.path(), &["add", "."])
        .assert()
        .success();
    gitlet_commit(dir.path(), "base").assert().success();

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("m.txt"), "master".to_string()));
    run_gitlet_command(dir.path(), &["add", "."])
        .assert()
        .success();
    gitlet_commit(dir.path(), "master work").assert().success();

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "feature".to_string()));
    run_gitlet_command(dir.path(), &["add", "."])
        .assert()
        .success();
    gitlet_commit(dir.path(), "feature work").assert().success();

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success();

    let log = stdout_of(&mut run_gitlet_command(dir.path(), &["log"]));

    assert!(log.contains("Merged feature into master."));
    assert!(log.contains("Merge: "));
    assert!(log.contains("master work"));
    assert!(log.contains("base"));
    assert!(log.contains("initial commit"));

    // the merged-in branch's commit is reachable only through the second
    // parent, which log never follows
    assert!(!log.contains("feature work"));
}
