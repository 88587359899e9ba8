use crate::common::command::{
    gitlet_commit, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// The medium rendering of one entry: `===`, the fingerprint line, a date
/// in `EEE MMM dd HH:mm:ss yyyy Z` form, the message, and a blank line.
const DATE_PATTERN: &str =
    r"[A-Z][a-z]{2} [A-Z][a-z]{2} \d{2} \d{2}:\d{2}:\d{2} \d{4} [+-]\d{4}";

#[rstest]
fn log_renders_history_from_the_tip(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "hello".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "add a").assert().success();

    let pattern = format!(
        "\\A===\\ncommit [0-9a-f]{{40}}\\nDate: {date}\\nadd a\\n\\n\
         ===\\ncommit [0-9a-f]{{40}}\\nDate: {date}\\ninitial commit\\n\\n\\z",
        date = DATE_PATTERN
    );

    run_gitlet_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(pattern).unwrap());
}
