use crate::common::command::{init_repository_dir, run_gitlet_command, staged_files};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use fake::faker::lorem::en::{Word, Words};
use fake::Fake;
use rstest::rstest;

#[rstest]
fn adding_every_file_with_dot(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    let mut names = Vec::new();
    for _ in 0..3 {
        let name = format!("{}.txt", Word().fake::<String>());
        let content = Words(5..10).fake::<Vec<String>>().join(" ");
        write_file(FileSpec::new(dir.path().join(&name), content));
        names.push(name);
    }
    names.sort();
    names.dedup();

    run_gitlet_command(dir.path(), &["add", "."])
        .assert()
        .success();

    assert_eq!(staged_files(dir.path()), names);
}
