use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{read_file, write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;
use sha1::{Digest, Sha1};

/// Blob fingerprints hash the header-wrapped contents; the stored object
/// is the exact byte copy, filed under `<bucket>/<remainder><name>`.
fn blob_fingerprint(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("blob {}\0{}", content.len(), content).as_bytes());
    format!("{:x}", hasher.finalize())
}

#[rstest]
fn commit_moves_staged_files_into_the_object_store(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "hello".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "add a").assert().success();

    let fingerprint = blob_fingerprint("hello");
    let blob_path = dir
        .path()
        .join(".gitlet/objects")
        .join(&fingerprint[..2])
        .join(format!("{}a.txt", &fingerprint[2..]));

    assert!(blob_path.is_file(), "blob missing at {:?}", blob_path);
    assert_eq!(read_file(&blob_path), "hello");
}

#[rstest]
fn recommitting_identical_contents_reuses_the_object_path(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "same".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "first").assert().success();

    // drop the file, then bring the identical contents back in a later
    // commit; the import lands on the same object path
    run_gitlet_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "drop").assert().success();

    write_file(FileSpec::new(dir.path().join("a.txt"), "same".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "restore").assert().success();

    let fingerprint = blob_fingerprint("same");
    let bucket = dir.path().join(".gitlet/objects").join(&fingerprint[..2]);
    let copies = std::fs::read_dir(&bucket)
        .expect("Failed to read bucket")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with("a.txt"))
        .count();

    assert_eq!(copies, 1);
}
