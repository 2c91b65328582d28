use std::path::Path;
use std::process::Command;

use stevedore_git::{is_dirty, is_inside_work_tree, Revision};
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(status.status.success(), "git {args:?} failed");
}

fn init_repo_with_commit(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.email", "t@t.com"]);
    git(dir, &["config", "user.name", "T"]);
    std::fs::write(dir.join("README.md"), "hello\n").unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", "init"]);
}

#[test]
fn resolve_clean_repo_has_bare_short_hash_tag() {
    let tmp = TempDir::new().unwrap();
    init_repo_with_commit(tmp.path());

    let revision = Revision::resolve(tmp.path()).unwrap();

    assert!(!revision.dirty);
    assert!(!revision.commit.is_empty());
    assert_eq!(revision.release_tag(), revision.commit);

    // Matches what git itself reports
    let expected = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    let expected = String::from_utf8(expected.stdout).unwrap();
    assert_eq!(revision.commit, expected.trim());
}

#[test]
fn resolve_dirty_repo_appends_dirty_suffix() {
    let tmp = TempDir::new().unwrap();
    init_repo_with_commit(tmp.path());
    std::fs::write(tmp.path().join("README.md"), "changed\n").unwrap();

    let revision = Revision::resolve(tmp.path()).unwrap();

    assert!(revision.dirty);
    assert_eq!(
        revision.release_tag(),
        format!("{}-dirty", revision.commit)
    );
}

#[test]
fn untracked_file_counts_as_dirty() {
    let tmp = TempDir::new().unwrap();
    init_repo_with_commit(tmp.path());
    std::fs::write(tmp.path().join("scratch.txt"), "wip\n").unwrap();

    assert!(is_dirty(tmp.path()).unwrap());
}

#[test]
fn resolve_fails_outside_git_repository() {
    let tmp = TempDir::new().unwrap();

    let result = Revision::resolve(tmp.path());

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("git"));
}

#[test]
fn resolve_fails_in_repo_without_commits() {
    let tmp = TempDir::new().unwrap();
    git(tmp.path(), &["init"]);

    let result = Revision::resolve(tmp.path());

    assert!(result.is_err());
}

#[test]
fn is_inside_work_tree_detects_repo() {
    let tmp = TempDir::new().unwrap();
    init_repo_with_commit(tmp.path());

    assert!(is_inside_work_tree(tmp.path()));
}

#[test]
fn is_inside_work_tree_false_for_plain_directory() {
    let tmp = TempDir::new().unwrap();

    assert!(!is_inside_work_tree(tmp.path()));
}
