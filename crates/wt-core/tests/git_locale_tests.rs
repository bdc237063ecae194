//! Git plumbing under a translated locale
//!
//! Kept in its own test binary because it changes the process environment.

use std::fs;
use std::path::Path;
use std::process::Command;

use wt_core::GitCli;

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_ahead_behind_without_upstream_german_locale() {
    // SAFETY: the only test in this binary, set before any git process starts
    unsafe {
        std::env::set_var("LANG", "C.UTF-8");
        std::env::set_var("LANGUAGE", "de");
    }

    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let root = fs::canonicalize(temp.path()).unwrap().join("myrepo");
    fs::create_dir(&root).unwrap();
    git(&root, &["init", "-b", "main"]);
    git(&root, &["config", "user.name", "Test User"]);
    git(&root, &["config", "user.email", "test@example.com"]);
    git(&root, &["config", "commit.gpgsign", "false"]);
    fs::write(root.join("README.md"), "# test\n").unwrap();
    git(&root, &["add", "."]);
    git(&root, &["commit", "-m", "Initial commit"]);

    let git_cli = GitCli::new(&root);
    assert_eq!(git_cli.ahead_behind(&root).unwrap(), (0, 0));
    assert_eq!(git_cli.list_worktrees().unwrap()[0].branch, "main");
}
