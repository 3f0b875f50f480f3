//! Git operations for generated projects.
//!
//! Every invocation receives an explicit working directory; the process-wide
//! current directory is never mutated.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

use crate::error::Error;

fn git(dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))
}

fn check(tool: &str, output: Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        eprintln!("{stderr}");
    }
    Err(Error::tool_failure(tool, output.status).into())
}

/// Check whether `dir` is inside a git working tree.
pub fn is_work_tree(dir: &Path) -> Result<bool> {
    Ok(git(dir, &["rev-parse", "--git-dir"])?.status.success())
}

/// Initialize a repository in `dir`.
pub fn init(dir: &Path) -> Result<()> {
    check("git init", git(dir, &["init"])?)
}

/// Stage everything under `dir`.
pub fn add_all(dir: &Path) -> Result<()> {
    check("git add", git(dir, &["add", "."])?)
}

/// Create a commit in `dir`.
pub fn commit(dir: &Path, message: &str) -> Result<()> {
    check("git commit", git(dir, &["commit", "-m", message])?)
}

/// Bring `dir` under version control with an initial checkpoint commit.
///
/// A directory already inside a working tree (including a subdirectory of an
/// existing repository) is left untouched, so repeated calls are no-ops.
pub fn init_repo(dir: &Path) -> Result<()> {
    if is_work_tree(dir)? {
        println!(">>> Git already initialized, step skipped.");
        return Ok(());
    }

    init(dir)?;
    add_all(dir)?;
    commit(dir, "Initial check in.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    #[test]
    fn test_is_work_tree_outside_repo() {
        if !git_available() {
            return;
        }
        let tmp = TempDir::new().unwrap();
        assert!(!is_work_tree(tmp.path()).unwrap());
    }

    #[test]
    fn test_init_creates_repo() {
        if !git_available() {
            return;
        }
        let tmp = TempDir::new().unwrap();
        init(tmp.path()).unwrap();
        assert!(tmp.path().join(".git").is_dir());
        assert!(is_work_tree(tmp.path()).unwrap());
    }

    #[test]
    fn test_init_repo_skips_initialized_dir() {
        if !git_available() {
            return;
        }
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.py"), "print('hello world')\n").unwrap();
        init(tmp.path()).unwrap();

        // Probe finds the existing repository; no staging or commit happens,
        // so an empty repo with untracked files stays that way.
        init_repo(tmp.path()).unwrap();
        let status = git(tmp.path(), &["status", "--porcelain"]).unwrap();
        let listing = String::from_utf8_lossy(&status.stdout).to_string();
        assert!(listing.contains("?? file.py"), "got: {listing}");
    }
}
