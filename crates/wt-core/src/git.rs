//! Git plumbing for worktree operations
//!
//! Thin wrapper over the `git` binary. Every call runs `git -C <dir> ...` and
//! either returns trimmed stdout or maps a non-zero exit to
//! [`WtError::GitCommand`] carrying git's stderr. Git runs under the C locale
//! so its messages are untranslated.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde::Serialize;
use tracing::debug;

use crate::error::WtError;

/// Branch label used for worktrees with a detached HEAD
pub const DETACHED: &str = "(detached)";

/// A single entry of `git worktree list --porcelain`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Worktree {
    pub path: PathBuf,
    /// Short branch name, or [`DETACHED`]
    pub branch: String,
    pub head: String,
    pub bare: bool,
    pub detached: bool,
}

/// Git CLI wrapper scoped to a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn exec<I, S>(&self, args: I) -> Result<(String, Output), WtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let described = args
            .iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(dir = %self.dir.display(), "git {}", described);

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.dir)
            .args(&args)
            .env("LC_ALL", "C")
            .env("LANGUAGE", "C")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    WtError::GitNotInstalled
                } else {
                    WtError::Io(e)
                }
            })?;

        Ok((described, output))
    }

    /// Run git and return stdout, failing on non-zero exit
    fn output<I, S>(&self, args: I) -> Result<String, WtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (command, output) = self.exec(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(%command, %stderr, "git exited with {}", output.status);
            return Err(WtError::GitCommand { command, stderr });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run git and report only whether it succeeded
    fn succeeds<I, S>(&self, args: I) -> Result<bool, WtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (_, output) = self.exec(args)?;
        Ok(output.status.success())
    }

    /// Raw `rev-parse` query, used by repository resolution
    pub fn rev_parse(&self, flag: &str) -> Result<String, WtError> {
        Ok(self.output(["rev-parse", flag])?.trim().to_string())
    }

    /// List all worktrees of the repository, main worktree first
    pub fn list_worktrees(&self) -> Result<Vec<Worktree>, WtError> {
        let out = self.output(["worktree", "list", "--porcelain"])?;
        Ok(parse_worktree_list(&out))
    }

    /// Add a worktree at `path`.
    ///
    /// With `create_branch`, runs `worktree add -b <branch> <path> [<base>]`;
    /// otherwise checks out the existing `branch`.
    pub fn add_worktree(
        &self,
        path: &Path,
        branch: &str,
        create_branch: bool,
        base: Option<&str>,
    ) -> Result<(), WtError> {
        let mut args: Vec<&OsStr> = vec!["worktree".as_ref(), "add".as_ref()];
        if create_branch {
            args.extend([OsStr::new("-b"), branch.as_ref(), path.as_os_str()]);
            if let Some(base) = base {
                args.push(base.as_ref());
            }
        } else {
            args.extend([path.as_os_str(), branch.as_ref()]);
        }
        self.output(args)?;
        Ok(())
    }

    pub fn remove_worktree(&self, path: &Path, force: bool) -> Result<(), WtError> {
        let mut args: Vec<&OsStr> = vec!["worktree".as_ref(), "remove".as_ref()];
        if force {
            args.push("--force".as_ref());
        }
        args.push(path.as_os_str());
        self.output(args)?;
        Ok(())
    }

    /// Whether the worktree at `path` has uncommitted changes
    pub fn is_dirty(&self, path: &Path) -> Result<bool, WtError> {
        let out = GitCli::new(path).output(["status", "--porcelain"])?;
        Ok(!out.trim().is_empty())
    }

    /// Commits ahead of and behind the upstream; `(0, 0)` without one
    pub fn ahead_behind(&self, path: &Path) -> Result<(usize, usize), WtError> {
        let result = GitCli::new(path).output([
            "rev-list",
            "--left-right",
            "--count",
            "HEAD...@{upstream}",
        ]);
        let out = match result {
            Ok(out) => out,
            Err(WtError::GitCommand { stderr, .. })
                if stderr.contains("no upstream") || stderr.contains("unknown revision") =>
            {
                return Ok((0, 0));
            }
            Err(e) => return Err(e),
        };
        Ok(parse_ahead_behind(&out))
    }

    /// Whether `name` exists as a local branch or on any remote
    pub fn branch_exists(&self, name: &str) -> Result<bool, WtError> {
        let local_ref = format!("refs/heads/{}", name);
        if self.succeeds(["show-ref", "--verify", "--quiet", local_ref.as_str()])? {
            return Ok(true);
        }
        let pattern = format!("*/{}", name);
        let out = self.output(["branch", "-r", "--list", pattern.as_str()])?;
        Ok(!out.trim().is_empty())
    }

    /// Sorted local branch names
    pub fn list_local_branches(&self) -> Result<Vec<String>, WtError> {
        let out = self.output(["branch", "--format=%(refname:short)"])?;
        Ok(parse_lines(&out))
    }

    /// Sorted remote branch names with the remote prefix stripped
    pub fn list_remote_branches(&self) -> Result<Vec<String>, WtError> {
        let out = self.output(["branch", "-r", "--format=%(refname:short)"])?;
        Ok(parse_remote_branches(&out))
    }
}

/// Parse `git worktree list --porcelain` output
pub fn parse_worktree_list(out: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current = Worktree::default();

    for line in out.lines().map(str::trim) {
        if let Some(path) = line.strip_prefix("worktree ") {
            current = Worktree {
                path: PathBuf::from(path),
                ..Worktree::default()
            };
        } else if let Some(head) = line.strip_prefix("HEAD ") {
            current.head = head.to_string();
        } else if let Some(branch) = line.strip_prefix("branch ") {
            current.branch = branch
                .strip_prefix("refs/heads/")
                .unwrap_or(branch)
                .to_string();
        } else if line == "bare" {
            current.bare = true;
        } else if line == "detached" {
            current.detached = true;
            if current.branch.is_empty() {
                current.branch = DETACHED.to_string();
            }
        } else if line.is_empty() && !current.path.as_os_str().is_empty() {
            worktrees.push(std::mem::take(&mut current));
        }
    }

    // Final record may lack the trailing blank line
    if !current.path.as_os_str().is_empty() {
        worktrees.push(current);
    }

    worktrees
}

/// Strip remote prefixes, drop `*/HEAD` pointers, de-duplicate, and sort
pub fn parse_remote_branches(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with("/HEAD"))
        .map(|line| match line.split_once('/') {
            Some((_, name)) => name.to_string(),
            None => line.to_string(),
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn parse_lines(out: &str) -> Vec<String> {
    let mut lines: Vec<String> = out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

fn parse_ahead_behind(out: &str) -> (usize, usize) {
    let parts: Vec<&str> = out.split_whitespace().collect();
    match parts.as_slice() {
        [ahead, behind] => (ahead.parse().unwrap_or(0), behind.parse().unwrap_or(0)),
        _ => (0, 0),
    }
}
