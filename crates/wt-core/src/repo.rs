//! Repository layout resolution
//!
//! Linked worktrees live in a sibling directory of the main worktree:
//!
//! ```text
//! ~/src/myrepo/                  main worktree
//! ~/src/myrepo-worktrees/feat-x  linked worktree for branch feat/x
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WtError;
use crate::git::GitCli;

/// Resolved paths for the repository containing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Absolute path of the main worktree
    pub main_worktree: PathBuf,
    /// Sibling directory holding linked worktrees
    pub worktrees_dir: PathBuf,
    /// File name of the main worktree directory
    pub repo_name: String,
}

impl RepoInfo {
    /// Resolve the repository from `cwd`, which may be the main worktree, a
    /// linked worktree, or any directory inside one.
    pub fn resolve(cwd: &Path, dir_suffix: &str) -> Result<Self, WtError> {
        let git = GitCli::new(cwd);
        let common_dir = match git.rev_parse("--git-common-dir") {
            Ok(dir) => dir,
            Err(WtError::GitCommand { stderr, .. }) => {
                return Err(WtError::NotAGitRepository { reason: stderr });
            }
            Err(e) => return Err(e),
        };

        let common_dir = std::fs::canonicalize(cwd.join(common_dir))?;
        let main_worktree = common_dir
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| WtError::NotAGitRepository {
                reason: format!("{} has no parent directory", common_dir.display()),
            })?;

        Ok(Self::from_main_worktree(main_worktree, dir_suffix))
    }

    /// Derive the layout from a known main worktree path
    pub fn from_main_worktree(main_worktree: PathBuf, dir_suffix: &str) -> Self {
        let repo_name = main_worktree
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent = main_worktree.parent().unwrap_or(&main_worktree);
        let worktrees_dir = parent.join(format!("{}{}", repo_name, dir_suffix));

        debug!(
            main = %main_worktree.display(),
            worktrees = %worktrees_dir.display(),
            "resolved repository"
        );

        Self {
            main_worktree,
            worktrees_dir,
            repo_name,
        }
    }

    /// Git wrapper rooted at the main worktree
    pub fn git(&self) -> GitCli {
        GitCli::new(&self.main_worktree)
    }

    /// Create the worktrees directory if needed
    pub fn ensure_worktrees_dir(&self) -> Result<(), WtError> {
        std::fs::create_dir_all(&self.worktrees_dir)?;
        Ok(())
    }

    /// Location of the worktree for a sanitized directory name
    pub fn worktree_path(&self, dir_name: &str) -> PathBuf {
        self.worktrees_dir.join(dir_name)
    }

    /// Display form of `path` relative to the main worktree's parent.
    /// Paths outside that parent are returned unchanged.
    pub fn relative_to_parent(&self, path: &Path) -> PathBuf {
        let parent = self.main_worktree.parent().unwrap_or(&self.main_worktree);
        path.strip_prefix(parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    pub fn is_main(&self, path: &Path) -> bool {
        path == self.main_worktree
    }
}
