//! Error types for wt operations

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for wt operations
#[derive(Error, Debug)]
pub enum WtError {
    // === Repository errors ===
    /// Current directory is not inside a git repository
    #[error("not a git repository: {reason}")]
    NotAGitRepository { reason: String },

    /// The git binary could not be spawned
    #[error("git is not installed or not found in PATH")]
    GitNotInstalled,

    /// A git invocation exited non-zero
    #[error("git {command} failed: {stderr}")]
    GitCommand { command: String, stderr: String },

    // === Worktree errors ===
    /// No worktree matches the requested name
    #[error("worktree {name:?} not found")]
    WorktreeNotFound { name: String },

    /// The branch is already checked out in a worktree
    #[error("worktree for branch {branch:?} already exists at {}", path.display())]
    WorktreeExists { branch: String, path: PathBuf },

    /// Removal refused because of uncommitted changes
    #[error("worktree {branch:?} has uncommitted changes; use --force to remove anyway")]
    DirtyWorktree { branch: String },

    /// The branch picker has nothing to offer
    #[error("no branches available")]
    NoBranches,

    // === Setup errors ===
    /// Shell integration requested for an unknown shell
    #[error("unsupported shell {shell:?}; supported: bash, zsh, fish")]
    UnsupportedShell { shell: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WtError {
    /// Short machine-readable code used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            WtError::NotAGitRepository { .. } => "not_a_git_repository",
            WtError::GitNotInstalled => "git_not_installed",
            WtError::GitCommand { .. } => "git_command",
            WtError::WorktreeNotFound { .. } => "worktree_not_found",
            WtError::WorktreeExists { .. } => "worktree_exists",
            WtError::DirtyWorktree { .. } => "dirty_worktree",
            WtError::NoBranches => "no_branches",
            WtError::UnsupportedShell { .. } => "unsupported_shell",
            WtError::Config { .. } => "config",
            WtError::Io(_) => "io",
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> u8 {
        match self {
            WtError::NotAGitRepository { .. } => 2,
            WtError::GitNotInstalled => 3,
            WtError::WorktreeNotFound { .. } => 4,
            WtError::WorktreeExists { .. } => 5,
            WtError::DirtyWorktree { .. } => 6,
            WtError::GitCommand { .. }
            | WtError::NoBranches
            | WtError::UnsupportedShell { .. }
            | WtError::Config { .. }
            | WtError::Io(_) => 1,
        }
    }
}
