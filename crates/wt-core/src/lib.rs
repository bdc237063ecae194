//! wt-core: Core library for the wt git worktree manager
//!
//! Holds the fuzzy scorer and selection state machine behind the interactive
//! pickers, plus the git, repository layout, naming, shell, and configuration
//! helpers the `wt` binary is built on.

/// Core error types for wt operations
pub mod error;

/// Configuration handling
pub mod config;

/// Fuzzy scoring of candidates against a query
pub mod fuzzy;

/// Candidates and the picker selection state machine
pub mod picker;

/// Git CLI wrapper
pub mod git;

/// Repository layout resolution
pub mod repo;

/// Branch to directory name conversion
pub mod names;

/// Shell integration snippets
pub mod shell;

// Re-exports for convenience
pub use config::Config;
pub use error::WtError;
pub use fuzzy::{Match, score};
pub use git::{GitCli, Worktree};
pub use names::sanitize;
pub use picker::{Entry, Event, Selectability, SelectionModel, Status, transition};
pub use repo::RepoInfo;
pub use shell::{CD_SENTINEL, Shell, cd_directive, init_snippet};
