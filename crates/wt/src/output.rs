//! JSON output formatting

use serde::{Deserialize, Serialize};
use wt_core::WtError;

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Errors and warnings
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// Print to stdout as pretty JSON
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Issue object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Machine-readable code, e.g. "worktree_not_found"
    pub code: String,
    /// Severity level
    pub severity: String,
    /// Human-readable message
    pub message: String,
}

impl JsonIssue {
    /// Issue for a failed command; `WtError`s keep their own code
    pub fn from_error(err: &anyhow::Error) -> Self {
        let code = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<WtError>())
            .map_or("error", WtError::code);
        Self {
            code: code.to_string(),
            severity: "error".to_string(),
            message: format!("{:#}", err),
        }
    }
}

/// Data payload for list command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListData {
    pub worktrees: Vec<WorktreeSummary>,
}

/// One worktree in list output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorktreeSummary {
    /// Branch name, or "(detached)"
    pub branch: String,
    /// Absolute path
    pub path: String,
    /// Path relative to the main worktree's parent directory
    pub display_path: String,
    /// HEAD commit
    pub head: String,
    /// Whether this is the main worktree
    pub main: bool,
}

/// Data payload for status command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusData {
    pub worktrees: Vec<WorktreeStatus>,
}

/// Working state of one worktree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorktreeStatus {
    pub branch: String,
    pub path: String,
    pub display_path: String,
    /// "clean", "dirty", or "error"
    pub status: String,
    /// Commits ahead of upstream; absent when it could not be determined
    pub ahead: Option<usize>,
    /// Commits behind upstream; absent when it could not be determined
    pub behind: Option<usize>,
    pub main: bool,
}
