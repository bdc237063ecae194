//! Implementation of the `wt create` command

use std::collections::HashSet;

use anyhow::{Result, bail};
use tracing::{debug, info};
use wt_core::{Entry, Worktree, WtError, sanitize};

use super::Context;
use crate::picker;

const SOURCE_LOCAL: &str = "local";
const SOURCE_REMOTE: &str = "remote";
const WORKTREE_MARKER: &str = "worktree";

/// Arguments of `wt create`
#[derive(Debug, Default)]
pub struct CreateOptions {
    pub branch: Option<String>,
    pub base: Option<String>,
    pub local_only: bool,
    pub remote_only: bool,
}

/// A branch offered by the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    pub name: String,
    pub source: &'static str,
    pub has_worktree: bool,
}

pub fn run_create(ctx: &Context, options: CreateOptions) -> Result<()> {
    let worktrees = ctx.worktrees()?;

    let (branch, base) = match options.branch {
        Some(branch) => (branch, options.base),
        None => match pick_branch(ctx, &worktrees, options.local_only, options.remote_only)? {
            Some(picked) => picked,
            None => {
                debug!("branch selection cancelled");
                return Ok(());
            }
        },
    };

    if let Some(existing) = worktrees.iter().find(|wt| wt.branch == branch) {
        return Err(WtError::WorktreeExists {
            branch,
            path: existing.path.clone(),
        }
        .into());
    }

    let dir_name = sanitize(&branch);
    if dir_name.is_empty() {
        bail!("branch name {:?} has no characters usable in a directory name", branch);
    }

    ctx.repo.ensure_worktrees_dir()?;
    let path = ctx.repo.worktree_path(&dir_name);

    let git = ctx.git();
    let create_branch = base.is_some() || !git.branch_exists(&branch)?;
    info!(%branch, path = %path.display(), create_branch, "creating worktree");
    git.add_worktree(&path, &branch, create_branch, base.as_deref())?;

    ctx.success(&format!(
        "Created worktree for branch {:?} at {}",
        branch,
        path.display()
    ));
    ctx.cd(&path)
}

/// Run the branch picker, then the base picker when the branch is new.
/// Returns `None` when either picker is cancelled.
fn pick_branch(
    ctx: &Context,
    worktrees: &[Worktree],
    local_only: bool,
    remote_only: bool,
) -> Result<Option<(String, Option<String>)>> {
    let git = ctx.git();
    let local = if remote_only {
        Vec::new()
    } else {
        git.list_local_branches()?
    };
    let remote = if local_only {
        Vec::new()
    } else {
        git.list_remote_branches()?
    };

    let candidates = branch_candidates(local, remote, worktrees);
    if candidates.is_empty() {
        return Err(WtError::NoBranches.into());
    }

    let entries: Vec<_> = candidates.iter().map(branch_entry).collect();
    let Some(branch) = picker::pick("Branches", entries, &ctx.theme, true)? else {
        return Ok(None);
    };

    if git.branch_exists(&branch)? {
        return Ok(Some((branch, None)));
    }

    let base_entries: Vec<Entry<String>> = candidates
        .iter()
        .filter(|c| !c.has_worktree)
        .map(branch_entry)
        .collect();
    let base = picker::pick("Base branch", base_entries, &ctx.theme, true)?;
    Ok(base.map(|base| (branch, Some(base))))
}

/// Local branches followed by remote branches not also present locally.
/// Branches already checked out in a worktree are flagged.
pub fn branch_candidates(
    local: Vec<String>,
    remote: Vec<String>,
    worktrees: &[Worktree],
) -> Vec<BranchCandidate> {
    let checked_out: HashSet<&str> = worktrees.iter().map(|wt| wt.branch.as_str()).collect();
    let local_names: HashSet<String> = local.iter().cloned().collect();

    let local = local.into_iter().map(|name| (name, SOURCE_LOCAL));
    let remote = remote
        .into_iter()
        .filter(|name| !local_names.contains(name))
        .map(|name| (name, SOURCE_REMOTE));

    local
        .chain(remote)
        .map(|(name, source)| BranchCandidate {
            has_worktree: checked_out.contains(name.as_str()),
            name,
            source,
        })
        .collect()
}

fn branch_entry(candidate: &BranchCandidate) -> Entry<String> {
    let entry = Entry::new(candidate.name.clone(), candidate.name.clone())
        .with_detail(candidate.source);
    if candidate.has_worktree {
        entry.disabled(Some(WORKTREE_MARKER))
    } else {
        entry
    }
}
