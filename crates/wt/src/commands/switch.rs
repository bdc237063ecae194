//! Implementation of the `wt switch` command

use anyhow::Result;
use wt_core::WtError;

use super::{Context, matches_name};

pub fn run_switch(ctx: &Context, name: &str) -> Result<()> {
    let worktrees = ctx.worktrees()?;

    if let Some(wt) = worktrees.iter().find(|wt| matches_name(wt, name)) {
        return ctx.cd(&wt.path);
    }

    let message = format!("Worktree {:?} not found. Available worktrees:", name);
    eprintln!("{}", ctx.theme.paint(ctx.theme.warning, &message));
    for wt in ctx.linked(worktrees) {
        eprintln!("  {}", wt.branch);
    }
    Err(WtError::WorktreeNotFound {
        name: name.to_string(),
    }
    .into())
}
