//! Implementation of bare `wt`: pick a worktree and switch to it

use anyhow::Result;
use tracing::debug;

use super::Context;
use crate::picker;

pub fn run_select(ctx: &Context) -> Result<()> {
    let worktrees = ctx.worktrees()?;
    if worktrees.iter().all(|wt| ctx.repo.is_main(&wt.path)) {
        ctx.info("No worktrees found. Create one with: wt create <branch>");
        return Ok(());
    }

    let entries: Vec<_> = worktrees.iter().map(|wt| ctx.worktree_entry(wt)).collect();
    let selected = picker::pick(
        "Select worktree",
        entries,
        &ctx.theme,
        ctx.config.picker.show_paths,
    )?;

    match selected {
        Some(path) => ctx.cd(&path),
        None => {
            debug!("selection cancelled");
            Ok(())
        }
    }
}
