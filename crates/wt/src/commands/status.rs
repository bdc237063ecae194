//! Implementation of the `wt status` command

use anyhow::Result;
use tracing::warn;
use wt_core::Worktree;

use super::{Context, print_table};
use crate::output::{JsonResponse, StatusData, WorktreeStatus};

pub fn run_status(ctx: &Context) -> Result<()> {
    let worktrees = ctx.worktrees()?;
    let statuses: Vec<WorktreeStatus> = worktrees.iter().map(|wt| inspect(ctx, wt)).collect();

    if ctx.json {
        return JsonResponse::ok("status", StatusData { worktrees: statuses }).print();
    }
    if ctx.quiet {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = statuses
        .into_iter()
        .map(|s| {
            vec![
                s.branch,
                s.display_path,
                s.status,
                count_cell(s.ahead),
                count_cell(s.behind),
                if s.main { "*" } else { "" }.to_string(),
            ]
        })
        .collect();
    print_table(&["BRANCH", "PATH", "STATUS", "AHEAD", "BEHIND", "MAIN"], &rows);
    Ok(())
}

fn inspect(ctx: &Context, wt: &Worktree) -> WorktreeStatus {
    let git = ctx.git();

    let status = match git.is_dirty(&wt.path) {
        Ok(true) => "dirty",
        Ok(false) => "clean",
        Err(e) => {
            warn!(path = %wt.path.display(), "status failed: {}", e);
            "error"
        }
    };

    let (ahead, behind) = match git.ahead_behind(&wt.path) {
        Ok((ahead, behind)) => (Some(ahead), Some(behind)),
        Err(e) => {
            warn!(path = %wt.path.display(), "ahead/behind failed: {}", e);
            (None, None)
        }
    };

    WorktreeStatus {
        branch: wt.branch.clone(),
        path: wt.path.display().to_string(),
        display_path: ctx.display_path(&wt.path),
        status: status.to_string(),
        ahead,
        behind,
        main: ctx.repo.is_main(&wt.path),
    }
}

fn count_cell(count: Option<usize>) -> String {
    count.map_or_else(|| "-".to_string(), |n| n.to_string())
}
