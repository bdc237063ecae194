//! Implementation of the `wt list` command

use anyhow::Result;

use super::{Context, print_table};
use crate::output::{JsonResponse, ListData, WorktreeSummary};

pub fn run_list(ctx: &Context) -> Result<()> {
    let worktrees = ctx.worktrees()?;

    let summaries: Vec<WorktreeSummary> = worktrees
        .iter()
        .map(|wt| WorktreeSummary {
            branch: wt.branch.clone(),
            path: wt.path.display().to_string(),
            display_path: ctx.display_path(&wt.path),
            head: wt.head.clone(),
            main: ctx.repo.is_main(&wt.path),
        })
        .collect();

    if ctx.json {
        return JsonResponse::ok("list", ListData { worktrees: summaries }).print();
    }
    if ctx.quiet {
        return Ok(());
    }

    if summaries.iter().all(|s| s.main) {
        ctx.info("No additional worktrees. Create one with: wt create <branch>");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = summaries
        .into_iter()
        .map(|s| {
            let main = if s.main { "*" } else { "" };
            vec![s.branch, s.display_path, main.to_string()]
        })
        .collect();
    print_table(&["BRANCH", "PATH", "MAIN"], &rows);
    Ok(())
}
