//! Implementation of the `wt completion` command and the dynamic completers
//!
//! `wt completion <shell>` prints a registration script that calls back into
//! `wt` with `COMPLETE=<shell>` set; `main` hands those calls to
//! [`clap_complete::env::CompleteEnv`], which runs the completers below.

use std::ffi::OsStr;
use std::io::Write;

use anyhow::Result;
use clap_complete::engine::CompletionCandidate;
use clap_complete::env::{Bash, EnvCompleter, Fish, Zsh};
use wt_core::git::DETACHED;
use wt_core::{Shell, Worktree};

use super::Context;
use super::create::branch_candidates;

/// Environment variable that switches `wt` into completion mode
pub const COMPLETE_ENV: &str = "COMPLETE";

const BIN_NAME: &str = "wt";

/// Write the completion registration script for `shell` to stdout
pub fn run_completion(shell: Shell) -> Result<()> {
    let completer: &dyn EnvCompleter = match shell {
        Shell::Bash => &Bash,
        Shell::Zsh => &Zsh,
        Shell::Fish => &Fish,
    };
    let mut stdout = std::io::stdout();
    completer.write_registration(COMPLETE_ENV, BIN_NAME, BIN_NAME, BIN_NAME, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// `wt switch`: every worktree branch, main included
pub fn complete_switch(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(ctx) = completion_context() else {
        return Vec::new();
    };
    let Ok(worktrees) = ctx.worktrees() else {
        return Vec::new();
    };
    candidates(current, switch_names(&worktrees))
}

/// `wt remove`: linked worktree branches only
pub fn complete_remove(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(ctx) = completion_context() else {
        return Vec::new();
    };
    let Ok(worktrees) = ctx.worktrees() else {
        return Vec::new();
    };
    candidates(current, remove_names(&ctx, worktrees))
}

/// `wt create`: local and remote branches without a worktree
pub fn complete_create(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(ctx) = completion_context() else {
        return Vec::new();
    };
    let Ok(worktrees) = ctx.worktrees() else {
        return Vec::new();
    };
    let git = ctx.git();
    let local = git.list_local_branches().unwrap_or_default();
    let remote = git.list_remote_branches().unwrap_or_default();
    candidates(current, create_names(local, remote, &worktrees))
}

fn completion_context() -> Option<Context> {
    Context::load(false, true).ok()
}

fn switch_names(worktrees: &[Worktree]) -> Vec<String> {
    worktrees
        .iter()
        .filter(|wt| wt.branch != DETACHED)
        .map(|wt| wt.branch.clone())
        .collect()
}

fn remove_names(ctx: &Context, worktrees: Vec<Worktree>) -> Vec<String> {
    switch_names(&ctx.linked(worktrees))
}

fn create_names(local: Vec<String>, remote: Vec<String>, worktrees: &[Worktree]) -> Vec<String> {
    branch_candidates(local, remote, worktrees)
        .into_iter()
        .filter(|c| !c.has_worktree)
        .map(|c| c.name)
        .collect()
}

fn candidates(current: &OsStr, names: Vec<String>) -> Vec<CompletionCandidate> {
    let prefix = current.to_string_lossy();
    names
        .into_iter()
        .filter(|name| name.starts_with(prefix.as_ref()))
        .map(CompletionCandidate::new)
        .collect()
}
