//! CLI command implementations

pub mod completion;
pub mod create;
pub mod init;
pub mod list;
pub mod remove;
pub mod select;
pub mod status;
pub mod switch;

pub use completion::run_completion;
pub use create::{CreateOptions, run_create};
pub use init::run_init;
pub use list::run_list;
pub use remove::run_remove;
pub use select::run_select;
pub use status::run_status;
pub use switch::run_switch;

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use wt_core::{Config, Entry, GitCli, RepoInfo, Worktree, cd_directive};

use crate::theme::Theme;

/// Everything a repository command needs: config, layout, and output mode
pub struct Context {
    pub config: Config,
    pub repo: RepoInfo,
    pub theme: Theme,
    pub json: bool,
    pub quiet: bool,
}

impl Context {
    /// Load config and resolve the repository containing the current directory
    pub fn load(json: bool, quiet: bool) -> Result<Self> {
        let config = Config::load()?;
        let cwd = std::env::current_dir()?;
        let repo = RepoInfo::resolve(&cwd, &config.worktrees.dir_suffix)?;
        let theme = Theme::from_config(&config.picker);
        Ok(Self {
            config,
            repo,
            theme,
            json,
            quiet,
        })
    }

    pub fn git(&self) -> GitCli {
        self.repo.git()
    }

    pub fn worktrees(&self) -> Result<Vec<Worktree>> {
        Ok(self.git().list_worktrees()?)
    }

    /// Worktrees other than the main one
    pub fn linked(&self, worktrees: Vec<Worktree>) -> Vec<Worktree> {
        worktrees
            .into_iter()
            .filter(|wt| !self.repo.is_main(&wt.path))
            .collect()
    }

    pub fn display_path(&self, path: &Path) -> String {
        self.repo.relative_to_parent(path).display().to_string()
    }

    /// Picker entry for a worktree; the value is its path
    pub fn worktree_entry(&self, wt: &Worktree) -> Entry<PathBuf> {
        Entry::new(wt.branch.clone(), wt.path.clone())
            .with_detail(self.display_path(&wt.path))
            .primary(self.repo.is_main(&wt.path))
    }

    /// Informational message on stderr, suppressed by --quiet
    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Success message on stderr, suppressed by --quiet
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.theme.paint(self.theme.success, message));
        }
    }

    /// Hand `path` to the shell wrapper
    pub fn cd(&self, path: &Path) -> Result<()> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", cd_directive(path))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Whether `wt` is the worktree the user means by `name`: its branch, its
/// directory name, or the directory name `name` would sanitize to
pub fn matches_name(wt: &Worktree, name: &str) -> bool {
    if wt.branch == name {
        return true;
    }
    let Some(dir_name) = wt.path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    dir_name == name || dir_name == wt_core::sanitize(name)
}

/// Write an aligned table to stderr
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    eprintln!("{}", format_row(&header_cells, &widths));
    for row in rows {
        eprintln!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
