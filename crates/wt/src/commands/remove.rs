//! Implementation of the `wt remove` command

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};
use wt_core::WtError;

use super::{Context, matches_name};
use crate::picker;

pub fn run_remove(ctx: &Context, name: Option<&str>, force: bool) -> Result<()> {
    let linked = ctx.linked(ctx.worktrees()?);
    if linked.is_empty() {
        ctx.info("No worktrees to remove.");
        return Ok(());
    }

    let target = match name {
        Some(name) => linked
            .iter()
            .find(|wt| matches_name(wt, name))
            .ok_or_else(|| WtError::WorktreeNotFound {
                name: name.to_string(),
            })?,
        None => {
            let entries: Vec<_> = linked.iter().map(|wt| ctx.worktree_entry(wt)).collect();
            let picked = picker::pick(
                "Remove worktree",
                entries,
                &ctx.theme,
                ctx.config.picker.show_paths,
            )?;
            let Some(path) = picked else {
                debug!("removal cancelled");
                return Ok(());
            };
            match linked.iter().find(|wt| wt.path == path) {
                Some(wt) => wt,
                None => return Ok(()),
            }
        }
    };

    let git = ctx.git();
    if !force && git.is_dirty(&target.path)? {
        return Err(WtError::DirtyWorktree {
            branch: target.branch.clone(),
        }
        .into());
    }

    info!(branch = %target.branch, path = %target.path.display(), force, "removing worktree");
    git.remove_worktree(&target.path, force)?;
    clean_empty_parents(&target.path, &ctx.repo.worktrees_dir);

    ctx.success(&format!("Removed worktree {:?}", target.branch));
    Ok(())
}

/// Remove now-empty directories between `path` and `stop_at`, exclusive
pub fn clean_empty_parents(path: &Path, stop_at: &Path) {
    let mut dir = path.parent();
    while let Some(current) = dir {
        if current == stop_at || !current.starts_with(stop_at) {
            break;
        }
        let is_empty = fs::read_dir(current).is_ok_and(|mut entries| entries.next().is_none());
        if !is_empty || fs::remove_dir(current).is_err() {
            break;
        }
        debug!(dir = %current.display(), "removed empty directory");
        dir = current.parent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty_parents() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("repo-worktrees");
        let leaf = root.join("a").join("b").join("wt");
        fs::create_dir_all(&leaf).unwrap();
        fs::remove_dir(&leaf).unwrap();

        clean_empty_parents(&leaf, &root);
        assert!(!root.join("a").exists());
        assert!(root.exists());
    }

    #[test]
    fn test_clean_empty_parents_stops_at_non_empty() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("repo-worktrees");
        let leaf = root.join("a").join("b").join("wt");
        fs::create_dir_all(&leaf).unwrap();
        fs::write(root.join("a").join("keep.txt"), "x").unwrap();
        fs::remove_dir(&leaf).unwrap();

        clean_empty_parents(&leaf, &root);
        assert!(!root.join("a").join("b").exists());
        assert!(root.join("a").exists());
    }

    #[test]
    fn test_clean_empty_parents_outside_root() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("repo-worktrees");
        let other = temp.path().join("elsewhere").join("wt");
        fs::create_dir_all(&other).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::remove_dir(&other).unwrap();

        clean_empty_parents(&other, &root);
        assert!(temp.path().join("elsewhere").exists());
    }
}
