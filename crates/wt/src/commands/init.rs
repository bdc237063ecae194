//! Implementation of the `wt init` command

use anyhow::Result;
use wt_core::{Shell, init_snippet};

/// Print the shell integration function for `shell`
pub fn run_init(shell: &str) -> Result<()> {
    let shell: Shell = shell.parse()?;
    print!("{}", init_snippet(shell));
    Ok(())
}
