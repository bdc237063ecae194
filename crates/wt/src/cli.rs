//! CLI argument parsing with clap derive

use clap::{Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use wt_core::{Shell, WtError};

use crate::commands::completion::{complete_create, complete_remove, complete_switch};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// wt - Git worktree manager
#[derive(Parser)]
#[command(name = "wt")]
#[command(version = VERSION)]
#[command(about = "Git worktree manager with fuzzy pickers")]
#[command(long_about = "Create, switch between, and remove git worktrees.\n\nLinked worktrees live in a sibling directory of the main worktree, e.g. ~/src/myrepo-worktrees/. Run without a subcommand to pick a worktree interactively.\n\nChanging directory requires the shell integration:\n  eval \"$(wt init bash)\"   # or zsh\n  wt init fish | source")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new worktree
    ///
    /// Without a branch, shows a branch picker.
    #[command(long_about = "Create a new worktree in the worktrees directory.\n\nThe directory name is the branch name with unsafe characters replaced by '-'. A new branch is created when the branch does not exist yet or --base is given.\n\nWithout a branch argument, a picker lists local and remote branches; branches that already have a worktree are shown but cannot be chosen.")]
    Create {
        /// Branch to check out or create
        #[arg(add = ArgValueCompleter::new(complete_create))]
        branch: Option<String>,

        /// Base branch or ref for a new branch
        #[arg(long)]
        base: Option<String>,

        /// Only offer local branches in the picker
        #[arg(long, conflicts_with = "remote")]
        local: bool,

        /// Only offer remote branches in the picker
        #[arg(long)]
        remote: bool,
    },

    /// Switch to a worktree
    ///
    /// Matches branch name, directory name, or sanitized branch name.
    Switch {
        /// Branch or directory name
        #[arg(add = ArgValueCompleter::new(complete_switch))]
        name: String,
    },

    /// List all worktrees
    List,

    /// Remove a linked worktree
    ///
    /// Without a name, shows a picker over linked worktrees.
    Remove {
        /// Branch or directory name
        #[arg(add = ArgValueCompleter::new(complete_remove))]
        name: Option<String>,

        /// Remove even with uncommitted changes
        #[arg(short, long)]
        force: bool,
    },

    /// Show clean/dirty state and upstream divergence of every worktree
    Status,

    /// Print the shell integration function
    ///
    /// Supported shells: bash, zsh, fish.
    #[command(long_about = "Print the shell integration function.\n\nThe function wraps `wt` so that commands which select a worktree change the current directory.\n\nUsage:\n  eval \"$(wt init bash)\"   # in .bashrc\n  eval \"$(wt init zsh)\"    # in .zshrc\n  wt init fish | source    # in config.fish")]
    Init {
        /// Shell name
        shell: String,
    },

    /// Print a shell completion script
    ///
    /// Supported shells: bash, zsh, fish.
    #[command(long_about = "Print a shell completion script.\n\nCompletes subcommands and flags, worktree names for switch and remove, and branches without a worktree for create.\n\nUsage:\n  source <(wt completion bash)   # in .bashrc\n  source <(wt completion zsh)    # in .zshrc\n  wt completion fish | source    # in config.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_parser = parse_shell)]
        shell: Shell,
    },
}

impl Commands {
    /// Command name used in JSON envelopes
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create { .. } => "create",
            Commands::Switch { .. } => "switch",
            Commands::List => "list",
            Commands::Remove { .. } => "remove",
            Commands::Status => "status",
            Commands::Init { .. } => "init",
            Commands::Completion { .. } => "completion",
        }
    }
}

fn parse_shell(name: &str) -> Result<Shell, WtError> {
    name.parse()
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
