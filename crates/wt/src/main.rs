//! wt CLI - Git worktree manager with fuzzy pickers

mod cli;
mod commands;
mod output;
mod picker;
mod theme;

use std::process::ExitCode;

use clap::CommandFactory;
use clap_complete::env::CompleteEnv;
use tracing_subscriber::EnvFilter;
use wt_core::WtError;

use cli::{Cli, Commands};
use commands::{Context, CreateOptions};
use output::{JsonIssue, JsonResponse};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "WT_LOG";

fn main() -> ExitCode {
    CompleteEnv::with_factory(Cli::command)
        .var(commands::completion::COMPLETE_ENV)
        .complete();

    let cli = cli::parse();
    init_logging(cli.verbose);

    let command_name = cli.command.as_ref().map_or("select", Commands::name);
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                let issues = vec![JsonIssue::from_error(&err)];
                let response = JsonResponse::error(command_name, serde_json::Value::Null, issues);
                if let Err(print_err) = response.print() {
                    eprintln!("error: {:#}", print_err);
                }
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (json, quiet) = (cli.json, cli.quiet);
    let load = || Context::load(json, quiet);

    match cli.command {
        None => commands::run_select(&load()?),
        Some(Commands::Create {
            branch,
            base,
            local,
            remote,
        }) => commands::run_create(
            &load()?,
            CreateOptions {
                branch,
                base,
                local_only: local,
                remote_only: remote,
            },
        ),
        Some(Commands::Switch { name }) => commands::run_switch(&load()?, &name),
        Some(Commands::List) => commands::run_list(&load()?),
        Some(Commands::Remove { name, force }) => {
            commands::run_remove(&load()?, name.as_deref(), force)
        }
        Some(Commands::Status) => commands::run_status(&load()?),
        Some(Commands::Init { shell }) => commands::run_init(&shell),
        Some(Commands::Completion { shell }) => commands::run_completion(shell),
    }
}

/// Logs go to stderr: DEBUG with --verbose, WARN otherwise, unless `WT_LOG`
/// holds a filter directive
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Exit code of the first `WtError` in the chain, 1 otherwise
fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<WtError>())
        .map_or(1, WtError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        crate::cli::Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_code_from_chain() {
        let err = anyhow::Error::new(WtError::DirtyWorktree {
            branch: "feat".to_string(),
        })
        .context("remove failed");
        assert_eq!(exit_code(&err), 6);

        let err = anyhow::Error::new(WtError::NotAGitRepository {
            reason: "fatal".to_string(),
        });
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_other_errors() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
