mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use innkeep_api::ApiClient;
use innkeep_config::FileSessionStore;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands never touch the server
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "innkeep", &mut std::io::stdout());
            Ok(())
        }

        // Everything else goes through an API client bound to the session file
        cmd => {
            let cfg = config::load_config_or_default();
            let active = config::effective_profile(&cli.global, &cfg)?;
            let client = build_client(&active)?;

            tracing::debug!(
                command = ?cmd,
                profile = %active.name,
                base_url = %client.base_url(),
                "dispatching command"
            );
            commands::dispatch(cmd, &client, &active, &cli.global).await
        }
    }
}

/// Build an `ApiClient` for the active profile, persisting its session on disk.
fn build_client(active: &config::ActiveProfile) -> Result<ApiClient, CliError> {
    let client_config = config::client_config(&active.profile)?;
    let session_file = config::session_file(&active.profile);
    tracing::debug!(path = %session_file.display(), "using session file");

    let store = Arc::new(FileSessionStore::new(session_file));
    Ok(ApiClient::new(client_config, store)?)
}
