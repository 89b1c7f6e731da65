//! tootbatch - run batches of Mastodon API calls from the command line

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, warn};

mod cli;
mod commands;
mod context;

use cli::{Cli, Commands};
use context::AppContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging FIRST so we can see .env loading
    if let Err(e) = tootbatch_infra::init_tracing(cli.log_format) {
        let _ = writeln!(std::io::stderr(), "Warning: {}", e);
    }

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "tootbatch failed");
            let _ = writeln!(std::io::stderr(), "Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exit status when the batch finished but some items were recorded as
/// failures.
const PARTIAL_FAILURE: u8 = 2;

async fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdout = std::io::stdout();

    match cli.command {
        Commands::Operations => {
            commands::write_json(&mut stdout.lock(), &commands::operations::catalog())?;
        }
        Commands::Verify => {
            let ctx = AppContext::load(cli.config)?;
            let account = commands::verify::verify(&ctx).await?;
            commands::write_json(&mut stdout.lock(), &account)?;
        }
        Commands::Run(args) => {
            let ctx = AppContext::load(cli.config)?;
            let outcome = commands::run::run(&ctx, &args).await?;
            let failed = outcome.has_failures();
            if failed {
                warn!(failures = outcome.failures.len(), "some items failed");
            }
            commands::write_json(&mut stdout.lock(), &outcome.into_records())?;
            if failed {
                return Ok(ExitCode::from(PARTIAL_FAILURE));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
