//! Command-line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tootbatch_infra::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "tootbatch",
    version,
    about = "Run one Mastodon API call per input item",
    long_about = "Runs a single resource/operation against a Mastodon instance for every\n\
                  input item and prints the resulting records as JSON on stdout."
)]
pub struct Cli {
    /// Config file (JSON or TOML). Without it, environment variables are
    /// tried first, then the standard file locations.
    #[arg(long, global = true, env = "TOOTBATCH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, default_value = "pretty", value_name = "pretty|json")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute one resource/operation for every input item
    Run(RunArgs),
    /// Check the configured access token against the instance
    Verify,
    /// List supported resources, operations and their parameters
    Operations,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Resource to act on (status, account, notification)
    #[arg(long, default_value = "status")]
    pub resource: String,

    /// Operation on the resource; defaults to the resource's default operation
    #[arg(long)]
    pub operation: Option<String>,

    /// Parameters applied to every item, as a JSON object. Item fields of the
    /// same name take precedence.
    #[arg(long, value_name = "JSON")]
    pub params: Option<String>,

    /// Input items as a JSON array or a single object; `-` reads stdin.
    /// Without it the batch runs once with an empty item.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Record per-item failures as error records instead of aborting
    #[arg(long)]
    pub continue_on_fail: bool,
}
