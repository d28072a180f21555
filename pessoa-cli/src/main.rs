//! pessoa CLI - serves the Pessoa table over HTTP
//!
//! `pessoa serve` starts the read-only API (`GET /api/pessoa`).
//! A `.env` file in the working directory is loaded before arguments are parsed.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "pessoa",
    author,
    version,
    about = "Read-only HTTP API over the Pessoa table"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::try_parse_from(["pessoa", "serve", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Serve(_)));
    }
}
