//! `lastpay` - serves the interactions endpoint, or registers its slash commands.

use clap::{Parser, Subcommand};
use lastpay::builder::CreateCommand;
use lastpay::commands::SlashCommand;
use lastpay::config::Config;
use lastpay::{server, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lastpay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the interactions endpoint (the default).
    Serve,
    /// Overwrite the application's global slash commands with the ones this binary answers.
    Register,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lastpay=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().map_err(Error::from)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::serve(&config).await?,
        Command::Register => register(&config).await?,
    }

    Ok(())
}

async fn register(config: &Config) -> lastpay::Result<()> {
    let http = config.http()?;
    let definitions = SlashCommand::definitions();

    let commands =
        CreateCommand::set_global_commands(&http, config.application_id, &definitions).await?;

    for command in &commands {
        info!(id = %command.id, name = %command.name, "Registered command");
    }
    info!("Registered {} global command(s)", commands.len());

    Ok(())
}
