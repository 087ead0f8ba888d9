use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mechbay::{config::Config, error::Error, service::inventory::InventoryService, startup};
use tracing::{error, info};

mod cli;

#[derive(Parser, Debug)]
#[command(name = "mechbay")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the database URL
    #[arg(long, global = true)]
    database_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run database migrations
    Migrate,
    /// Insert example miniatures
    Seed,
    /// Export or import the miniature inventory
    #[command(subcommand)]
    Miniatures(cli::miniature::Command),
    /// List, export or import forces
    #[command(subcommand)]
    Forces(cli::force::Command),
    /// Export or import lance templates
    #[command(subcommand)]
    Templates(cli::template::Command),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error ({:?}): {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let mut config = Config::from_env()?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    let db = startup::connect_to_database(&config).await?;

    match &cli.command {
        Command::Migrate => info!("Database migrations are up to date"),
        Command::Seed => {
            let created = InventoryService::new(&db)
                .with_default_series(config.default_series.as_str())
                .seed()
                .await?;
            println!("Seeded {} miniatures.", created);
        }
        Command::Miniatures(cmd) => cli::miniature::handle(&db, &config, cmd).await?,
        Command::Forces(cmd) => cli::force::handle(&db, &config, cmd).await?,
        Command::Templates(cmd) => cli::template::handle(&db, &config, cmd).await?,
    }

    Ok(())
}
