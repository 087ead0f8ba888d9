use std::path::PathBuf;

use clap::Subcommand;
use mechbay::{
    config::Config,
    error::Error,
    model::exchange::ImportMode,
    service::exchange::{miniature::MiniatureExchangeService, read_document, write_document},
};
use sea_orm::DatabaseConnection;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export the inventory to miniatures.json in the export directory
    Export,
    /// Import miniatures from a JSON file, replacing the inventory unless --merge is given
    Import {
        file: PathBuf,
        /// Update miniatures with a matching series and unique ID instead of replacing all
        #[arg(long)]
        merge: bool,
    },
}

pub async fn handle(db: &DatabaseConnection, config: &Config, cmd: &Command) -> Result<(), Error> {
    let exchange =
        MiniatureExchangeService::new(db).with_default_series(config.default_series.as_str());

    match cmd {
        Command::Export => {
            let json = exchange.export_miniatures_json().await?;
            let path = config.export_dir.join("miniatures.json");
            write_document(&path, &json).await?;
            println!("Exported miniatures to {}", path.display());
        }
        Command::Import { file, merge } => {
            let mode = if *merge {
                ImportMode::Merge
            } else {
                ImportMode::Replace
            };
            let json = read_document(file).await?;
            let report = exchange.import_miniatures_json(&json, mode).await?;
            println!(
                "Imported miniatures: {} inserted, {} updated, {} removed",
                report.inserted, report.updated, report.removed
            );
        }
    }

    Ok(())
}
