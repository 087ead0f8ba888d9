use std::path::PathBuf;

use clap::Subcommand;
use mechbay::{
    config::Config,
    error::Error,
    service::{
        exchange::{force::ForceExchangeService, read_document, render_document, write_document},
        force::ForceService,
    },
};
use sea_orm::DatabaseConnection;

use crate::cli::{export_timestamp, sanitize_file_name};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List forces, the active force first
    List,
    /// Export a force to the export directory
    Export { id: i32 },
    /// Import a force document as a new inactive force
    Import { file: PathBuf },
}

pub async fn handle(db: &DatabaseConnection, config: &Config, cmd: &Command) -> Result<(), Error> {
    match cmd {
        Command::List => {
            let forces = ForceService::new(db).list_forces().await?;
            for force in forces {
                let marker = if force.is_active { "*" } else { " " };
                println!("{} {:>4}  {}", marker, force.id, force.name);
            }
        }
        Command::Export { id } => {
            let exchange = ForceExchangeService::new(db);
            let document = exchange.export_force(*id).await?;
            let json = render_document(&document)?;
            let path = config.export_dir.join(format!(
                "force-{}-{}.json",
                sanitize_file_name(&document.force_name),
                export_timestamp()
            ));
            write_document(&path, &json).await?;
            println!("Exported force {:?} to {}", document.force_name, path.display());
        }
        Command::Import { file } => {
            let exchange =
                ForceExchangeService::new(db).with_default_series(config.default_series.as_str());
            let json = read_document(file).await?;
            let report = exchange.import_force_json(&json).await?;
            println!(
                "Imported force {:?} (ID {}) with {} miniatures",
                report.force_name, report.force_id, report.imported_count
            );
            for lance in &report.lances {
                if !lance.duplicates.is_empty() {
                    println!(
                        "  Lance {}: skipped duplicates {}",
                        lance.name.as_deref().unwrap_or("Unnamed"),
                        lance.duplicates.join(", ")
                    );
                }
            }
            if !report.missing_miniatures.is_empty() {
                println!(
                    "Missing miniatures: {}",
                    report.missing_miniatures.join(", ")
                );
            }
        }
    }

    Ok(())
}
