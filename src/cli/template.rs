use std::path::PathBuf;

use clap::Subcommand;
use mechbay::{
    config::Config,
    error::Error,
    service::exchange::{read_document, template::TemplateExchangeService, write_document},
};
use sea_orm::DatabaseConnection;

use crate::cli::export_timestamp;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export all lance templates to the export directory
    Export,
    /// Import lance templates, replacing templates with the same name
    Import { file: PathBuf },
}

pub async fn handle(db: &DatabaseConnection, config: &Config, cmd: &Command) -> Result<(), Error> {
    let exchange = TemplateExchangeService::new(db);

    match cmd {
        Command::Export => {
            let json = exchange.export_templates_json().await?;
            let path = config
                .export_dir
                .join(format!("templates-{}.json", export_timestamp()));
            write_document(&path, &json).await?;
            println!("Exported lance templates to {}", path.display());
        }
        Command::Import { file } => {
            let json = read_document(file).await?;
            let report = exchange.import_templates_json(&json).await?;
            println!(
                "Imported lance templates: {} created, {} updated, {} skipped",
                report.created, report.updated, report.skipped
            );
        }
    }

    Ok(())
}
