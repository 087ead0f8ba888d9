use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use crate::{
    data::lance_template::LanceTemplateRepository,
    error::Error,
    model::{
        exchange::{TemplateDocument, TemplateImportReport, TemplateRecord},
        template::NewTemplate,
    },
    service::{
        exchange::{parse_document, render_document},
        lance_template::{load_all_templates, normalize_template, store_template},
    },
};

/// Exports all lance templates and imports them back, upserting by name
pub struct TemplateExchangeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateExchangeService<'a> {
    /// Creates a new instance of [`TemplateExchangeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn export_templates(&self) -> Result<TemplateDocument, Error> {
        let txn = self.db.begin().await?;
        let templates = load_all_templates(&txn).await?;
        txn.commit().await?;

        let templates: Vec<TemplateRecord> = templates
            .into_iter()
            .map(|template| TemplateRecord {
                chassis_patterns: template.chassis_patterns(),
                name: Some(template.template.name),
                description: template.template.description,
            })
            .collect();

        info!("Exported {} lance templates", templates.len());

        Ok(TemplateDocument {
            exported_at: Some(Utc::now().naive_utc()),
            template_count: templates.len(),
            templates,
        })
    }

    pub async fn export_templates_json(&self) -> Result<String, Error> {
        render_document(&self.export_templates().await?)
    }

    /// Imports templates, replacing the patterns of any template with the same name
    ///
    /// Records without a name or without a non-blank pattern are skipped and counted.
    pub async fn import_templates(
        &self,
        document: TemplateDocument,
    ) -> Result<TemplateImportReport, Error> {
        let txn = self.db.begin().await?;
        let template_repo = LanceTemplateRepository::new(&txn);

        let mut report = TemplateImportReport::default();

        for (index, record) in document.templates.into_iter().enumerate() {
            let Some(name) = record.name else {
                debug!("Skipping template record {} without a name", index);
                report.skipped += 1;
                continue;
            };

            let template = match normalize_template(NewTemplate {
                name,
                description: record.description,
                chassis_patterns: record.chassis_patterns,
            }) {
                Ok(template) => template,
                Err(Error::ValidationError(err)) => {
                    debug!("Skipping template record {}: {}", index, err);
                    report.skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            match template_repo.find_by_name(&template.name).await? {
                Some(existing) => {
                    store_template(&txn, Some(existing), template).await?;
                    report.updated += 1;
                }
                None => {
                    store_template(&txn, None, template).await?;
                    report.created += 1;
                }
            }
        }

        txn.commit().await?;

        info!(
            "Imported lance templates: {} created, {} updated, {} skipped",
            report.created, report.updated, report.skipped
        );

        Ok(report)
    }

    pub async fn import_templates_json(&self, json: &str) -> Result<TemplateImportReport, Error> {
        let document: TemplateDocument = parse_document(json)?;

        self.import_templates(document).await
    }
}
