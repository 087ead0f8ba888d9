use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::{
    data::{
        force::{force_miniature::ForceMiniatureRepository, lance::LanceRepository, ForceRepository},
        miniature::MiniatureRepository,
    },
    error::{not_found::NotFoundError, Error},
    model::{
        exchange::{
            ForceDocument, ForceImportReport, LanceDocument, LanceImportReport,
            MiniatureReference,
        },
        miniature::DEFAULT_SERIES,
    },
    service::{
        exchange::{parse_document, render_document},
        force::load_force_aggregate,
    },
};

const IMPORTED_FORCE_NAME: &str = "Imported Force";

/// Exports a force with its lances and imports force documents as new forces
pub struct ForceExchangeService<'a> {
    db: &'a DatabaseConnection,
    default_series: String,
}

impl<'a> ForceExchangeService<'a> {
    /// Creates a new instance of [`ForceExchangeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            default_series: DEFAULT_SERIES.to_string(),
        }
    }

    /// Replaces the series assumed for references that carry none
    pub fn with_default_series(mut self, series: impl Into<String>) -> Self {
        self.default_series = series.into();
        self
    }

    /// Builds the export document of a force
    ///
    /// Miniatures are referenced by `(series, unique_id)` rather than internal id.
    pub async fn export_force(&self, force_id: i32) -> Result<ForceDocument, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        let force = force_repo
            .get_by_id(force_id)
            .await?
            .ok_or(NotFoundError::Force(force_id))?;
        let aggregate = load_force_aggregate(&txn, force).await?;

        txn.commit().await?;

        let lances = aggregate
            .lances
            .into_iter()
            .map(|lance| LanceDocument {
                name: lance.lance.name,
                order: lance.lance.position,
                miniatures: lance
                    .assignments
                    .into_iter()
                    .map(|entry| MiniatureReference {
                        series: entry.miniature.series,
                        unique_id: entry.miniature.unique_id,
                        prefix: entry.miniature.prefix,
                        chassis: entry.miniature.chassis,
                        tray_id: entry.miniature.tray_id,
                        order: entry.assignment.position,
                    })
                    .collect(),
            })
            .collect();

        info!("Exported force ID {}", force_id);

        Ok(ForceDocument {
            force_name: aggregate.force.name,
            exported_at: Some(Utc::now().naive_utc()),
            lances,
        })
    }

    pub async fn export_force_json(&self, force_id: i32) -> Result<String, Error> {
        render_document(&self.export_force(force_id).await?)
    }

    /// Imports a force document as a new, inactive force
    ///
    /// # Behavior
    /// - Lances and assignments are created in document `order` and keep that `order` as
    ///   their position
    /// - References are resolved by `(series, unique_id)` only; unresolved references are
    ///   reported as missing and produce no assignment
    /// - A reference to a miniature already placed earlier in the document is reported as a
    ///   duplicate instead of being assigned twice
    pub async fn import_force(&self, document: ForceDocument) -> Result<ForceImportReport, Error> {
        let force_name = match document.force_name.trim() {
            "" => IMPORTED_FORCE_NAME.to_string(),
            name => name.to_string(),
        };

        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let miniature_repo = MiniatureRepository::new(&txn);
        let lance_repo = LanceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let force = force_repo.create(force_name, false).await?;

        let mut lances = document.lances;
        lances.sort_by_key(|lance| lance.order);

        let mut placed = HashSet::new();
        let mut report = ForceImportReport {
            force_id: force.id,
            force_name: force.name.clone(),
            imported_count: 0,
            missing_miniatures: Vec::new(),
            lances: Vec::with_capacity(lances.len()),
        };

        for lance_document in lances {
            let name = lance_document
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty());
            let lance = lance_repo
                .create(force.id, name, lance_document.order)
                .await?;

            let mut lance_report = LanceImportReport {
                lance_id: lance.id,
                name: lance.name.clone(),
                imported_count: 0,
                missing: Vec::new(),
                duplicates: Vec::new(),
            };

            let mut references = lance_document.miniatures;
            references.sort_by_key(|reference| reference.order);

            for mut reference in references {
                if reference.series.trim().is_empty() {
                    reference.series = self.default_series.clone();
                }

                let Some(miniature) = miniature_repo
                    .find_by_identity(&reference.series, reference.unique_id)
                    .await?
                else {
                    lance_report.missing.push(reference.label());
                    continue;
                };

                if !placed.insert(miniature.id) {
                    lance_report.duplicates.push(reference.label());
                    continue;
                }

                assignment_repo
                    .create(lance.id, miniature.id, reference.order)
                    .await?;
                lance_report.imported_count += 1;
            }

            report.imported_count += lance_report.imported_count;
            report
                .missing_miniatures
                .extend(lance_report.missing.iter().cloned());
            report.lances.push(lance_report);
        }

        txn.commit().await?;

        info!(
            "Imported force {:?} (ID {}) with {} lances and {} miniatures",
            report.force_name,
            report.force_id,
            report.lances.len(),
            report.imported_count
        );
        if !report.missing_miniatures.is_empty() {
            warn!(
                "Force import could not resolve {} miniatures: {}",
                report.missing_miniatures.len(),
                report.missing_miniatures.join(", ")
            );
        }

        Ok(report)
    }

    pub async fn import_force_json(&self, json: &str) -> Result<ForceImportReport, Error> {
        let document: ForceDocument = parse_document(json)?;

        self.import_force(document).await
    }
}
