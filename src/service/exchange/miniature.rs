use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{force::force_miniature::ForceMiniatureRepository, miniature::MiniatureRepository},
    error::{conflict::ConflictError, import::ImportError, Error},
    model::{
        exchange::{ImportMode, MiniatureImportReport, MiniatureRecord},
        miniature::{MiniatureUpdate, NewMiniature, DEFAULT_SERIES},
    },
    service::{
        exchange::{parse_document, render_document},
        inventory::normalize_new_miniature,
    },
};

/// Exports the inventory as flat miniature records and imports them back
pub struct MiniatureExchangeService<'a> {
    db: &'a DatabaseConnection,
    default_series: String,
}

impl<'a> MiniatureExchangeService<'a> {
    /// Creates a new instance of [`MiniatureExchangeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            default_series: DEFAULT_SERIES.to_string(),
        }
    }

    /// Replaces the series applied to imported records that carry none
    pub fn with_default_series(mut self, series: impl Into<String>) -> Self {
        self.default_series = series.into();
        self
    }

    /// Every miniature as an export record, ordered by id
    pub async fn export_miniatures(&self) -> Result<Vec<MiniatureRecord>, Error> {
        let miniature_repo = MiniatureRepository::new(self.db);

        let records: Vec<MiniatureRecord> = miniature_repo
            .list(None, None)
            .await?
            .into_iter()
            .map(MiniatureRecord::from)
            .collect();

        info!("Exported {} miniatures", records.len());

        Ok(records)
    }

    pub async fn export_miniatures_json(&self) -> Result<String, Error> {
        render_document(&self.export_miniatures().await?)
    }

    /// Imports miniature records
    ///
    /// Every record is validated before anything is written. In [`ImportMode::Replace`] all
    /// miniatures and force assignments are removed first and each record keeps its
    /// `created_at`. In [`ImportMode::Merge`] records matching an existing `(series, unique_id)`
    /// overwrite that miniature and the rest are inserted.
    ///
    /// # Returns
    /// - `Err(Error::ImportError(_))`: A record fails validation, reported with its index
    /// - `Err(Error::ConflictError(_))`: The document lists the same identity twice
    pub async fn import_miniatures(
        &self,
        records: Vec<MiniatureRecord>,
        mode: ImportMode,
    ) -> Result<MiniatureImportReport, Error> {
        let prepared = self.prepare_records(records)?;

        let txn = self.db.begin().await?;
        let miniature_repo = MiniatureRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let mut report = MiniatureImportReport::default();

        if mode == ImportMode::Replace {
            assignment_repo.delete_all().await?;
            report.removed = miniature_repo.delete_all().await?.rows_affected;
        }

        for (miniature, created_at) in prepared {
            if mode == ImportMode::Merge {
                if let Some(existing) = miniature_repo
                    .find_by_identity(&miniature.series, miniature.unique_id)
                    .await?
                {
                    miniature_repo
                        .update(existing, overwrite_with(miniature))
                        .await?;
                    report.updated += 1;
                    continue;
                }
            }

            miniature_repo.create(miniature, created_at).await?;
            report.inserted += 1;
        }

        txn.commit().await?;

        info!(
            "Imported miniatures ({:?}): {} inserted, {} updated, {} removed",
            mode, report.inserted, report.updated, report.removed
        );

        Ok(report)
    }

    pub async fn import_miniatures_json(
        &self,
        json: &str,
        mode: ImportMode,
    ) -> Result<MiniatureImportReport, Error> {
        let records: Vec<MiniatureRecord> = parse_document(json)?;

        self.import_miniatures(records, mode).await
    }

    fn prepare_records(
        &self,
        records: Vec<MiniatureRecord>,
    ) -> Result<Vec<(NewMiniature, Option<chrono::NaiveDateTime>)>, Error> {
        let mut seen = HashSet::new();
        let mut prepared = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let created_at = record.created_at;
            let miniature = NewMiniature {
                series: record.series,
                unique_id: record.unique_id,
                prefix: record.prefix,
                chassis: record.chassis,
                kind: record.kind,
                status: record.status,
                tray_id: record.tray_id,
                notes: record.notes,
            };

            let miniature = normalize_new_miniature(miniature, &self.default_series).map_err(
                |err| ImportError::InvalidRecord {
                    index,
                    reason: err.to_string(),
                },
            )?;

            if !seen.insert((miniature.series.clone(), miniature.unique_id)) {
                return Err(ConflictError::DuplicateImportRecord {
                    series: miniature.series,
                    unique_id: miniature.unique_id,
                }
                .into());
            }

            prepared.push((miniature, created_at));
        }

        Ok(prepared)
    }
}

fn overwrite_with(miniature: NewMiniature) -> MiniatureUpdate {
    MiniatureUpdate {
        series: Some(miniature.series),
        unique_id: Some(miniature.unique_id),
        prefix: Some(miniature.prefix),
        chassis: Some(miniature.chassis),
        kind: Some(miniature.kind),
        status: Some(miniature.status),
        tray_id: Some(miniature.tray_id),
        notes: Some(miniature.notes),
    }
}

#[cfg(test)]
mod tests {
    use mechbay_test_utils::prelude::*;

    use crate::{
        error::ErrorKind,
        model::{
            exchange::{ImportMode, MiniatureRecord},
            miniature::MiniatureQuery,
        },
        service::{exchange::miniature::MiniatureExchangeService, inventory::InventoryService},
    };

    fn record(series: &str, unique_id: i32, chassis: &str) -> MiniatureRecord {
        MiniatureRecord {
            id: None,
            series: series.to_string(),
            unique_id,
            prefix: "TST".to_string(),
            chassis: chassis.to_string(),
            kind: "Mech".to_string(),
            status: Some("Primed".to_string()),
            tray_id: None,
            notes: None,
            created_at: None,
        }
    }

    /// Expect replace mode to remove existing miniatures and their assignments
    #[tokio::test]
    async fn replace_clears_inventory_and_assignments() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let miniatures = test
            .inventory()
            .insert_mock_miniatures(&["Atlas", "Locust"])
            .await?;
        let (_, lance) = test
            .forces()
            .insert_force_with_lance("Strike", "Command")
            .await?;
        test.forces()
            .insert_assignment(lance.id, miniatures[0].id, 1)
            .await?;

        let exchange = MiniatureExchangeService::new(&test.state.db);
        let report = exchange
            .import_miniatures(vec![record("A", 9, "Warhammer")], ImportMode::Replace)
            .await
            .unwrap();

        assert_eq!(report.removed, 2);
        assert_eq!(report.inserted, 1);
        let listed = InventoryService::new(&test.state.db)
            .list_miniatures(&MiniatureQuery::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].chassis, "Warhammer");

        Ok(())
    }

    /// Expect merge mode to update by series and unique_id and insert the rest
    #[tokio::test]
    async fn merge_updates_matching_identity() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let existing = test.inventory().insert_mock_miniature("A", 1, "Atlas").await?;
        test.inventory().insert_mock_miniature("B", 1, "Locust").await?;

        let exchange = MiniatureExchangeService::new(&test.state.db);
        let report = exchange
            .import_miniatures(
                vec![record("A", 1, "Atlas AS7-K"), record("A", 2, "Wasp")],
                ImportMode::Merge,
            )
            .await
            .unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.inserted, 1);
        assert_eq!(report.removed, 0);

        let inventory = InventoryService::new(&test.state.db);
        let updated = inventory.get_miniature(existing.id).await.unwrap();
        assert_eq!(updated.chassis, "Atlas AS7-K");
        assert_eq!(updated.status.as_deref(), Some("Primed"));
        assert_eq!(updated.created_at, existing.created_at);
        let listed = inventory
            .list_miniatures(&MiniatureQuery::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 3);

        Ok(())
    }

    /// Expect an invalid record to abort the import before anything is written
    #[tokio::test]
    async fn rejects_invalid_record() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.inventory().insert_mock_miniature("A", 1, "Atlas").await?;

        let exchange = MiniatureExchangeService::new(&test.state.db);
        let result = exchange
            .import_miniatures(
                vec![record("A", 5, "Wasp"), record("A", -1, "Locust")],
                ImportMode::Replace,
            )
            .await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImportFormat);
        assert!(error.to_string().contains("record 1"));
        let listed = InventoryService::new(&test.state.db)
            .list_miniatures(&MiniatureQuery::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        Ok(())
    }

    /// Expect Conflict when the document repeats an identity
    #[tokio::test]
    async fn rejects_duplicate_identity_in_document() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;

        let exchange = MiniatureExchangeService::new(&test.state.db);
        let result = exchange
            .import_miniatures(
                vec![record("A", 1, "Atlas"), record("A", 1, "Locust")],
                ImportMode::Merge,
            )
            .await;

        assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Conflict));

        Ok(())
    }

    /// Expect records without a series to land in the default series
    #[tokio::test]
    async fn applies_default_series() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;

        let exchange = MiniatureExchangeService::new(&test.state.db).with_default_series("C");
        exchange
            .import_miniatures_json(
                r#"[{"unique_id": 4, "prefix": "WSP", "chassis": "Wasp", "type": "Mech"}]"#,
                ImportMode::Merge,
            )
            .await
            .unwrap();

        let exported = exchange.export_miniatures().await.unwrap();
        assert_eq!(exported[0].series, "C");

        Ok(())
    }
}
