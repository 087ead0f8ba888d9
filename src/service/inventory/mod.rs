//! Inventory service layer.
//!
//! Owns the miniature operations: listing with search and sort, create and update with
//! `(series, unique_id)` uniqueness checks, deletion that pulls the miniature out of every
//! force, and helpers for numbering new records within a series.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, warn};

use crate::{
    data::{
        force::{force_miniature::ForceMiniatureRepository, ForceRepository},
        miniature::MiniatureRepository,
    },
    error::{
        conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
    },
    model::{
        db::MiniatureModel,
        miniature::{
            MiniatureDeletion, MiniatureQuery, MiniatureUpdate, NewMiniature, RemovedAssignment,
            DEFAULT_SERIES,
        },
    },
    service::next_in_sequence,
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
    default_series: String,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`] using the default series `A`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            default_series: DEFAULT_SERIES.to_string(),
        }
    }

    /// Replaces the series applied to miniatures created without one
    pub fn with_default_series(mut self, series: impl Into<String>) -> Self {
        self.default_series = series.into();
        self
    }

    /// Lists miniatures matching the query
    ///
    /// Series filter and sort run in the database, the free-text search is applied to the
    /// sorted rows so it can match the integer unique_id as text.
    pub async fn list_miniatures(
        &self,
        query: &MiniatureQuery,
    ) -> Result<Vec<MiniatureModel>, Error> {
        let miniature_repo = MiniatureRepository::new(self.db);

        let miniatures = miniature_repo
            .list(query.series.as_deref(), query.sort)
            .await?
            .into_iter()
            .filter(|miniature| query.matches_search(miniature))
            .collect::<Vec<_>>();

        debug!("Listed {} miniatures", miniatures.len());

        Ok(miniatures)
    }

    pub async fn get_miniature(&self, id: i32) -> Result<MiniatureModel, Error> {
        let miniature_repo = MiniatureRepository::new(self.db);

        let miniature = miniature_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Miniature(id))?;

        Ok(miniature)
    }

    /// Creates a miniature
    ///
    /// # Returns
    /// - `Ok(MiniatureModel)`: The stored miniature
    /// - `Err(Error::ValidationError(_))`: Blank chassis or non-positive unique_id
    /// - `Err(Error::ConflictError(_))`: The `(series, unique_id)` pair is already taken
    pub async fn create_miniature(&self, miniature: NewMiniature) -> Result<MiniatureModel, Error> {
        let miniature = normalize_new_miniature(miniature, &self.default_series)?;

        let txn = self.db.begin().await?;
        let miniature_repo = MiniatureRepository::new(&txn);

        if miniature_repo
            .find_by_identity(&miniature.series, miniature.unique_id)
            .await?
            .is_some()
        {
            return Err(ConflictError::DuplicateMiniature {
                series: miniature.series,
                unique_id: miniature.unique_id,
            }
            .into());
        }

        let created = miniature_repo.create(miniature, None).await?;

        txn.commit().await?;

        info!(
            "Created miniature {}-{} ({}) with ID {}",
            created.series, created.unique_id, created.chassis, created.id
        );

        Ok(created)
    }

    /// Applies the listed field changes to a miniature
    ///
    /// Changing the series or unique_id is checked against the identity of every other
    /// miniature.
    pub async fn update_miniature(
        &self,
        id: i32,
        changes: MiniatureUpdate,
    ) -> Result<MiniatureModel, Error> {
        let changes = normalize_update(changes, &self.default_series)?;

        let txn = self.db.begin().await?;
        let miniature_repo = MiniatureRepository::new(&txn);

        let miniature = miniature_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Miniature(id))?;

        if changes.is_empty() {
            return Ok(miniature);
        }

        let series = changes
            .series
            .clone()
            .unwrap_or_else(|| miniature.series.clone());
        let unique_id = changes.unique_id.unwrap_or(miniature.unique_id);

        if series != miniature.series || unique_id != miniature.unique_id {
            if let Some(existing) = miniature_repo.find_by_identity(&series, unique_id).await? {
                if existing.id != id {
                    return Err(ConflictError::DuplicateMiniature { series, unique_id }.into());
                }
            }
        }

        let updated = miniature_repo.update(miniature, changes).await?;

        txn.commit().await?;

        info!("Updated miniature ID {}", updated.id);

        Ok(updated)
    }

    /// Deletes a miniature and every force assignment referencing it
    ///
    /// Deletion is never blocked by assignments, the removed placements are reported back so
    /// the caller can warn about the affected forces and lances.
    pub async fn delete_miniature(&self, id: i32) -> Result<MiniatureDeletion, Error> {
        let txn = self.db.begin().await?;
        let miniature_repo = MiniatureRepository::new(&txn);
        let force_repo = ForceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let miniature = miniature_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Miniature(id))?;

        let mut removed_from = Vec::new();
        for (_, lance) in assignment_repo.get_many_by_miniature_id(id).await? {
            let Some(lance) = lance else {
                continue;
            };

            let force_name = force_repo
                .get_by_id(lance.force_id)
                .await?
                .map(|force| force.name)
                .unwrap_or_default();

            removed_from.push(RemovedAssignment {
                force_id: lance.force_id,
                force_name,
                lance_id: lance.id,
                lance_name: lance.name,
            });
        }

        assignment_repo.delete_by_miniature_id(id).await?;
        miniature_repo.delete(id).await?;

        txn.commit().await?;

        let deletion = MiniatureDeletion {
            miniature,
            removed_from,
        };

        if deletion.removed_from.is_empty() {
            info!("Deleted miniature ID {}", id);
        } else {
            warn!(
                "Deleted miniature ID {} and removed it from forces: {}",
                id,
                deletion.affected_forces().join(", ")
            );
        }

        Ok(deletion)
    }

    /// Next free unique_id in the series, `1` for an empty series
    pub async fn next_unique_id(&self, series: &str) -> Result<i32, Error> {
        let miniature_repo = MiniatureRepository::new(self.db);

        let series = match series.trim() {
            "" => self.default_series.as_str(),
            series => series,
        };

        let highest = miniature_repo.max_unique_id(series).await?;

        Ok(next_in_sequence(highest, "unique ID")?)
    }

    /// Builds a prefilled copy of a miniature numbered with the next unique_id of its series
    ///
    /// Nothing is stored, pass the result to [`Self::create_miniature`] once confirmed.
    pub async fn prepare_duplicate(&self, id: i32) -> Result<NewMiniature, Error> {
        let miniature = self.get_miniature(id).await?;
        let unique_id = self.next_unique_id(&miniature.series).await?;

        Ok(NewMiniature {
            series: miniature.series,
            unique_id,
            prefix: miniature.prefix,
            chassis: miniature.chassis,
            kind: miniature.kind,
            status: miniature.status,
            tray_id: miniature.tray_id,
            notes: miniature.notes,
        })
    }

    /// Inserts a couple of example miniatures unless their identities are already taken
    ///
    /// Returns the number of miniatures created.
    pub async fn seed(&self) -> Result<usize, Error> {
        let examples = [
            (1, "WHM", "Warhammer", "Primed", "A1"),
            (2, "BNC", "Banshee", "Detail", "A2"),
        ];

        let txn = self.db.begin().await?;
        let miniature_repo = MiniatureRepository::new(&txn);

        let mut created = 0;
        for (unique_id, prefix, chassis, status, tray_id) in examples {
            if miniature_repo
                .find_by_identity(&self.default_series, unique_id)
                .await?
                .is_some()
            {
                continue;
            }

            let miniature = NewMiniature {
                series: self.default_series.clone(),
                unique_id,
                prefix: prefix.to_string(),
                chassis: chassis.to_string(),
                kind: "Mech".to_string(),
                status: Some(status.to_string()),
                tray_id: Some(tray_id.to_string()),
                notes: None,
            };
            miniature_repo.create(miniature, None).await?;
            created += 1;
        }

        txn.commit().await?;

        info!("Seeded {} miniatures", created);

        Ok(created)
    }
}

/// Trims a miniature's fields, applies the default series and checks required values
pub(crate) fn normalize_new_miniature(
    mut miniature: NewMiniature,
    default_series: &str,
) -> Result<NewMiniature, Error> {
    miniature.series = normalize_series(&miniature.series, default_series);

    if miniature.unique_id <= 0 {
        return Err(ValidationError::NonPositiveUniqueId(miniature.unique_id).into());
    }

    miniature.chassis = miniature.chassis.trim().to_string();
    if miniature.chassis.is_empty() {
        return Err(ValidationError::MissingField("chassis").into());
    }

    miniature.prefix = miniature.prefix.trim().to_string();
    miniature.kind = miniature.kind.trim().to_string();
    miniature.status = non_blank(miniature.status);
    miniature.tray_id = non_blank(miniature.tray_id);
    miniature.notes = non_blank(miniature.notes);

    Ok(miniature)
}

fn normalize_update(
    mut changes: MiniatureUpdate,
    default_series: &str,
) -> Result<MiniatureUpdate, Error> {
    changes.series = changes
        .series
        .map(|series| normalize_series(&series, default_series));

    if let Some(unique_id) = changes.unique_id {
        if unique_id <= 0 {
            return Err(ValidationError::NonPositiveUniqueId(unique_id).into());
        }
    }

    if let Some(chassis) = changes.chassis.take() {
        let chassis = chassis.trim().to_string();
        if chassis.is_empty() {
            return Err(ValidationError::MissingField("chassis").into());
        }
        changes.chassis = Some(chassis);
    }

    changes.prefix = changes.prefix.map(|prefix| prefix.trim().to_string());
    changes.kind = changes.kind.map(|kind| kind.trim().to_string());
    changes.status = changes.status.map(non_blank);
    changes.tray_id = changes.tray_id.map(non_blank);
    changes.notes = changes.notes.map(non_blank);

    Ok(changes)
}

fn normalize_series(series: &str, default_series: &str) -> String {
    match series.trim() {
        "" => default_series.to_string(),
        series => series.to_string(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
