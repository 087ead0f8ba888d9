//! Force and lance service layer.
//!
//! Forces own an ordered list of lances and each lance an ordered list of miniature
//! assignments. A miniature may be assigned at most once per force, across all of its lances,
//! and exactly one force is active after any create or switch. Every operation runs in a
//! single transaction.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use tracing::{debug, info};

use crate::{
    data::{
        force::{force_miniature::ForceMiniatureRepository, lance::LanceRepository, ForceRepository},
        miniature::MiniatureRepository,
    },
    error::{
        conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
    },
    model::{
        db::{ForceMiniatureModel, ForceModel, LanceModel},
        force::{AssignmentEntry, ForceAggregate, LanceAggregate},
    },
    service::next_in_sequence,
};

pub struct ForceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForceService<'a> {
    /// Creates a new instance of [`ForceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a force and makes it the only active one
    pub async fn create_force(&self, name: &str) -> Result<ForceModel, Error> {
        let name = required_name(name, "force name")?;

        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        force_repo.deactivate_all().await?;
        let force = force_repo.create(name, true).await?;

        txn.commit().await?;

        info!("Created force {:?} with ID {} as active", force.name, force.id);

        Ok(force)
    }

    /// Activates a force, deactivating every other force in the same transaction
    pub async fn switch_force(&self, id: i32) -> Result<ForceModel, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        let force = force_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Force(id))?;

        force_repo.deactivate_all().await?;
        let force = force_repo.activate(force).await?;

        txn.commit().await?;

        info!("Switched active force to {:?} (ID {})", force.name, force.id);

        Ok(force)
    }

    pub async fn rename_force(&self, id: i32, name: &str) -> Result<ForceModel, Error> {
        let name = required_name(name, "force name")?;

        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        let force = force_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Force(id))?;
        let force = force_repo.rename(force, name).await?;

        txn.commit().await?;

        info!("Renamed force ID {} to {:?}", force.id, force.name);

        Ok(force)
    }

    /// Loads the active force with its lances and assignments, `None` when no force is active
    pub async fn get_active_force(&self) -> Result<Option<ForceAggregate>, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        let aggregate = match force_repo.get_active().await? {
            Some(force) => Some(load_force_aggregate(&txn, force).await?),
            None => None,
        };

        txn.commit().await?;

        Ok(aggregate)
    }

    /// Lists forces, active first then newest first
    pub async fn list_forces(&self) -> Result<Vec<ForceModel>, Error> {
        let force_repo = ForceRepository::new(self.db);

        let forces = force_repo.get_all().await?;

        debug!("Listed {} forces", forces.len());

        Ok(forces)
    }

    /// Loads a force with its lances and assignments
    pub async fn get_force(&self, id: i32) -> Result<ForceAggregate, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        let force = force_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Force(id))?;
        let aggregate = load_force_aggregate(&txn, force).await?;

        txn.commit().await?;

        Ok(aggregate)
    }

    /// Deletes a force together with its lances and their assignments
    pub async fn delete_force(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let lance_repo = LanceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let force = force_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Force(id))?;

        let lance_ids: Vec<i32> = lance_repo
            .get_many_by_force_id(id)
            .await?
            .iter()
            .map(|lance| lance.id)
            .collect();

        let assignments = assignment_repo.delete_by_lance_ids(&lance_ids).await?;
        lance_repo.delete_by_force_id(id).await?;
        force_repo.delete(id).await?;

        txn.commit().await?;

        info!(
            "Deleted force {:?} (ID {}) with {} lances and {} assignments",
            force.name,
            id,
            lance_ids.len(),
            assignments
        );

        Ok(())
    }

    /// Appends a lance to the force, numbered after its last lance
    pub async fn create_lance(
        &self,
        force_id: i32,
        name: Option<&str>,
    ) -> Result<LanceModel, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);

        if force_repo.get_by_id(force_id).await?.is_none() {
            return Err(NotFoundError::Force(force_id).into());
        }

        let lance = create_lance_in_force(&txn, force_id, optional_name(name)).await?;
        force_repo.touch(force_id).await?;

        txn.commit().await?;

        info!(
            "Created lance ID {} at position {} in force ID {}",
            lance.id, lance.position, force_id
        );

        Ok(lance)
    }

    /// Renames a lance, a blank or missing name leaves it unnamed
    pub async fn rename_lance(&self, id: i32, name: Option<&str>) -> Result<LanceModel, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let lance_repo = LanceRepository::new(&txn);

        let lance = lance_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Lance(id))?;
        let lance = lance_repo.rename(lance, optional_name(name)).await?;
        force_repo.touch(lance.force_id).await?;

        txn.commit().await?;

        info!("Renamed lance ID {} to {:?}", lance.id, lance.name);

        Ok(lance)
    }

    /// Deletes a lance and its assignments
    pub async fn delete_lance(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let lance_repo = LanceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let lance = lance_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Lance(id))?;

        assignment_repo.delete_by_lance_ids(&[id]).await?;
        lance_repo.delete(id).await?;
        force_repo.touch(lance.force_id).await?;

        txn.commit().await?;

        info!("Deleted lance ID {} from force ID {}", id, lance.force_id);

        Ok(())
    }

    /// Assigns a miniature to a lance
    ///
    /// # Arguments
    /// - `position`: Position within the lance, appended after the last assignment when `None`
    ///
    /// # Returns
    /// - `Ok(ForceMiniatureModel)`: The new assignment
    /// - `Err(Error::NotFoundError(_))`: The lance or miniature does not exist
    /// - `Err(Error::ConflictError(_))`: The miniature is already in a lance of the same force,
    ///   the message names that lance
    pub async fn add_miniature_to_lance(
        &self,
        miniature_id: i32,
        lance_id: i32,
        position: Option<i32>,
    ) -> Result<ForceMiniatureModel, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let lance_repo = LanceRepository::new(&txn);
        let miniature_repo = MiniatureRepository::new(&txn);

        let lance = lance_repo
            .get_by_id(lance_id)
            .await?
            .ok_or(NotFoundError::Lance(lance_id))?;

        if miniature_repo.get_by_id(miniature_id).await?.is_none() {
            return Err(NotFoundError::Miniature(miniature_id).into());
        }

        let assignment = assign_miniature(&txn, &lance, miniature_id, position).await?;
        force_repo.touch(lance.force_id).await?;

        txn.commit().await?;

        info!(
            "Added miniature ID {} to lance ID {} at position {}",
            miniature_id, lance_id, assignment.position
        );

        Ok(assignment)
    }

    /// Removes a miniature from whichever lance of the force holds it
    ///
    /// Returns whether an assignment existed.
    pub async fn remove_miniature_from_force(
        &self,
        miniature_id: i32,
        force_id: i32,
    ) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let mut removed = false;
        while let Some((assignment, _)) = assignment_repo
            .find_in_force(force_id, miniature_id)
            .await?
        {
            assignment_repo.delete(assignment.id).await?;
            removed = true;
        }

        if removed {
            force_repo.touch(force_id).await?;
        }

        txn.commit().await?;

        if removed {
            info!(
                "Removed miniature ID {} from force ID {}",
                miniature_id, force_id
            );
        }

        Ok(removed)
    }

    /// Moves a miniature's existing assignment to another lance of the same force
    ///
    /// The assignment row keeps its identity, only its lance and position change.
    pub async fn move_miniature(
        &self,
        miniature_id: i32,
        target_lance_id: i32,
        position: i32,
    ) -> Result<ForceMiniatureModel, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let lance_repo = LanceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);

        let lance = lance_repo
            .get_by_id(target_lance_id)
            .await?
            .ok_or(NotFoundError::Lance(target_lance_id))?;

        let (assignment, _) = assignment_repo
            .find_in_force(lance.force_id, miniature_id)
            .await?
            .ok_or(NotFoundError::MiniatureNotInForce {
                miniature_id,
                force_id: lance.force_id,
            })?;

        let assignment = assignment_repo
            .move_to(assignment, lance.id, position)
            .await?;
        force_repo.touch(lance.force_id).await?;

        txn.commit().await?;

        info!(
            "Moved miniature ID {} to lance ID {} at position {}",
            miniature_id, lance.id, position
        );

        Ok(assignment)
    }

    /// Internal ids of every miniature assigned anywhere in the force
    pub async fn miniatures_in_force(&self, force_id: i32) -> Result<HashSet<i32>, Error> {
        let assignment_repo = ForceMiniatureRepository::new(self.db);

        let ids = assignment_repo
            .get_miniature_ids_by_force_id(force_id)
            .await?;

        Ok(ids.into_iter().collect())
    }
}

/// Loads the lances of a force and their assignments into a [`ForceAggregate`]
pub(crate) async fn load_force_aggregate<C: ConnectionTrait>(
    db: &C,
    force: ForceModel,
) -> Result<ForceAggregate, Error> {
    let lance_repo = LanceRepository::new(db);
    let assignment_repo = ForceMiniatureRepository::new(db);

    let lances = lance_repo.get_many_by_force_id(force.id).await?;
    let lance_ids: Vec<i32> = lances.iter().map(|lance| lance.id).collect();

    let mut entries_by_lance: HashMap<i32, Vec<AssignmentEntry>> = HashMap::new();
    for (assignment, miniature) in assignment_repo.get_entries_by_lance_ids(&lance_ids).await? {
        let miniature = miniature.ok_or_else(|| {
            // Only reachable if the foreign key from assignment to miniature is not enforced
            Error::DbErr(DbErr::RecordNotFound(format!(
                "Miniature ID {} not found for assignment ID {}",
                assignment.miniature_id, assignment.id
            )))
        })?;

        entries_by_lance
            .entry(assignment.lance_id)
            .or_default()
            .push(AssignmentEntry {
                assignment,
                miniature,
            });
    }

    let lances = lances
        .into_iter()
        .map(|lance| LanceAggregate {
            assignments: entries_by_lance.remove(&lance.id).unwrap_or_default(),
            lance,
        })
        .collect();

    Ok(ForceAggregate { force, lances })
}

/// Inserts a lance positioned after the force's last lance
pub(crate) async fn create_lance_in_force<C: ConnectionTrait>(
    db: &C,
    force_id: i32,
    name: Option<String>,
) -> Result<LanceModel, Error> {
    let lance_repo = LanceRepository::new(db);

    let position = next_in_sequence(lance_repo.max_position(force_id).await?, "lance position")?;

    Ok(lance_repo.create(force_id, name, position).await?)
}

/// Assigns a miniature to a lance unless it is already placed elsewhere in the lance's force
///
/// Without a position the assignment is appended after the lance's last one.
pub(crate) async fn assign_miniature<C: ConnectionTrait>(
    db: &C,
    lance: &LanceModel,
    miniature_id: i32,
    position: Option<i32>,
) -> Result<ForceMiniatureModel, Error> {
    let assignment_repo = ForceMiniatureRepository::new(db);

    if let Some((existing, existing_lance)) = assignment_repo
        .find_in_force(lance.force_id, miniature_id)
        .await?
    {
        return Err(ConflictError::AlreadyInForce {
            miniature_id,
            force_id: lance.force_id,
            lance_id: existing.lance_id,
            lance_name: existing_lance
                .name
                .unwrap_or_else(|| "Unnamed".to_string()),
        }
        .into());
    }

    let position = match position {
        Some(position) => position,
        None => next_in_sequence(
            assignment_repo.max_position(lance.id).await?,
            "assignment position",
        )?,
    };

    let assignment = assignment_repo
        .create(lance.id, miniature_id, position)
        .await?;

    Ok(assignment)
}

fn required_name(name: &str, field: &'static str) -> Result<String, Error> {
    match name.trim() {
        "" => Err(ValidationError::MissingField(field).into()),
        name => Ok(name.to_string()),
    }
}

fn optional_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
