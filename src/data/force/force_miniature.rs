use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::db::{ForceMiniatureModel, LanceModel, MiniatureModel};

/// Repository for the assignments of miniatures to lances
pub struct ForceMiniatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ForceMiniatureRepository<'a, C> {
    /// Creates a new instance of [`ForceMiniatureRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        lance_id: i32,
        miniature_id: i32,
        position: i32,
    ) -> Result<ForceMiniatureModel, DbErr> {
        let assignment = entity::force_miniature::ActiveModel {
            lance_id: ActiveValue::Set(lance_id),
            miniature_id: ActiveValue::Set(miniature_id),
            position: ActiveValue::Set(position),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    /// Finds the assignment of a miniature within any lance of the force
    ///
    /// Returns the assignment together with the lance holding it.
    pub async fn find_in_force(
        &self,
        force_id: i32,
        miniature_id: i32,
    ) -> Result<Option<(ForceMiniatureModel, LanceModel)>, DbErr> {
        let found = entity::prelude::ForceMiniature::find()
            .find_also_related(entity::prelude::Lance)
            .filter(entity::lance::Column::ForceId.eq(force_id))
            .filter(entity::force_miniature::Column::MiniatureId.eq(miniature_id))
            .order_by_asc(entity::force_miniature::Column::Id)
            .one(self.db)
            .await?;

        Ok(found.and_then(|(assignment, lance)| lance.map(|lance| (assignment, lance))))
    }

    /// Highest assignment position in the lance, `None` when the lance is empty
    pub async fn max_position(&self, lance_id: i32) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::ForceMiniature::find()
            .filter(entity::force_miniature::Column::LanceId.eq(lance_id))
            .order_by_desc(entity::force_miniature::Column::Position)
            .one(self.db)
            .await?;

        Ok(last.map(|assignment| assignment.position))
    }

    /// Gets the assignments of the given lances with their miniatures
    ///
    /// Ordered by lance then position. An assignment whose miniature is gone yields `None`.
    pub async fn get_entries_by_lance_ids(
        &self,
        lance_ids: &[i32],
    ) -> Result<Vec<(ForceMiniatureModel, Option<MiniatureModel>)>, DbErr> {
        if lance_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ForceMiniature::find()
            .find_also_related(entity::prelude::Miniature)
            .filter(entity::force_miniature::Column::LanceId.is_in(lance_ids.iter().copied()))
            .order_by_asc(entity::force_miniature::Column::LanceId)
            .order_by_asc(entity::force_miniature::Column::Position)
            .order_by_asc(entity::force_miniature::Column::Id)
            .all(self.db)
            .await
    }

    /// Internal ids of every miniature assigned anywhere in the force
    pub async fn get_miniature_ids_by_force_id(&self, force_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ForceMiniature::find()
            .select_only()
            .column(entity::force_miniature::Column::MiniatureId)
            .inner_join(entity::prelude::Lance)
            .filter(entity::lance::Column::ForceId.eq(force_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets every assignment of a miniature with the lance holding it
    pub async fn get_many_by_miniature_id(
        &self,
        miniature_id: i32,
    ) -> Result<Vec<(ForceMiniatureModel, Option<LanceModel>)>, DbErr> {
        entity::prelude::ForceMiniature::find()
            .find_also_related(entity::prelude::Lance)
            .filter(entity::force_miniature::Column::MiniatureId.eq(miniature_id))
            .order_by_asc(entity::force_miniature::Column::Id)
            .all(self.db)
            .await
    }

    /// Points an assignment at another lance and position
    pub async fn move_to(
        &self,
        assignment: ForceMiniatureModel,
        lance_id: i32,
        position: i32,
    ) -> Result<ForceMiniatureModel, DbErr> {
        let mut assignment_am = assignment.into_active_model();
        assignment_am.lance_id = ActiveValue::Set(lance_id);
        assignment_am.position = ActiveValue::Set(position);

        assignment_am.update(self.db).await
    }

    /// Deletes an assignment
    ///
    /// Returns OK regardless of the assignment existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ForceMiniature::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_miniature_id(&self, miniature_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ForceMiniature::delete_many()
            .filter(entity::force_miniature::Column::MiniatureId.eq(miniature_id))
            .exec(self.db)
            .await
    }

    /// Deletes every assignment of the given lances, returning the number of rows removed
    pub async fn delete_by_lance_ids(&self, lance_ids: &[i32]) -> Result<u64, DbErr> {
        if lance_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::ForceMiniature::delete_many()
            .filter(entity::force_miniature::Column::LanceId.is_in(lance_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::ForceMiniature::delete_many()
            .exec(self.db)
            .await
    }
}
