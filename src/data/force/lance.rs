use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::db::LanceModel;

pub struct LanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LanceRepository<'a, C> {
    /// Creates a new instance of [`LanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        force_id: i32,
        name: Option<String>,
        position: i32,
    ) -> Result<LanceModel, DbErr> {
        let lance = entity::lance::ActiveModel {
            force_id: ActiveValue::Set(force_id),
            name: ActiveValue::Set(name),
            position: ActiveValue::Set(position),
            ..Default::default()
        };

        lance.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<LanceModel>, DbErr> {
        entity::prelude::Lance::find_by_id(id).one(self.db).await
    }

    /// Gets the lances of a force ordered by position
    pub async fn get_many_by_force_id(&self, force_id: i32) -> Result<Vec<LanceModel>, DbErr> {
        entity::prelude::Lance::find()
            .filter(entity::lance::Column::ForceId.eq(force_id))
            .order_by_asc(entity::lance::Column::Position)
            .order_by_asc(entity::lance::Column::Id)
            .all(self.db)
            .await
    }

    /// Highest lance position in the force, `None` when it has no lances
    pub async fn max_position(&self, force_id: i32) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::Lance::find()
            .filter(entity::lance::Column::ForceId.eq(force_id))
            .order_by_desc(entity::lance::Column::Position)
            .one(self.db)
            .await?;

        Ok(last.map(|lance| lance.position))
    }

    pub async fn rename(
        &self,
        lance: LanceModel,
        name: Option<String>,
    ) -> Result<LanceModel, DbErr> {
        let mut lance_am = lance.into_active_model();
        lance_am.name = ActiveValue::Set(name);

        lance_am.update(self.db).await
    }

    /// Deletes a lance
    ///
    /// Returns OK regardless of the lance existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Lance::delete_by_id(id).exec(self.db).await
    }

    pub async fn delete_by_force_id(&self, force_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Lance::delete_many()
            .filter(entity::lance::Column::ForceId.eq(force_id))
            .exec(self.db)
            .await
    }
}
