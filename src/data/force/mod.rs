pub mod force_miniature;
pub mod lance;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::db::ForceModel;

pub struct ForceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ForceRepository<'a, C> {
    /// Creates a new instance of [`ForceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, is_active: bool) -> Result<ForceModel, DbErr> {
        let now = Utc::now().naive_utc();
        let force = entity::force::ActiveModel {
            name: ActiveValue::Set(name),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        force.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ForceModel>, DbErr> {
        entity::prelude::Force::find_by_id(id).one(self.db).await
    }

    /// Gets the active force
    ///
    /// Should more than one row carry the flag, the most recently updated one wins.
    pub async fn get_active(&self) -> Result<Option<ForceModel>, DbErr> {
        entity::prelude::Force::find()
            .filter(entity::force::Column::IsActive.eq(true))
            .order_by_desc(entity::force::Column::UpdatedAt)
            .order_by_desc(entity::force::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists forces, active first then newest first
    pub async fn get_all(&self) -> Result<Vec<ForceModel>, DbErr> {
        entity::prelude::Force::find()
            .order_by_desc(entity::force::Column::IsActive)
            .order_by_desc(entity::force::Column::CreatedAt)
            .order_by_desc(entity::force::Column::Id)
            .all(self.db)
            .await
    }

    /// Clears the active flag on every force, returning the number of rows changed
    pub async fn deactivate_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Force::update_many()
            .col_expr(entity::force::Column::IsActive, Expr::value(false))
            .filter(entity::force::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the active flag on a single force
    ///
    /// Callers are expected to run [`Self::deactivate_all`] first within the same transaction.
    pub async fn activate(&self, force: ForceModel) -> Result<ForceModel, DbErr> {
        let mut force_am = force.into_active_model();
        force_am.is_active = ActiveValue::Set(true);
        force_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        force_am.update(self.db).await
    }

    pub async fn rename(&self, force: ForceModel, name: String) -> Result<ForceModel, DbErr> {
        let mut force_am = force.into_active_model();
        force_am.name = ActiveValue::Set(name);
        force_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        force_am.update(self.db).await
    }

    /// Bumps `updated_at` after the force's lances or assignments change
    pub async fn touch(&self, force_id: i32) -> Result<(), DbErr> {
        entity::prelude::Force::update_many()
            .col_expr(
                entity::force::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::force::Column::Id.eq(force_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a force
    ///
    /// Returns OK regardless of the force existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Force::delete_by_id(id).exec(self.db).await
    }
}
