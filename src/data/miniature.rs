use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, Order, QueryFilter, QueryOrder,
};

use crate::model::{
    db::MiniatureModel,
    miniature::{MiniatureSortKey, MiniatureUpdate, NewMiniature, SortDirection},
};

pub struct MiniatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MiniatureRepository<'a, C> {
    /// Creates a new instance of [`MiniatureRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a miniature
    ///
    /// `created_at` defaults to now, imports pass the timestamp of the exported record.
    pub async fn create(
        &self,
        miniature: NewMiniature,
        created_at: Option<NaiveDateTime>,
    ) -> Result<MiniatureModel, DbErr> {
        let miniature = entity::miniature::ActiveModel {
            series: ActiveValue::Set(miniature.series),
            unique_id: ActiveValue::Set(miniature.unique_id),
            prefix: ActiveValue::Set(miniature.prefix),
            chassis: ActiveValue::Set(miniature.chassis),
            kind: ActiveValue::Set(miniature.kind),
            status: ActiveValue::Set(miniature.status),
            tray_id: ActiveValue::Set(miniature.tray_id),
            notes: ActiveValue::Set(miniature.notes),
            created_at: ActiveValue::Set(created_at.unwrap_or_else(|| Utc::now().naive_utc())),
            ..Default::default()
        };

        miniature.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MiniatureModel>, DbErr> {
        entity::prelude::Miniature::find_by_id(id).one(self.db).await
    }

    /// Finds a miniature by its `(series, unique_id)` identity
    pub async fn find_by_identity(
        &self,
        series: &str,
        unique_id: i32,
    ) -> Result<Option<MiniatureModel>, DbErr> {
        entity::prelude::Miniature::find()
            .filter(entity::miniature::Column::Series.eq(series))
            .filter(entity::miniature::Column::UniqueId.eq(unique_id))
            .one(self.db)
            .await
    }

    /// Lists miniatures, optionally restricted to one series
    ///
    /// Sorted by the requested column with the internal id as tie-break, or by id alone.
    pub async fn list(
        &self,
        series: Option<&str>,
        sort: Option<(MiniatureSortKey, SortDirection)>,
    ) -> Result<Vec<MiniatureModel>, DbErr> {
        let mut query = entity::prelude::Miniature::find();

        if let Some(series) = series {
            query = query.filter(entity::miniature::Column::Series.eq(series));
        }

        if let Some((key, direction)) = sort {
            let column = match key {
                MiniatureSortKey::UniqueId => entity::miniature::Column::UniqueId,
                MiniatureSortKey::Prefix => entity::miniature::Column::Prefix,
                MiniatureSortKey::Chassis => entity::miniature::Column::Chassis,
                MiniatureSortKey::Type => entity::miniature::Column::Kind,
                MiniatureSortKey::Status => entity::miniature::Column::Status,
                MiniatureSortKey::TrayId => entity::miniature::Column::TrayId,
            };
            let order = match direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query = query.order_by(column, order);
        }

        query
            .order_by_asc(entity::miniature::Column::Id)
            .all(self.db)
            .await
    }

    /// Highest unique_id used in the series, `None` for an empty series
    pub async fn max_unique_id(&self, series: &str) -> Result<Option<i32>, DbErr> {
        let highest = entity::prelude::Miniature::find()
            .filter(entity::miniature::Column::Series.eq(series))
            .order_by_desc(entity::miniature::Column::UniqueId)
            .one(self.db)
            .await?;

        Ok(highest.map(|miniature| miniature.unique_id))
    }

    /// Writes the fields present in `changes` onto the miniature
    pub async fn update(
        &self,
        miniature: MiniatureModel,
        changes: MiniatureUpdate,
    ) -> Result<MiniatureModel, DbErr> {
        let mut miniature_am = miniature.into_active_model();

        if let Some(series) = changes.series {
            miniature_am.series = ActiveValue::Set(series);
        }
        if let Some(unique_id) = changes.unique_id {
            miniature_am.unique_id = ActiveValue::Set(unique_id);
        }
        if let Some(prefix) = changes.prefix {
            miniature_am.prefix = ActiveValue::Set(prefix);
        }
        if let Some(chassis) = changes.chassis {
            miniature_am.chassis = ActiveValue::Set(chassis);
        }
        if let Some(kind) = changes.kind {
            miniature_am.kind = ActiveValue::Set(kind);
        }
        if let Some(status) = changes.status {
            miniature_am.status = ActiveValue::Set(status);
        }
        if let Some(tray_id) = changes.tray_id {
            miniature_am.tray_id = ActiveValue::Set(tray_id);
        }
        if let Some(notes) = changes.notes {
            miniature_am.notes = ActiveValue::Set(notes);
        }

        miniature_am.update(self.db).await
    }

    /// Deletes a miniature
    ///
    /// Returns OK regardless of the miniature existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Miniature::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Miniature::delete_many().exec(self.db).await
    }
}
