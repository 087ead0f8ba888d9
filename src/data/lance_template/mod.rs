pub mod pattern;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::db::LanceTemplateModel;

pub struct LanceTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LanceTemplateRepository<'a, C> {
    /// Creates a new instance of [`LanceTemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<LanceTemplateModel, DbErr> {
        let template = entity::lance_template::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            ..Default::default()
        };

        template.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<LanceTemplateModel>, DbErr> {
        entity::prelude::LanceTemplate::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds the first template carrying the exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<LanceTemplateModel>, DbErr> {
        entity::prelude::LanceTemplate::find()
            .filter(entity::lance_template::Column::Name.eq(name))
            .order_by_asc(entity::lance_template::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists templates ordered by name
    pub async fn get_all(&self) -> Result<Vec<LanceTemplateModel>, DbErr> {
        entity::prelude::LanceTemplate::find()
            .order_by_asc(entity::lance_template::Column::Name)
            .order_by_asc(entity::lance_template::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        template: LanceTemplateModel,
        name: String,
        description: Option<String>,
    ) -> Result<LanceTemplateModel, DbErr> {
        let mut template_am = template.into_active_model();
        template_am.name = ActiveValue::Set(name);
        template_am.description = ActiveValue::Set(description);

        template_am.update(self.db).await
    }

    /// Deletes a template
    ///
    /// Returns OK regardless of the template existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LanceTemplate::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
