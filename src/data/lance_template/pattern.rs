use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::db::LanceTemplatePatternModel;

/// Repository for the ordered chassis patterns of a lance template
pub struct LanceTemplatePatternRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LanceTemplatePatternRepository<'a, C> {
    /// Creates a new instance of [`LanceTemplatePatternRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the patterns for a template, numbering positions from 0 in the given order
    pub async fn create_many(
        &self,
        template_id: i32,
        patterns: &[String],
    ) -> Result<Vec<LanceTemplatePatternModel>, DbErr> {
        let mut models = Vec::with_capacity(patterns.len());

        for (position, pattern) in (0..).zip(patterns.iter()) {
            let pattern = entity::lance_template_pattern::ActiveModel {
                template_id: ActiveValue::Set(template_id),
                chassis_pattern: ActiveValue::Set(pattern.clone()),
                position: ActiveValue::Set(position),
                ..Default::default()
            };
            models.push(pattern.insert(self.db).await?);
        }

        Ok(models)
    }

    /// Gets the patterns of a template in template order
    pub async fn get_many_by_template_id(
        &self,
        template_id: i32,
    ) -> Result<Vec<LanceTemplatePatternModel>, DbErr> {
        entity::prelude::LanceTemplatePattern::find()
            .filter(entity::lance_template_pattern::Column::TemplateId.eq(template_id))
            .order_by_asc(entity::lance_template_pattern::Column::Position)
            .order_by_asc(entity::lance_template_pattern::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the patterns of several templates, ordered by template then position
    pub async fn get_many_by_template_ids(
        &self,
        template_ids: &[i32],
    ) -> Result<Vec<LanceTemplatePatternModel>, DbErr> {
        if template_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LanceTemplatePattern::find()
            .filter(
                entity::lance_template_pattern::Column::TemplateId
                    .is_in(template_ids.iter().copied()),
            )
            .order_by_asc(entity::lance_template_pattern::Column::TemplateId)
            .order_by_asc(entity::lance_template_pattern::Column::Position)
            .order_by_asc(entity::lance_template_pattern::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_template_id(&self, template_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LanceTemplatePattern::delete_many()
            .filter(entity::lance_template_pattern::Column::TemplateId.eq(template_id))
            .exec(self.db)
            .await
    }
}
