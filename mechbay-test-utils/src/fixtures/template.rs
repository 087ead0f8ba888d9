use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{LanceTemplateModel, LanceTemplatePatternModel},
    TestSetup,
};

impl TestSetup {
    pub fn templates<'a>(&'a mut self) -> TemplateFixtures<'a> {
        TemplateFixtures { setup: self }
    }
}

pub struct TemplateFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> TemplateFixtures<'a> {
    /// Insert a template with its chassis patterns numbered in the given order.
    pub async fn insert_template(
        &mut self,
        name: &str,
        patterns: &[&str],
    ) -> Result<(LanceTemplateModel, Vec<LanceTemplatePatternModel>), TestError> {
        let template = entity::lance_template::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&self.setup.state.db)
        .await?;

        let mut pattern_models = Vec::with_capacity(patterns.len());
        for (position, pattern) in (0..).zip(patterns.iter()) {
            let model = entity::lance_template_pattern::ActiveModel {
                template_id: ActiveValue::Set(template.id),
                chassis_pattern: ActiveValue::Set(pattern.to_string()),
                position: ActiveValue::Set(position),
                ..Default::default()
            }
            .insert(&self.setup.state.db)
            .await?;
            pattern_models.push(model);
        }

        Ok((template, pattern_models))
    }
}
