use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{ForceMiniatureModel, ForceModel, LanceModel},
    TestSetup,
};

impl TestSetup {
    pub fn forces<'a>(&'a mut self) -> ForceFixtures<'a> {
        ForceFixtures { setup: self }
    }
}

pub struct ForceFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> ForceFixtures<'a> {
    /// Insert a force without touching the active flag of any other force.
    pub async fn insert_force(
        &mut self,
        name: &str,
        is_active: bool,
    ) -> Result<ForceModel, TestError> {
        let now = Utc::now().naive_utc();
        let force = entity::force::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(force.insert(&self.setup.state.db).await?)
    }

    pub async fn insert_lance(
        &mut self,
        force_id: i32,
        name: Option<&str>,
        position: i32,
    ) -> Result<LanceModel, TestError> {
        let lance = entity::lance::ActiveModel {
            force_id: ActiveValue::Set(force_id),
            name: ActiveValue::Set(name.map(str::to_string)),
            position: ActiveValue::Set(position),
            ..Default::default()
        };

        Ok(lance.insert(&self.setup.state.db).await?)
    }

    /// Insert an active force holding a single lance at position 1.
    pub async fn insert_force_with_lance(
        &mut self,
        name: &str,
        lance_name: &str,
    ) -> Result<(ForceModel, LanceModel), TestError> {
        let force = self.insert_force(name, true).await?;
        let lance = self.insert_lance(force.id, Some(lance_name), 1).await?;

        Ok((force, lance))
    }

    pub async fn insert_assignment(
        &mut self,
        lance_id: i32,
        miniature_id: i32,
        position: i32,
    ) -> Result<ForceMiniatureModel, TestError> {
        let assignment = entity::force_miniature::ActiveModel {
            lance_id: ActiveValue::Set(lance_id),
            miniature_id: ActiveValue::Set(miniature_id),
            position: ActiveValue::Set(position),
            ..Default::default()
        };

        Ok(assignment.insert(&self.setup.state.db).await?)
    }
}
