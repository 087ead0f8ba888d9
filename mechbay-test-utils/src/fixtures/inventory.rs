use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::MiniatureModel, TestSetup};

impl TestSetup {
    pub fn inventory<'a>(&'a mut self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> InventoryFixtures<'a> {
    /// Insert a miniature with the given identity and chassis.
    ///
    /// Uses a fixed prefix of `TST`, type `Mech` and tray `T1`.
    pub async fn insert_mock_miniature(
        &mut self,
        series: &str,
        unique_id: i32,
        chassis: &str,
    ) -> Result<MiniatureModel, TestError> {
        let miniature = entity::miniature::ActiveModel {
            series: ActiveValue::Set(series.to_string()),
            unique_id: ActiveValue::Set(unique_id),
            prefix: ActiveValue::Set("TST".to_string()),
            chassis: ActiveValue::Set(chassis.to_string()),
            kind: ActiveValue::Set("Mech".to_string()),
            status: ActiveValue::Set(None),
            tray_id: ActiveValue::Set(Some("T1".to_string())),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(miniature.insert(&self.setup.state.db).await?)
    }

    /// Insert one series "A" miniature per chassis, numbered from 1 in order.
    pub async fn insert_mock_miniatures(
        &mut self,
        chassis: &[&str],
    ) -> Result<Vec<MiniatureModel>, TestError> {
        let mut models = Vec::with_capacity(chassis.len());

        for (unique_id, name) in (1..).zip(chassis.iter()) {
            models.push(self.insert_mock_miniature("A", unique_id, name).await?);
        }

        Ok(models)
    }
}
