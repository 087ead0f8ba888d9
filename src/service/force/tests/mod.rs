mod lance;

use mechbay_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::ErrorKind, service::force::ForceService};

/// Number of forces carrying the active flag
async fn active_force_count(test: &TestSetup) -> Result<usize, TestError> {
    let active = entity::prelude::Force::find()
        .filter(entity::force::Column::IsActive.eq(true))
        .all(&test.state.db)
        .await?;

    Ok(active.len())
}
