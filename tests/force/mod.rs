use mechbay::{error::ErrorKind, service::force::ForceService};
use mechbay_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Expect exactly one active force, the switched-to one, after any sequence of operations
#[tokio::test]
async fn only_one_force_is_ever_active() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let force_service = ForceService::new(&test.state.db);

    let first = force_service.create_force("First").await.unwrap();
    let second = force_service.create_force("Second").await.unwrap();
    let third = force_service.create_force("Third").await.unwrap();

    for target in [first.id, third.id, second.id, second.id] {
        force_service.switch_force(target).await.unwrap();

        let active = entity::prelude::Force::find()
            .filter(entity::force::Column::IsActive.eq(true))
            .all(&test.state.db)
            .await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, target);
    }

    Ok(())
}

/// Expect one assignment per miniature per force, across all of its lances
#[tokio::test]
async fn miniature_is_placed_once_per_force() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let miniatures = test
        .inventory()
        .insert_mock_miniatures(&["Atlas", "Locust"])
        .await?;

    let force_service = ForceService::new(&test.state.db);
    let force = force_service.create_force("Strike").await.unwrap();
    let command = force_service
        .create_lance(force.id, Some("Command"))
        .await
        .unwrap();
    let recon = force_service
        .create_lance(force.id, Some("Recon"))
        .await
        .unwrap();

    force_service
        .add_miniature_to_lance(miniatures[0].id, command.id, None)
        .await
        .unwrap();
    let again = force_service
        .add_miniature_to_lance(miniatures[0].id, recon.id, None)
        .await;
    assert!(matches!(again, Err(ref e) if e.kind() == ErrorKind::Conflict));

    force_service
        .add_miniature_to_lance(miniatures[1].id, recon.id, None)
        .await
        .unwrap();

    let in_force = force_service.miniatures_in_force(force.id).await.unwrap();
    assert_eq!(in_force.len(), 2);

    // Moving keeps the single assignment, then the freed lance accepts other miniatures
    let moved = force_service
        .move_miniature(miniatures[0].id, recon.id, 2)
        .await
        .unwrap();
    assert_eq!(moved.lance_id, recon.id);
    let aggregate = force_service.get_force(force.id).await.unwrap();
    assert!(aggregate.lances[0].assignments.is_empty());
    assert_eq!(aggregate.lances[1].assignments.len(), 2);

    Ok(())
}
