use super::*;

/// Expect 1 for an empty series and max + 1 otherwise
#[tokio::test]
async fn numbers_within_series() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Miniature)?;
    test.inventory().insert_mock_miniature("A", 4, "Atlas").await?;
    test.inventory().insert_mock_miniature("B", 10, "Atlas").await?;

    let inventory_service = InventoryService::new(&test.state.db);

    assert_eq!(inventory_service.next_unique_id("A").await.unwrap(), 5);
    assert_eq!(inventory_service.next_unique_id("B").await.unwrap(), 11);
    assert_eq!(inventory_service.next_unique_id("C").await.unwrap(), 1);

    Ok(())
}

/// Expect Validation instead of an overflow once the series holds the largest unique_id
#[tokio::test]
async fn fails_when_series_is_exhausted() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Miniature)?;
    test.inventory()
        .insert_mock_miniature("A", i32::MAX, "Atlas")
        .await?;

    let inventory_service = InventoryService::new(&test.state.db);
    let result = inventory_service.next_unique_id("A").await;

    assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Validation));
    assert_eq!(inventory_service.next_unique_id("B").await.unwrap(), 1);

    Ok(())
}

/// Expect a prefilled copy numbered after the last miniature of its series
#[tokio::test]
async fn prepares_duplicate() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Miniature)?;
    let miniature = test.inventory().insert_mock_miniature("B", 2, "Atlas").await?;
    test.inventory().insert_mock_miniature("B", 7, "Locust").await?;

    let inventory_service = InventoryService::new(&test.state.db);
    let duplicate = inventory_service
        .prepare_duplicate(miniature.id)
        .await
        .unwrap();

    assert_eq!(duplicate.series, "B");
    assert_eq!(duplicate.unique_id, 8);
    assert_eq!(duplicate.chassis, "Atlas");
    assert_eq!(duplicate.tray_id, miniature.tray_id);

    let created = inventory_service.create_miniature(duplicate).await;
    assert!(created.is_ok());

    Ok(())
}

/// Expect seeding to skip identities that already exist
#[tokio::test]
async fn seeds_once() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Miniature)?;

    let inventory_service = InventoryService::new(&test.state.db);

    assert_eq!(inventory_service.seed().await.unwrap(), 2);
    assert_eq!(inventory_service.seed().await.unwrap(), 0);

    Ok(())
}
