use super::*;

/// Expect the miniature stored with trimmed fields and blank optionals cleared
#[tokio::test]
async fn creates_miniature() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Miniature)?;

    let inventory_service = InventoryService::new(&test.state.db);
    let mut miniature = new_miniature("A", 1, "  Atlas AS7-D ");
    miniature.tray_id = Some("   ".to_string());
    let result = inventory_service.create_miniature(miniature).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.chassis, "Atlas AS7-D");
    assert_eq!(created.tray_id, None);

    Ok(())
}

/// Expect Conflict when the same series and unique_id are created twice
#[tokio::test]
async fn fails_for_duplicate_identity() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Miniature)?;

    let inventory_service = InventoryService::new(&test.state.db);
    inventory_service
        .create_miniature(new_miniature("A", 5, "Atlas"))
        .await
        .unwrap();
    let result = inventory_service
        .create_miniature(new_miniature("A", 5, "Locust"))
        .await;

    assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Conflict));

    Ok(())
}

/// Expect the same unique_id to be accepted in a different series
#[tokio::test]
async fn allows_same_unique_id_in_other_series() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Miniature)?;

    let inventory_service = InventoryService::new(&test.state.db);
    let first = inventory_service
        .create_miniature(new_miniature("A", 5, "Atlas"))
        .await;
    let second = inventory_service
        .create_miniature(new_miniature("B", 5, "Atlas"))
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());

    Ok(())
}

/// Expect the configured default series when none is given
#[tokio::test]
async fn applies_default_series() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Miniature)?;

    let inventory_service = InventoryService::new(&test.state.db).with_default_series("K");
    let created = inventory_service
        .create_miniature(new_miniature(" ", 1, "Atlas"))
        .await
        .unwrap();

    assert_eq!(created.series, "K");

    Ok(())
}

/// Expect Validation errors for a blank chassis or a non-positive unique_id
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Miniature)?;

    let inventory_service = InventoryService::new(&test.state.db);
    let blank_chassis = inventory_service
        .create_miniature(new_miniature("A", 1, "  "))
        .await;
    let zero_id = inventory_service
        .create_miniature(new_miniature("A", 0, "Atlas"))
        .await;

    assert!(matches!(blank_chassis, Err(ref e) if e.kind() == ErrorKind::Validation));
    assert!(matches!(zero_id, Err(ref e) if e.kind() == ErrorKind::Validation));

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let inventory_service = InventoryService::new(&test.state.db);
    let result = inventory_service
        .create_miniature(new_miniature("A", 1, "Atlas"))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
