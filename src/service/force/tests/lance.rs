use super::*;

/// Expect positions 1, 2, ... for consecutive lances of a force
#[tokio::test]
async fn numbers_lances_in_creation_order() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let force = test.forces().insert_force("Strike", true).await?;

    let force_service = ForceService::new(&test.state.db);
    let first = force_service.create_lance(force.id, Some("Command")).await.unwrap();
    let second = force_service.create_lance(force.id, None).await.unwrap();

    assert_eq!(first.position, 1);
    assert_eq!(second.position, 2);
    assert_eq!(first.name.as_deref(), Some("Command"));
    assert_eq!(second.name, None);

    Ok(())
}

/// Expect the next position to follow the highest existing one
#[tokio::test]
async fn appends_after_highest_position() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let force = test.forces().insert_force("Strike", true).await?;
    test.forces().insert_lance(force.id, None, 5).await?;

    let force_service = ForceService::new(&test.state.db);
    let lance = force_service.create_lance(force.id, None).await.unwrap();

    assert_eq!(lance.position, 6);

    Ok(())
}

/// Expect Validation instead of an overflow when the last lance holds the largest position
#[tokio::test]
async fn fails_to_append_after_largest_position() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let force = test.forces().insert_force("Strike", true).await?;
    test.forces().insert_lance(force.id, None, i32::MAX).await?;

    let force_service = ForceService::new(&test.state.db);
    let result = force_service.create_lance(force.id, None).await;

    assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Validation));
    let aggregate = force_service.get_force(force.id).await.unwrap();
    assert_eq!(aggregate.lances.len(), 1);

    Ok(())
}

/// Expect NotFound when the force does not exist
#[tokio::test]
async fn fails_for_nonexistent_force() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let force_service = ForceService::new(&test.state.db);
    let result = force_service.create_lance(1, Some("Command")).await;

    assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::NotFound));

    Ok(())
}

/// Expect a blank name to clear the lance name
#[tokio::test]
async fn renames_and_clears_name() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let (_, lance) = test
        .forces()
        .insert_force_with_lance("Strike", "Command")
        .await?;

    let force_service = ForceService::new(&test.state.db);
    let renamed = force_service
        .rename_lance(lance.id, Some("Fire Support"))
        .await
        .unwrap();
    assert_eq!(renamed.name.as_deref(), Some("Fire Support"));

    let cleared = force_service.rename_lance(lance.id, Some("  ")).await.unwrap();
    assert_eq!(cleared.name, None);

    Ok(())
}

/// Expect the lance and its assignments removed while other lances stay
#[tokio::test]
async fn deletes_lance_with_assignments() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let miniatures = test.inventory().insert_mock_miniatures(&["Atlas"]).await?;
    let (force, lance) = test
        .forces()
        .insert_force_with_lance("Strike", "Command")
        .await?;
    let other = test.forces().insert_lance(force.id, Some("Recon"), 2).await?;
    test.forces()
        .insert_assignment(lance.id, miniatures[0].id, 1)
        .await?;

    let force_service = ForceService::new(&test.state.db);
    force_service.delete_lance(lance.id).await.unwrap();

    let aggregate = force_service.get_force(force.id).await.unwrap();
    assert_eq!(aggregate.lances.len(), 1);
    assert_eq!(aggregate.lances[0].lance.id, other.id);
    assert!(force_service
        .miniatures_in_force(force.id)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}
