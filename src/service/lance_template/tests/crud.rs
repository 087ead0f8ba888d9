use super::*;

/// Expect patterns stored in order with blank entries dropped
#[tokio::test]
async fn creates_template() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let template_service = TemplateService::new(&test.state.db);
    let created = template_service
        .create_template(new_template("Striker", &["Jenner", " ", "Wolfhound "]))
        .await
        .unwrap();

    assert_eq!(created.template.name, "Striker");
    assert_eq!(
        created.chassis_patterns(),
        vec!["Jenner".to_string(), "Wolfhound".to_string()]
    );

    Ok(())
}

/// Expect Validation errors for an empty pattern list or a blank name
#[tokio::test]
async fn rejects_invalid_template() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let template_service = TemplateService::new(&test.state.db);
    let no_patterns = template_service
        .create_template(new_template("Striker", &["", "  "]))
        .await;
    let no_name = template_service
        .create_template(new_template(" ", &["Jenner"]))
        .await;

    assert!(matches!(no_patterns, Err(ref e) if e.kind() == ErrorKind::Validation));
    assert!(matches!(no_name, Err(ref e) if e.kind() == ErrorKind::Validation));

    Ok(())
}

/// Expect the previous pattern list fully replaced on update
#[tokio::test]
async fn update_replaces_patterns() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let (template, _) = test
        .templates()
        .insert_template("Striker", &["Jenner", "Wolfhound", "Locust"])
        .await?;

    let template_service = TemplateService::new(&test.state.db);
    template_service
        .update_template(template.id, new_template("Striker Lance", &["Panther"]))
        .await
        .unwrap();

    let stored = template_service.get_template(template.id).await.unwrap();
    assert_eq!(stored.template.name, "Striker Lance");
    assert_eq!(stored.chassis_patterns(), vec!["Panther".to_string()]);

    Ok(())
}

/// Expect templates listed by name, each with its own patterns
#[tokio::test]
async fn lists_templates_by_name() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    test.templates()
        .insert_template("Striker", &["Jenner", "Wolfhound"])
        .await?;
    test.templates().insert_template("Assault", &["Atlas"]).await?;

    let template_service = TemplateService::new(&test.state.db);
    let templates = template_service.list_templates().await.unwrap();

    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].template.name, "Assault");
    assert_eq!(templates[0].chassis_patterns(), vec!["Atlas".to_string()]);
    assert_eq!(templates[1].patterns.len(), 2);

    Ok(())
}

/// Expect the template gone after deletion and NotFound on a second delete
#[tokio::test]
async fn deletes_template() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let (template, _) = test
        .templates()
        .insert_template("Striker", &["Jenner"])
        .await?;

    let template_service = TemplateService::new(&test.state.db);
    template_service.delete_template(template.id).await.unwrap();

    let lookup = template_service.get_template(template.id).await;
    assert!(matches!(lookup, Err(ref e) if e.kind() == ErrorKind::NotFound));
    let again = template_service.delete_template(template.id).await;
    assert!(matches!(again, Err(ref e) if e.kind() == ErrorKind::NotFound));

    Ok(())
}

/// Expect matching against the stored inventory with the given exclusions
#[tokio::test]
async fn matches_against_inventory() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let miniatures = test
        .inventory()
        .insert_mock_miniatures(&["Atlas AS7-D", "Atlas AS7-K", "Locust LCT-1V"])
        .await?;
    let (template, _) = test
        .templates()
        .insert_template("Mixed", &["Atlas", "Locust"])
        .await?;

    let template_service = TemplateService::new(&test.state.db);
    let exclude = std::collections::HashSet::from([miniatures[0].id]);
    let outcome = template_service
        .match_template(template.id, &exclude)
        .await
        .unwrap();

    let ids: Vec<i32> = outcome.matches.iter().map(|m| m.miniature.id).collect();
    assert_eq!(ids, vec![miniatures[1].id, miniatures[2].id]);
    assert!(outcome.is_complete());

    Ok(())
}
