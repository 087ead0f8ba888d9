use mechbay::{
    model::{
        exchange::{ImportMode, MiniatureRecord},
        miniature::MiniatureQuery,
    },
    service::{
        exchange::{
            force::ForceExchangeService, miniature::MiniatureExchangeService, read_document,
            template::TemplateExchangeService, write_document,
        },
        force::ForceService,
        inventory::InventoryService,
        lance_template::TemplateService,
    },
};
use mechbay_test_utils::prelude::*;

/// Comparable view of a miniature without its internal id
fn without_id(record: &MiniatureRecord) -> MiniatureRecord {
    MiniatureRecord {
        id: None,
        ..record.clone()
    }
}

/// Expect export followed by a replace import through a file to reproduce the same records
#[tokio::test]
async fn miniature_round_trip_through_file() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    test.inventory()
        .insert_mock_miniatures(&["Atlas AS7-D", "Locust LCT-1V", "Wasp WSP-1A"])
        .await?;
    test.inventory().insert_mock_miniature("B", 1, "Jenner").await?;

    let exchange = MiniatureExchangeService::new(&test.state.db);
    let before = exchange.export_miniatures().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("miniatures.json");
    write_document(&path, &exchange.export_miniatures_json().await.unwrap())
        .await
        .unwrap();

    let json = read_document(&path).await.unwrap();
    let report = exchange
        .import_miniatures_json(&json, ImportMode::Replace)
        .await
        .unwrap();
    assert_eq!(report.removed, 4);
    assert_eq!(report.inserted, 4);

    let after = exchange.export_miniatures().await.unwrap();
    let before: Vec<_> = before.iter().map(without_id).collect();
    let after: Vec<_> = after.iter().map(without_id).collect();
    assert_eq!(before, after);

    Ok(())
}

/// Expect references resolved only by series and unique_id, with no phantom assignments
#[tokio::test]
async fn force_import_resolves_by_identity() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    test.inventory().insert_mock_miniature("A", 1, "Atlas").await?;
    test.inventory().insert_mock_miniature("A", 2, "Locust").await?;

    let force_service = ForceService::new(&test.state.db);
    let force = force_service.create_force("Original").await.unwrap();
    let lance = force_service
        .create_lance(force.id, Some("Command"))
        .await
        .unwrap();
    let inventory = InventoryService::new(&test.state.db);
    let listed = inventory
        .list_miniatures(&MiniatureQuery::default())
        .await
        .unwrap();
    for miniature in &listed {
        force_service
            .add_miniature_to_lance(miniature.id, lance.id, None)
            .await
            .unwrap();
    }

    let force_exchange = ForceExchangeService::new(&test.state.db);
    let json = force_exchange.export_force_json(force.id).await.unwrap();

    // The Locust is gone from the inventory when the document comes back
    inventory.delete_miniature(listed[1].id).await.unwrap();

    let report = force_exchange.import_force_json(&json).await.unwrap();
    assert_eq!(report.imported_count, 1);
    assert_eq!(report.missing_miniatures, vec!["A-2 (Locust)".to_string()]);

    let imported = force_service.get_force(report.force_id).await.unwrap();
    assert!(!imported.force.is_active);
    assert_eq!(imported.force.name, "Original");
    assert_eq!(imported.lances.len(), 1);
    assert_eq!(imported.lances[0].lance.name.as_deref(), Some("Command"));
    assert_eq!(imported.miniature_count(), 1);
    assert_eq!(imported.lances[0].assignments[0].miniature.chassis, "Atlas");

    Ok(())
}

/// Expect a re-imported template to replace its pattern list rather than append
#[tokio::test]
async fn template_import_replaces_patterns() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let (template, _) = test
        .templates()
        .insert_template("Striker", &["Jenner", "Wolfhound"])
        .await?;

    let exchange = TemplateExchangeService::new(&test.state.db);
    let mut document = exchange.export_templates().await.unwrap();
    document.templates[0].chassis_patterns = vec!["Panther".to_string(), "Jenner".to_string()];

    let report = exchange.import_templates(document).await.unwrap();
    assert_eq!(report.updated, 1);
    assert_eq!(report.created, 0);

    let stored = TemplateService::new(&test.state.db)
        .get_template(template.id)
        .await
        .unwrap();
    assert_eq!(
        stored.chassis_patterns(),
        vec!["Panther".to_string(), "Jenner".to_string()]
    );

    Ok(())
}
