use mechbay::{
    error::ErrorKind,
    model::miniature::{MiniatureQuery, NewMiniature},
    service::inventory::InventoryService,
};
use mechbay_test_utils::TestError;

use crate::migrated_database;

fn new_miniature(series: &str, unique_id: i32, chassis: &str) -> NewMiniature {
    NewMiniature {
        series: series.to_string(),
        unique_id,
        prefix: "TST".to_string(),
        chassis: chassis.to_string(),
        kind: "Mech".to_string(),
        status: None,
        tray_id: None,
        notes: None,
    }
}

/// Expect identities to be unique per series on the migrated schema
#[tokio::test]
async fn unique_id_is_scoped_to_series() -> Result<(), TestError> {
    let db = migrated_database().await?;
    let inventory = InventoryService::new(&db);

    for unique_id in [1, 2, 40] {
        inventory
            .create_miniature(new_miniature("A", unique_id, "Atlas"))
            .await
            .unwrap();

        let duplicate = inventory
            .create_miniature(new_miniature("A", unique_id, "Locust"))
            .await;
        assert!(matches!(duplicate, Err(ref e) if e.kind() == ErrorKind::Conflict));

        let other_series = inventory
            .create_miniature(new_miniature("B", unique_id, "Locust"))
            .await;
        assert!(other_series.is_ok());
    }

    let listed = inventory
        .list_miniatures(&MiniatureQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 6);

    Ok(())
}
