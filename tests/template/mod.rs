use mechbay::{
    model::template::{NewTemplate, TemplateLanceOptions, TemplateLanceOutcome},
    service::{force::ForceService, lance_template::TemplateService},
};
use mechbay_test_utils::prelude::*;

/// Expect the greedy match to keep template order and leave the second Atlas unused
#[tokio::test]
async fn builds_lance_from_greedy_match() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let miniatures = test
        .inventory()
        .insert_mock_miniatures(&["Atlas AS7-D", "Atlas AS7-K", "Locust LCT-1V"])
        .await?;

    let template_service = TemplateService::new(&test.state.db);
    let template = template_service
        .create_template(NewTemplate {
            name: "Pair".to_string(),
            description: Some("Assault and scout".to_string()),
            chassis_patterns: vec!["Atlas".to_string(), "Locust".to_string()],
        })
        .await
        .unwrap();

    let force_service = ForceService::new(&test.state.db);
    let force = force_service.create_force("Strike").await.unwrap();

    let outcome = template_service
        .create_lance_from_template(
            force.id,
            template.template.id,
            TemplateLanceOptions::default(),
        )
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        TemplateLanceOutcome::Created { matched_count: 2, ref missing, .. } if missing.is_empty()
    ));

    let in_force = force_service.miniatures_in_force(force.id).await.unwrap();
    assert!(in_force.contains(&miniatures[0].id));
    assert!(!in_force.contains(&miniatures[1].id));
    assert!(in_force.contains(&miniatures[2].id));

    // A second lance from the same template takes the remaining Atlas and misses the Locust
    let outcome = template_service
        .create_lance_from_template(
            force.id,
            template.template.id,
            TemplateLanceOptions::default(),
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        TemplateLanceOutcome::NeedsConfirmation {
            template_name: "Pair".to_string(),
            matched_count: 1,
            missing: vec!["Locust".to_string()],
        }
    );

    Ok(())
}
