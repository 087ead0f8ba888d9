//! Factory functions for generating in-memory database models.
//!
//! These don't touch the database and are meant for pure functions such as
//! the template matcher.

use chrono::Utc;

use crate::model::MiniatureModel;

/// Create a miniature model with the given identity and chassis.
///
/// The prefix and type are fixed test values; status, tray and notes are empty.
pub fn mock_miniature_model(id: i32, series: &str, unique_id: i32, chassis: &str) -> MiniatureModel {
    MiniatureModel {
        id,
        series: series.to_string(),
        unique_id,
        prefix: "TST".to_string(),
        chassis: chassis.to_string(),
        kind: "Mech".to_string(),
        status: None,
        tray_id: None,
        notes: None,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a series "A" miniature model whose unique_id equals its database id.
pub fn mock_miniature(id: i32, chassis: &str) -> MiniatureModel {
    mock_miniature_model(id, "A", id, chassis)
}
