mod create_miniature;
mod next_unique_id;

use mechbay_test_utils::prelude::*;

use crate::{
    error::{Error, ErrorKind},
    model::miniature::NewMiniature,
    service::inventory::InventoryService,
};

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
