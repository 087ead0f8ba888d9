//! Service layer.
//!
//! Services own the inventory, force, template and exchange operations. Each holds a
//! [`sea_orm::DatabaseConnection`], opens one transaction per operation and builds the
//! repositories it needs on top of that transaction.

pub mod exchange;
pub mod force;
pub mod inventory;
pub mod lance_template;

use crate::error::validation::ValidationError;

/// Value following the highest one in use, `1` when none is in use yet
pub(crate) fn next_in_sequence(
    highest: Option<i32>,
    sequence: &'static str,
) -> Result<i32, ValidationError> {
    match highest {
        None => Ok(1),
        Some(highest) => highest
            .checked_add(1)
            .ok_or(ValidationError::SequenceExhausted(sequence)),
    }
}
