//! Database fixture helpers.
//!
//! - `inventory` - miniature records
//! - `force` - forces, lances and lance assignments
//! - `template` - lance templates and their chassis patterns

pub mod force;
pub mod inventory;
pub mod template;
