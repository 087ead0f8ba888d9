//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main mechbay crate so fixtures and tests
//! read the same way on both sides.

pub type MiniatureModel = entity::miniature::Model;

pub type ForceModel = entity::force::Model;

pub type LanceModel = entity::lance::Model;

pub type ForceMiniatureModel = entity::force_miniature::Model;

pub type LanceTemplateModel = entity::lance_template::Model;

pub type LanceTemplatePatternModel = entity::lance_template_pattern::Model;
