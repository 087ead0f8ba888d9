//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so service signatures
//! don't have to spell out `entity::<table>::Model` everywhere.

/// Type alias for a miniature in the inventory.
///
/// # Fields (from `entity::miniature::Model`)
/// - `id` - Primary key, internal identifier (not stable across databases)
/// - `series` - Short code partitioning the unique_id namespace
/// - `unique_id` - Positive integer, unique within its series
/// - `prefix` - Model prefix printed on the base
/// - `chassis` - Free-text unit name, e.g. "Atlas AS7-D"
/// - `kind` - Free-text category, stored in the `type` column
/// - `status` - Painting/assembly status (nullable)
/// - `tray_id` - Storage tray location (nullable)
/// - `notes` - Free-text notes (nullable)
/// - `created_at` - Timestamp when the record was created
pub type MiniatureModel = entity::miniature::Model;

/// Type alias for a force (a named roster of lances).
///
/// At most one force has `is_active` set at any time.
pub type ForceModel = entity::force::Model;

/// Type alias for a lance, an ordered sub-group of a force.
pub type LanceModel = entity::lance::Model;

/// Type alias for the assignment of one miniature to one lance at a position.
pub type ForceMiniatureModel = entity::force_miniature::Model;

/// Type alias for a named lance template.
pub type LanceTemplateModel = entity::lance_template::Model;

/// Type alias for one ordered chassis pattern of a lance template.
pub type LanceTemplatePatternModel = entity::lance_template_pattern::Model;
