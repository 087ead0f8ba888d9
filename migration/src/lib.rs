pub use sea_orm_migration::prelude::*;

mod m20251101_000001_miniature;
mod m20251101_000002_force;
mod m20251101_000003_lance;
mod m20251101_000004_force_miniature;
mod m20251101_000005_lance_template;
mod m20251101_000006_lance_template_pattern;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_miniature::Migration),
            Box::new(m20251101_000002_force::Migration),
            Box::new(m20251101_000003_lance::Migration),
            Box::new(m20251101_000004_force_miniature::Migration),
            Box::new(m20251101_000005_lance_template::Migration),
            Box::new(m20251101_000006_lance_template_pattern::Migration),
        ]
    }
}
