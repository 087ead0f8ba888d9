use sea_orm_migration::{prelude::*, schema::*};

static IDX_FORCE_IS_ACTIVE: &str = "idx-force-is_active";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Force::Table)
                    .if_not_exists()
                    .col(pk_auto(Force::Id))
                    .col(string_len(Force::Name, 128))
                    .col(boolean(Force::IsActive).default(false))
                    .col(timestamp(Force::CreatedAt))
                    .col(timestamp(Force::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORCE_IS_ACTIVE)
                    .table(Force::Table)
                    .col(Force::IsActive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORCE_IS_ACTIVE)
                    .table(Force::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Force::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Force {
    Table,
    Id,
    Name,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
