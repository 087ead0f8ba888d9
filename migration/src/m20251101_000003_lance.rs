use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_force::Force;

static IDX_LANCE_FORCE_ID: &str = "idx-lance-force_id";
static FK_LANCE_FORCE_ID: &str = "fk-lance-force_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lance::Table)
                    .if_not_exists()
                    .col(pk_auto(Lance::Id))
                    .col(integer(Lance::ForceId))
                    .col(string_len_null(Lance::Name, 128))
                    .col(integer(Lance::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LANCE_FORCE_ID)
                            .from(Lance::Table, Lance::ForceId)
                            .to(Force::Table, Force::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LANCE_FORCE_ID)
                    .table(Lance::Table)
                    .col(Lance::ForceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LANCE_FORCE_ID)
                    .table(Lance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Lance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Lance {
    Table,
    Id,
    ForceId,
    Name,
    Position,
}
