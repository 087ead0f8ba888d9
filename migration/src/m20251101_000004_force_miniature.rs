use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_miniature::Miniature, m20251101_000003_lance::Lance};

static IDX_FORCE_MINIATURE_LANCE_ID: &str = "idx-force_miniature-lance_id";
static IDX_FORCE_MINIATURE_MINIATURE_ID: &str = "idx-force_miniature-miniature_id";
static IDX_FORCE_MINIATURE_LANCE_MINIATURE: &str = "idx-force_miniature-lance_id-miniature_id";
static FK_FORCE_MINIATURE_LANCE_ID: &str = "fk-force_miniature-lance_id";
static FK_FORCE_MINIATURE_MINIATURE_ID: &str = "fk-force_miniature-miniature_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForceMiniature::Table)
                    .if_not_exists()
                    .col(pk_auto(ForceMiniature::Id))
                    .col(integer(ForceMiniature::LanceId))
                    .col(integer(ForceMiniature::MiniatureId))
                    .col(integer(ForceMiniature::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FORCE_MINIATURE_LANCE_ID)
                            .from(ForceMiniature::Table, ForceMiniature::LanceId)
                            .to(Lance::Table, Lance::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FORCE_MINIATURE_MINIATURE_ID)
                            .from(ForceMiniature::Table, ForceMiniature::MiniatureId)
                            .to(Miniature::Table, Miniature::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORCE_MINIATURE_LANCE_ID)
                    .table(ForceMiniature::Table)
                    .col(ForceMiniature::LanceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORCE_MINIATURE_MINIATURE_ID)
                    .table(ForceMiniature::Table)
                    .col(ForceMiniature::MiniatureId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORCE_MINIATURE_LANCE_MINIATURE)
                    .table(ForceMiniature::Table)
                    .col(ForceMiniature::LanceId)
                    .col(ForceMiniature::MiniatureId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [
            IDX_FORCE_MINIATURE_LANCE_MINIATURE,
            IDX_FORCE_MINIATURE_MINIATURE_ID,
            IDX_FORCE_MINIATURE_LANCE_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(index)
                        .table(ForceMiniature::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(ForceMiniature::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ForceMiniature {
    Table,
    Id,
    LanceId,
    MiniatureId,
    Position,
}
