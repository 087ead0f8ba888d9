use sea_orm_migration::{prelude::*, schema::*};

static IDX_MINIATURE_SERIES_UNIQUE_ID: &str = "idx-miniature-series-unique_id";
static IDX_MINIATURE_CHASSIS: &str = "idx-miniature-chassis";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Miniature::Table)
                    .if_not_exists()
                    .col(pk_auto(Miniature::Id))
                    .col(string_len(Miniature::Series, 8))
                    .col(integer(Miniature::UniqueId))
                    .col(string_len(Miniature::Prefix, 16))
                    .col(string_len(Miniature::Chassis, 128))
                    .col(string_len(Miniature::Type, 32))
                    .col(string_len_null(Miniature::Status, 32))
                    .col(string_len_null(Miniature::TrayId, 64))
                    .col(text_null(Miniature::Notes))
                    .col(timestamp(Miniature::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MINIATURE_SERIES_UNIQUE_ID)
                    .table(Miniature::Table)
                    .col(Miniature::Series)
                    .col(Miniature::UniqueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MINIATURE_CHASSIS)
                    .table(Miniature::Table)
                    .col(Miniature::Chassis)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MINIATURE_CHASSIS)
                    .table(Miniature::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MINIATURE_SERIES_UNIQUE_ID)
                    .table(Miniature::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Miniature::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Miniature {
    Table,
    Id,
    Series,
    UniqueId,
    Prefix,
    Chassis,
    Type,
    Status,
    TrayId,
    Notes,
    CreatedAt,
}
