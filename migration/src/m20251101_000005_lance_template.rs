use sea_orm_migration::{prelude::*, schema::*};

static IDX_LANCE_TEMPLATE_NAME: &str = "idx-lance_template-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LanceTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(LanceTemplate::Id))
                    .col(string_len(LanceTemplate::Name, 128))
                    .col(text_null(LanceTemplate::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LANCE_TEMPLATE_NAME)
                    .table(LanceTemplate::Table)
                    .col(LanceTemplate::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LANCE_TEMPLATE_NAME)
                    .table(LanceTemplate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LanceTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LanceTemplate {
    Table,
    Id,
    Name,
    Description,
}
