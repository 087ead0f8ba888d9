use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_lance_template::LanceTemplate;

static IDX_LANCE_TEMPLATE_PATTERN_TEMPLATE_ID: &str = "idx-lance_template_pattern-template_id";
static FK_LANCE_TEMPLATE_PATTERN_TEMPLATE_ID: &str = "fk-lance_template_pattern-template_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LanceTemplatePattern::Table)
                    .if_not_exists()
                    .col(pk_auto(LanceTemplatePattern::Id))
                    .col(integer(LanceTemplatePattern::TemplateId))
                    .col(string_len(LanceTemplatePattern::ChassisPattern, 128))
                    .col(integer(LanceTemplatePattern::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LANCE_TEMPLATE_PATTERN_TEMPLATE_ID)
                            .from(LanceTemplatePattern::Table, LanceTemplatePattern::TemplateId)
                            .to(LanceTemplate::Table, LanceTemplate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LANCE_TEMPLATE_PATTERN_TEMPLATE_ID)
                    .table(LanceTemplatePattern::Table)
                    .col(LanceTemplatePattern::TemplateId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LANCE_TEMPLATE_PATTERN_TEMPLATE_ID)
                    .table(LanceTemplatePattern::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LanceTemplatePattern::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LanceTemplatePattern {
    Table,
    Id,
    TemplateId,
    ChassisPattern,
    Position,
}
