use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000006_create_onboarding_template_table::OnboardingTemplate,
    m20260825_000007_create_onboarding_task_template_table::OnboardingTaskTemplate,
};

static FK_TEMPLATE_TASK_MAP_TEMPLATE_ID: &str = "fk_template_task_map_template_id";
static FK_TEMPLATE_TASK_MAP_TASK_TEMPLATE_ID: &str = "fk_template_task_map_task_template_id";
static IDX_TEMPLATE_TASK_MAP_SEQUENCE: &str = "idx_template_task_map_template_id_sequence";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TemplateTaskMap::Table)
                    .if_not_exists()
                    .col(pk_auto(TemplateTaskMap::Id))
                    .col(integer(TemplateTaskMap::TemplateId))
                    .col(integer(TemplateTaskMap::TaskTemplateId))
                    .col(integer(TemplateTaskMap::Sequence))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEMPLATE_TASK_MAP_TEMPLATE_ID)
                    .from_tbl(TemplateTaskMap::Table)
                    .from_col(TemplateTaskMap::TemplateId)
                    .to_tbl(OnboardingTemplate::Table)
                    .to_col(OnboardingTemplate::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEMPLATE_TASK_MAP_TASK_TEMPLATE_ID)
                    .from_tbl(TemplateTaskMap::Table)
                    .from_col(TemplateTaskMap::TaskTemplateId)
                    .to_tbl(OnboardingTaskTemplate::Table)
                    .to_col(OnboardingTaskTemplate::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Sequence is contiguous 1..N within a template; the mapping is
        // always rewritten in full so the constraint never blocks a reorder.
        manager
            .create_index(
                Index::create()
                    .name(IDX_TEMPLATE_TASK_MAP_SEQUENCE)
                    .table(TemplateTaskMap::Table)
                    .col(TemplateTaskMap::TemplateId)
                    .col(TemplateTaskMap::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEMPLATE_TASK_MAP_TASK_TEMPLATE_ID)
                    .table(TemplateTaskMap::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEMPLATE_TASK_MAP_TEMPLATE_ID)
                    .table(TemplateTaskMap::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TemplateTaskMap::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TemplateTaskMap {
    Table,
    Id,
    TemplateId,
    TaskTemplateId,
    Sequence,
}
