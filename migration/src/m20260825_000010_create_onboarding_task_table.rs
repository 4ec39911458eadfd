use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000002_create_app_user_table::AppUser,
    m20260825_000007_create_onboarding_task_template_table::OnboardingTaskTemplate,
    m20260825_000009_create_new_hire_table::NewHire,
};

static FK_ONBOARDING_TASK_NEW_HIRE_ID: &str = "fk_onboarding_task_new_hire_id";
static FK_ONBOARDING_TASK_TASK_TEMPLATE_ID: &str = "fk_onboarding_task_task_template_id";
static FK_ONBOARDING_TASK_ASSIGNED_TO: &str = "fk_onboarding_task_assigned_to";
static FK_ONBOARDING_TASK_COMPLETED_BY: &str = "fk_onboarding_task_completed_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnboardingTask::Table)
                    .if_not_exists()
                    .col(pk_auto(OnboardingTask::Id))
                    .col(integer(OnboardingTask::NewHireId))
                    .col(integer_null(OnboardingTask::TaskTemplateId))
                    .col(string(OnboardingTask::Title))
                    .col(text_null(OnboardingTask::Description))
                    .col(date_null(OnboardingTask::DueDate))
                    .col(string_len(OnboardingTask::Status, 20))
                    .col(integer_null(OnboardingTask::AssignedTo))
                    .col(string_null(OnboardingTask::Priority))
                    .col(string_null(OnboardingTask::Category))
                    .col(integer_null(OnboardingTask::CompletedBy))
                    .col(timestamp_null(OnboardingTask::CompletedDate))
                    .col(timestamp(OnboardingTask::CreatedAt))
                    .col(timestamp(OnboardingTask::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TASK_NEW_HIRE_ID)
                    .from_tbl(OnboardingTask::Table)
                    .from_col(OnboardingTask::NewHireId)
                    .to_tbl(NewHire::Table)
                    .to_col(NewHire::Id)
                    .to_owned(),
            )
            .await?;

        // Tasks cloned from a catalog entry are independent copies; deleting
        // the catalog entry keeps the instance and nulls the back-reference.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TASK_TASK_TEMPLATE_ID)
                    .from_tbl(OnboardingTask::Table)
                    .from_col(OnboardingTask::TaskTemplateId)
                    .to_tbl(OnboardingTaskTemplate::Table)
                    .to_col(OnboardingTaskTemplate::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TASK_ASSIGNED_TO)
                    .from_tbl(OnboardingTask::Table)
                    .from_col(OnboardingTask::AssignedTo)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TASK_COMPLETED_BY)
                    .from_tbl(OnboardingTask::Table)
                    .from_col(OnboardingTask::CompletedBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ONBOARDING_TASK_COMPLETED_BY,
            FK_ONBOARDING_TASK_ASSIGNED_TO,
            FK_ONBOARDING_TASK_TASK_TEMPLATE_ID,
            FK_ONBOARDING_TASK_NEW_HIRE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(OnboardingTask::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(OnboardingTask::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OnboardingTask {
    Table,
    Id,
    NewHireId,
    TaskTemplateId,
    Title,
    Description,
    DueDate,
    Status,
    AssignedTo,
    Priority,
    Category,
    CompletedBy,
    CompletedDate,
    CreatedAt,
    UpdatedAt,
}
