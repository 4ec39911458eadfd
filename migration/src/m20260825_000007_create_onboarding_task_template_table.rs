use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_create_company_table::Company;

static FK_ONBOARDING_TASK_TEMPLATE_COMPANY_ID: &str = "fk_onboarding_task_template_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnboardingTaskTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(OnboardingTaskTemplate::Id))
                    .col(integer(OnboardingTaskTemplate::CompanyId))
                    .col(string(OnboardingTaskTemplate::Title))
                    .col(text_null(OnboardingTaskTemplate::Description))
                    .col(timestamp(OnboardingTaskTemplate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TASK_TEMPLATE_COMPANY_ID)
                    .from_tbl(OnboardingTaskTemplate::Table)
                    .from_col(OnboardingTaskTemplate::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ONBOARDING_TASK_TEMPLATE_COMPANY_ID)
                    .table(OnboardingTaskTemplate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(OnboardingTaskTemplate::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OnboardingTaskTemplate {
    Table,
    Id,
    CompanyId,
    Title,
    Description,
    CreatedAt,
}
