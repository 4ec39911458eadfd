use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000001_create_company_table::Company, m20260825_000002_create_app_user_table::AppUser,
};

static FK_ONBOARDING_TEMPLATE_COMPANY_ID: &str = "fk_onboarding_template_company_id";
static FK_ONBOARDING_TEMPLATE_CREATED_BY: &str = "fk_onboarding_template_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnboardingTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(OnboardingTemplate::Id))
                    .col(integer(OnboardingTemplate::CompanyId))
                    .col(string(OnboardingTemplate::Name))
                    .col(integer(OnboardingTemplate::ItemCount))
                    .col(integer(OnboardingTemplate::CreatedBy))
                    .col(timestamp(OnboardingTemplate::CreatedAt))
                    .col(timestamp(OnboardingTemplate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TEMPLATE_COMPANY_ID)
                    .from_tbl(OnboardingTemplate::Table)
                    .from_col(OnboardingTemplate::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONBOARDING_TEMPLATE_CREATED_BY)
                    .from_tbl(OnboardingTemplate::Table)
                    .from_col(OnboardingTemplate::CreatedBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ONBOARDING_TEMPLATE_CREATED_BY)
                    .table(OnboardingTemplate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ONBOARDING_TEMPLATE_COMPANY_ID)
                    .table(OnboardingTemplate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OnboardingTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OnboardingTemplate {
    Table,
    Id,
    CompanyId,
    Name,
    ItemCount,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
