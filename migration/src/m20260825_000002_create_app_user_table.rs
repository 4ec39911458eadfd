use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_create_company_table::Company;

static FK_APP_USER_COMPANY_ID: &str = "fk_app_user_company_id";
static IDX_APP_USER_EMAIL: &str = "idx_app_user_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(integer(AppUser::CompanyId))
                    .col(string(AppUser::FirstName))
                    .col(string(AppUser::LastName))
                    .col(string(AppUser::Email))
                    .col(string_len(AppUser::Role, 20))
                    .col(timestamp(AppUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_USER_COMPANY_ID)
                    .from_tbl(AppUser::Table)
                    .from_col(AppUser::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_USER_EMAIL)
                    .table(AppUser::Table)
                    .col(AppUser::Email)
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
                    .name(FK_APP_USER_COMPANY_ID)
                    .table(AppUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    CompanyId,
    FirstName,
    LastName,
    Email,
    Role,
    CreatedAt,
}
