use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_create_company_table::Company;

static FK_JOB_COMPANY_ID: &str = "fk_job_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::CompanyId))
                    .col(string(Job::Title))
                    .col(string(Job::Department))
                    .col(timestamp(Job::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_COMPANY_ID)
                    .from_tbl(Job::Table)
                    .from_col(Job::CompanyId)
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
                    .name(FK_JOB_COMPANY_ID)
                    .table(Job::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    CompanyId,
    Title,
    Department,
    CreatedAt,
}
