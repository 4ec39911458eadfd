use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_create_company_table::Company;

static FK_CANDIDATE_COMPANY_ID: &str = "fk_candidate_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(integer(Candidate::CompanyId))
                    .col(string(Candidate::FirstName))
                    .col(string(Candidate::LastName))
                    .col(string(Candidate::Email))
                    .col(timestamp(Candidate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_COMPANY_ID)
                    .from_tbl(Candidate::Table)
                    .from_col(Candidate::CompanyId)
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
                    .name(FK_CANDIDATE_COMPANY_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Candidate {
    Table,
    Id,
    CompanyId,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}
