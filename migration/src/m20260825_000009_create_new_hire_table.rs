use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000001_create_company_table::Company,
    m20260825_000002_create_app_user_table::AppUser,
    m20260825_000003_create_job_table::Job, m20260825_000004_create_candidate_table::Candidate,
};

static FK_NEW_HIRE_COMPANY_ID: &str = "fk_new_hire_company_id";
static FK_NEW_HIRE_CANDIDATE_ID: &str = "fk_new_hire_candidate_id";
static FK_NEW_HIRE_JOB_ID: &str = "fk_new_hire_job_id";
static FK_NEW_HIRE_MANAGER_ID: &str = "fk_new_hire_manager_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewHire::Table)
                    .if_not_exists()
                    .col(pk_auto(NewHire::Id))
                    .col(integer(NewHire::CompanyId))
                    .col(integer(NewHire::CandidateId))
                    .col(integer(NewHire::JobId))
                    .col(integer_null(NewHire::ManagerId))
                    .col(string(NewHire::FirstName))
                    .col(string(NewHire::LastName))
                    .col(string(NewHire::Email))
                    .col(string(NewHire::Position))
                    .col(string(NewHire::Department))
                    .col(string_null(NewHire::WorkLocation))
                    .col(date(NewHire::StartDate))
                    .col(string_len(NewHire::Status, 20))
                    .col(integer(NewHire::Progress))
                    .col(timestamp(NewHire::CreatedAt))
                    .col(timestamp(NewHire::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_COMPANY_ID)
                    .from_tbl(NewHire::Table)
                    .from_col(NewHire::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_CANDIDATE_ID)
                    .from_tbl(NewHire::Table)
                    .from_col(NewHire::CandidateId)
                    .to_tbl(Candidate::Table)
                    .to_col(Candidate::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_JOB_ID)
                    .from_tbl(NewHire::Table)
                    .from_col(NewHire::JobId)
                    .to_tbl(Job::Table)
                    .to_col(Job::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_MANAGER_ID)
                    .from_tbl(NewHire::Table)
                    .from_col(NewHire::ManagerId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_NEW_HIRE_MANAGER_ID,
            FK_NEW_HIRE_JOB_ID,
            FK_NEW_HIRE_CANDIDATE_ID,
            FK_NEW_HIRE_COMPANY_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(NewHire::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(NewHire::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NewHire {
    Table,
    Id,
    CompanyId,
    CandidateId,
    JobId,
    ManagerId,
    FirstName,
    LastName,
    Email,
    Position,
    Department,
    WorkLocation,
    StartDate,
    Status,
    Progress,
    CreatedAt,
    UpdatedAt,
}
