use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000001_create_company_table::Company, m20260825_000002_create_app_user_table::AppUser,
};

static FK_DOCUMENT_COMPANY_ID: &str = "fk_document_company_id";
static FK_DOCUMENT_UPLOADED_BY: &str = "fk_document_uploaded_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(integer(Document::CompanyId))
                    .col(string(Document::Name))
                    .col(string(Document::FilePath))
                    .col(integer(Document::UploadedBy))
                    .col(timestamp(Document::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_COMPANY_ID)
                    .from_tbl(Document::Table)
                    .from_col(Document::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_UPLOADED_BY)
                    .from_tbl(Document::Table)
                    .from_col(Document::UploadedBy)
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
                    .name(FK_DOCUMENT_UPLOADED_BY)
                    .table(Document::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DOCUMENT_COMPANY_ID)
                    .table(Document::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    CompanyId,
    Name,
    FilePath,
    UploadedBy,
    CreatedAt,
}
