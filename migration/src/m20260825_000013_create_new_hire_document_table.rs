use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000002_create_app_user_table::AppUser,
    m20260825_000005_create_document_table::Document,
    m20260825_000009_create_new_hire_table::NewHire,
};

static FK_NEW_HIRE_DOCUMENT_NEW_HIRE_ID: &str = "fk_new_hire_document_new_hire_id";
static FK_NEW_HIRE_DOCUMENT_DOCUMENT_ID: &str = "fk_new_hire_document_document_id";
static FK_NEW_HIRE_DOCUMENT_ADDED_BY: &str = "fk_new_hire_document_added_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewHireDocument::Table)
                    .if_not_exists()
                    .col(pk_auto(NewHireDocument::Id))
                    .col(integer(NewHireDocument::NewHireId))
                    .col(integer(NewHireDocument::DocumentId))
                    .col(integer(NewHireDocument::AddedBy))
                    .col(timestamp(NewHireDocument::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_DOCUMENT_NEW_HIRE_ID)
                    .from_tbl(NewHireDocument::Table)
                    .from_col(NewHireDocument::NewHireId)
                    .to_tbl(NewHire::Table)
                    .to_col(NewHire::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_DOCUMENT_DOCUMENT_ID)
                    .from_tbl(NewHireDocument::Table)
                    .from_col(NewHireDocument::DocumentId)
                    .to_tbl(Document::Table)
                    .to_col(Document::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_DOCUMENT_ADDED_BY)
                    .from_tbl(NewHireDocument::Table)
                    .from_col(NewHireDocument::AddedBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_NEW_HIRE_DOCUMENT_ADDED_BY,
            FK_NEW_HIRE_DOCUMENT_DOCUMENT_ID,
            FK_NEW_HIRE_DOCUMENT_NEW_HIRE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(NewHireDocument::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(NewHireDocument::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NewHireDocument {
    Table,
    Id,
    NewHireId,
    DocumentId,
    AddedBy,
    CreatedAt,
}
