use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000001_create_company_table::Company, m20260825_000002_create_app_user_table::AppUser,
};

static FK_NOTE_COMPANY_ID: &str = "fk_note_company_id";
static FK_NOTE_AUTHOR_ID: &str = "fk_note_author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(pk_auto(Note::Id))
                    .col(integer(Note::CompanyId))
                    .col(string_null(Note::Title))
                    .col(text(Note::Content))
                    .col(integer(Note::AuthorId))
                    .col(timestamp(Note::CreatedAt))
                    .col(timestamp(Note::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTE_COMPANY_ID)
                    .from_tbl(Note::Table)
                    .from_col(Note::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTE_AUTHOR_ID)
                    .from_tbl(Note::Table)
                    .from_col(Note::AuthorId)
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
                    .name(FK_NOTE_AUTHOR_ID)
                    .table(Note::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTE_COMPANY_ID)
                    .table(Note::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Note {
    Table,
    Id,
    CompanyId,
    Title,
    Content,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
