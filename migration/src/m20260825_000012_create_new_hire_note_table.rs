use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000002_create_app_user_table::AppUser,
    m20260825_000009_create_new_hire_table::NewHire, m20260825_000011_create_note_table::Note,
};

static FK_NEW_HIRE_NOTE_NEW_HIRE_ID: &str = "fk_new_hire_note_new_hire_id";
static FK_NEW_HIRE_NOTE_NOTE_ID: &str = "fk_new_hire_note_note_id";
static FK_NEW_HIRE_NOTE_CREATED_BY: &str = "fk_new_hire_note_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewHireNote::Table)
                    .if_not_exists()
                    .col(pk_auto(NewHireNote::Id))
                    .col(integer(NewHireNote::NewHireId))
                    .col(integer(NewHireNote::NoteId))
                    .col(integer(NewHireNote::CreatedBy))
                    .col(timestamp(NewHireNote::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_NOTE_NEW_HIRE_ID)
                    .from_tbl(NewHireNote::Table)
                    .from_col(NewHireNote::NewHireId)
                    .to_tbl(NewHire::Table)
                    .to_col(NewHire::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_NOTE_NOTE_ID)
                    .from_tbl(NewHireNote::Table)
                    .from_col(NewHireNote::NoteId)
                    .to_tbl(Note::Table)
                    .to_col(Note::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEW_HIRE_NOTE_CREATED_BY)
                    .from_tbl(NewHireNote::Table)
                    .from_col(NewHireNote::CreatedBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_NEW_HIRE_NOTE_CREATED_BY,
            FK_NEW_HIRE_NOTE_NOTE_ID,
            FK_NEW_HIRE_NOTE_NEW_HIRE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(NewHireNote::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(NewHireNote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NewHireNote {
    Table,
    Id,
    NewHireId,
    NoteId,
    CreatedBy,
    CreatedAt,
}
