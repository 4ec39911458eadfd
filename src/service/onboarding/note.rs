use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{app_user::UserRepository, onboarding::new_hire::NewHireRepository,
        onboarding::note::NoteRepository},
    error::{auth::AuthError, onboarding::OnboardingError, Error},
    model::{
        onboarding::{CreateNoteDto, NoteDto, UpdateNoteDto},
        session::user::SessionUser,
    },
};

fn to_dto(note: entity::note::Model, author: entity::app_user::Model) -> NoteDto {
    NoteDto {
        id: note.id,
        title: note.title,
        content: note.content,
        author: author.into(),
        created_at: note.created_at,
        updated_at: note.updated_at,
    }
}

pub struct NoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteService<'a> {
    /// Creates a new instance of [`NoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a note to a new hire, authored by the acting user.
    pub async fn add_note(
        &self,
        user: SessionUser,
        new_hire_id: i32,
        dto: CreateNoteDto,
    ) -> Result<NoteDto, Error> {
        let new_hire = NewHireRepository::new(self.db)
            .get_by_id(new_hire_id, user.company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        if dto.content.trim().is_empty() {
            return Err(OnboardingError::Validation("Note content is required".to_string()).into());
        }

        let author = UserRepository::new(self.db)
            .get_by_id(user.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.user_id))?;

        let txn = self.db.begin().await?;

        let note = NoteRepository::new(&txn)
            .create(
                user.company_id,
                new_hire.id,
                user.user_id,
                dto.title,
                dto.content,
            )
            .await?;

        txn.commit().await?;

        Ok(to_dto(note, author))
    }

    /// Gets a new hire's notes newest-first, each enriched with the
    /// author's public profile.
    pub async fn get_notes(&self, new_hire_id: i32, company_id: i32) -> Result<Vec<NoteDto>, Error> {
        NewHireRepository::new(self.db)
            .get_by_id(new_hire_id, company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        let links = NoteRepository::new(self.db)
            .get_many_by_new_hire_id(new_hire_id)
            .await?;

        let author_ids: Vec<i32> = links
            .iter()
            .filter_map(|(_, note)| note.as_ref().map(|note| note.author_id))
            .collect();

        let authors: HashMap<i32, entity::app_user::Model> = UserRepository::new(self.db)
            .get_many_by_ids(author_ids)
            .await?
            .into_iter()
            .map(|author| (author.id, author))
            .collect();

        Ok(links
            .into_iter()
            .filter_map(|(_, note)| {
                let note = note?;
                let author = authors.get(&note.author_id)?.clone();

                Some(to_dto(note, author))
            })
            .collect())
    }

    /// Updates a note. Only the stored author may do so, regardless of any
    /// claim in the request.
    pub async fn update_note(
        &self,
        user: SessionUser,
        note_id: i32,
        dto: UpdateNoteDto,
    ) -> Result<NoteDto, Error> {
        let note = self.get_authored_note(user, note_id).await?;

        let author = UserRepository::new(self.db)
            .get_by_id(user.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.user_id))?;

        let note = NoteRepository::new(self.db)
            .update(note, dto.title, dto.content)
            .await?;

        Ok(to_dto(note, author))
    }

    /// Deletes a note and its new-hire links. Author-only.
    pub async fn delete_note(&self, user: SessionUser, note_id: i32) -> Result<(), Error> {
        let note = self.get_authored_note(user, note_id).await?;

        let txn = self.db.begin().await?;
        NoteRepository::new(&txn).delete(note.id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Fetches a note within the actor's tenant and verifies authorship.
    async fn get_authored_note(
        &self,
        user: SessionUser,
        note_id: i32,
    ) -> Result<entity::note::Model, Error> {
        let note = NoteRepository::new(self.db)
            .get_by_id(note_id)
            .await?
            .filter(|note| note.company_id == user.company_id)
            .ok_or(OnboardingError::NoteNotFound(note_id))?;

        if note.author_id != user.user_id {
            return Err(OnboardingError::NotNoteAuthor {
                user_id: user.user_id,
                note_id,
            }
            .into());
        }

        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    mod update_note {
        use crewline_test_utils::prelude::*;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::{
                onboarding::{CreateNoteDto, UpdateNoteDto},
                session::user::SessionUser,
            },
            service::onboarding::note::NoteService,
        };

        /// Expect an update by a non-author to fail and leave the note unchanged
        #[tokio::test]
        async fn rejects_non_author() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let author = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let other = seed
                .insert_user(company.id, "Bob", "Ross", "bob@acme.test", "recruiter")
                .await?;
            let hire = seed.insert_new_hire(&company, &author).await?;

            let note_service = NoteService::new(&test.state.db);
            let note = note_service
                .add_note(
                    SessionUser {
                        user_id: author.id,
                        company_id: company.id,
                    },
                    hire.id,
                    CreateNoteDto {
                        title: None,
                        content: "First day went well".to_string(),
                    },
                )
                .await?;

            let result = note_service
                .update_note(
                    SessionUser {
                        user_id: other.id,
                        company_id: company.id,
                    },
                    note.id,
                    UpdateNoteDto {
                        content: Some("Rewritten".to_string()),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::NotNoteAuthor { .. }))
            ));

            let notes = note_service.get_notes(hire.id, company.id).await?;
            assert_eq!(notes[0].content, "First day went well");

            Ok(())
        }
    }

    mod delete_note {
        use crewline_test_utils::prelude::*;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::{onboarding::CreateNoteDto, session::user::SessionUser},
            service::onboarding::note::NoteService,
        };

        /// Expect a delete by a non-author to fail with an authorization error
        #[tokio::test]
        async fn rejects_non_author() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let author = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let other = seed
                .insert_user(company.id, "Bob", "Ross", "bob@acme.test", "recruiter")
                .await?;
            let hire = seed.insert_new_hire(&company, &author).await?;

            let note_service = NoteService::new(&test.state.db);
            let note = note_service
                .add_note(
                    SessionUser {
                        user_id: author.id,
                        company_id: company.id,
                    },
                    hire.id,
                    CreateNoteDto {
                        title: None,
                        content: "Badge ordered".to_string(),
                    },
                )
                .await?;

            let result = note_service
                .delete_note(
                    SessionUser {
                        user_id: other.id,
                        company_id: company.id,
                    },
                    note.id,
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::NotNoteAuthor { .. }))
            ));
            assert_eq!(note_service.get_notes(hire.id, company.id).await?.len(), 1);

            Ok(())
        }
    }

    mod get_notes {
        use crewline_test_utils::prelude::*;

        use crate::{
            model::{onboarding::CreateNoteDto, session::user::SessionUser},
            service::onboarding::note::NoteService,
        };

        /// Expect notes newest-first with the author's public profile attached
        #[tokio::test]
        async fn lists_newest_first_with_author_profile() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let author = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &author).await?;

            let actor = SessionUser {
                user_id: author.id,
                company_id: company.id,
            };

            let note_service = NoteService::new(&test.state.db);
            note_service
                .add_note(
                    actor,
                    hire.id,
                    CreateNoteDto {
                        title: None,
                        content: "First".to_string(),
                    },
                )
                .await?;
            note_service
                .add_note(
                    actor,
                    hire.id,
                    CreateNoteDto {
                        title: None,
                        content: "Second".to_string(),
                    },
                )
                .await?;

            let notes = note_service.get_notes(hire.id, company.id).await?;

            assert_eq!(notes.len(), 2);
            assert_eq!(notes[0].content, "Second");
            assert_eq!(notes[1].content, "First");
            assert_eq!(notes[0].author.full_name, "Ada Lovelace");
            assert_eq!(notes[0].author.email, "ada@acme.test");

            Ok(())
        }
    }
}
