use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        app_user::UserRepository,
        document::DocumentRepository,
        onboarding::{document::NewHireDocumentRepository, new_hire::NewHireRepository},
    },
    error::{auth::AuthError, onboarding::OnboardingError, Error},
    model::{
        onboarding::{AddDocumentDto, NewHireDocumentDto, UserProfileDto},
        session::user::SessionUser,
    },
};

/// Whether a user may manage (and read) a new hire's document links: same
/// tenant, and either an admin or the hire's manager.
pub fn can_manage_new_hire_documents(
    actor: &entity::app_user::Model,
    new_hire: &entity::new_hire::Model,
) -> bool {
    actor.company_id == new_hire.company_id
        && (actor.role == "admin" || new_hire.manager_id == Some(actor.id))
}

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    /// Creates a new instance of [`DocumentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links an existing document to a new hire.
    pub async fn add_document(
        &self,
        user: SessionUser,
        new_hire_id: i32,
        dto: AddDocumentDto,
    ) -> Result<NewHireDocumentDto, Error> {
        let (new_hire, actor) = self.authorize(user, new_hire_id).await?;

        let document = DocumentRepository::new(self.db)
            .get_by_id(dto.document_id, user.company_id)
            .await?
            .ok_or(OnboardingError::DocumentNotFound(dto.document_id))?;

        let link = NewHireDocumentRepository::new(self.db)
            .create(new_hire.id, document.id, user.user_id)
            .await?;

        Ok(NewHireDocumentDto {
            id: link.id,
            new_hire_id: link.new_hire_id,
            document: document.into(),
            added_by_user: actor.into(),
            added_at: link.created_at,
        })
    }

    /// Gets a new hire's document links, each enriched with the document
    /// and the linking user's public profile.
    pub async fn get_documents(
        &self,
        user: SessionUser,
        new_hire_id: i32,
    ) -> Result<Vec<NewHireDocumentDto>, Error> {
        let (new_hire, _) = self.authorize(user, new_hire_id).await?;

        let links = NewHireDocumentRepository::new(self.db)
            .get_many_by_new_hire_id(new_hire.id)
            .await?;

        let adder_ids: Vec<i32> = links.iter().map(|(link, _)| link.added_by).collect();

        let adders: HashMap<i32, UserProfileDto> = UserRepository::new(self.db)
            .get_many_by_ids(adder_ids)
            .await?
            .into_iter()
            .map(|adder| (adder.id, adder.into()))
            .collect();

        Ok(links
            .into_iter()
            .filter_map(|(link, document)| {
                let document = document?;
                let added_by_user = adders.get(&link.added_by)?.clone();

                Some(NewHireDocumentDto {
                    id: link.id,
                    new_hire_id: link.new_hire_id,
                    document: document.into(),
                    added_by_user,
                    added_at: link.created_at,
                })
            })
            .collect())
    }

    /// Removes the link between a new hire and a document.
    pub async fn remove_document(
        &self,
        user: SessionUser,
        new_hire_id: i32,
        document_id: i32,
    ) -> Result<(), Error> {
        let (new_hire, _) = self.authorize(user, new_hire_id).await?;

        let result = NewHireDocumentRepository::new(self.db)
            .delete(new_hire.id, document_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(OnboardingError::DocumentNotFound(document_id).into());
        }

        Ok(())
    }

    /// Evaluates the document-management gate before any data access.
    async fn authorize(
        &self,
        user: SessionUser,
        new_hire_id: i32,
    ) -> Result<(entity::new_hire::Model, entity::app_user::Model), Error> {
        let new_hire = NewHireRepository::new(self.db)
            .get_by_id(new_hire_id, user.company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        let actor = UserRepository::new(self.db)
            .get_by_id(user.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.user_id))?;

        if !can_manage_new_hire_documents(&actor, &new_hire) {
            return Err(OnboardingError::DocumentAccessDenied {
                user_id: user.user_id,
                new_hire_id,
            }
            .into());
        }

        Ok((new_hire, actor))
    }
}
