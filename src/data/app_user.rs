use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Fetches the users for a set of IDs, used to enrich listings with
    /// author/linker profiles in one query.
    pub async fn get_many_by_ids(
        &self,
        user_ids: Vec<i32>,
    ) -> Result<Vec<entity::app_user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_by_email {
        use crewline_test_utils::prelude::*;

        use crate::data::app_user::UserRepository;

        /// Expect Ok(Some(_)) for a seeded user's email
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let company = test.seed().insert_company("Acme").await?;
            let user = test
                .seed()
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;

            let user_repo = UserRepository::new(&test.state.db);
            let result = user_repo.get_by_email("ada@acme.test").await?;

            assert_eq!(result.map(|u| u.id), Some(user.id));

            Ok(())
        }

        /// Expect Ok(None) for an unknown email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;

            let user_repo = UserRepository::new(&test.state.db);
            let result = user_repo.get_by_email("nobody@acme.test").await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}
