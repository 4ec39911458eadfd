use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::warn;

use crate::{
    data::{
        app_user::UserRepository,
        candidate::CandidateRepository,
        job::JobRepository,
        onboarding::{
            document::NewHireDocumentRepository, new_hire::NewHireRepository,
            note::NoteRepository, task::TaskRepository,
        },
    },
    error::{onboarding::OnboardingError, Error},
    model::{
        onboarding::{InitiateOnboardingDto, NewHireDto, UpdateNewHireDto},
        session::user::SessionUser,
    },
    service::notification::WelcomeNotifier,
};

pub struct NewHireService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Arc<dyn WelcomeNotifier>,
}

impl<'a> NewHireService<'a> {
    /// Creates a new instance of [`NewHireService`]
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Arc<dyn WelcomeNotifier>) -> Self {
        Self { db, notifier }
    }

    /// Converts a candidate into a new hire.
    ///
    /// The tenant is resolved through the job being onboarded into. The
    /// record starts in the initial derived state and the welcome
    /// notification is fired best-effort afterwards: its failure is logged
    /// and swallowed, the row persists regardless.
    pub async fn initiate_onboarding(
        &self,
        user: SessionUser,
        dto: InitiateOnboardingDto,
    ) -> Result<NewHireDto, Error> {
        let job = JobRepository::new(self.db)
            .get_by_id(dto.job_id, user.company_id)
            .await?
            .ok_or(OnboardingError::JobNotFound(dto.job_id))?;

        CandidateRepository::new(self.db)
            .get_by_id(dto.candidate_id, job.company_id)
            .await?
            .ok_or(OnboardingError::CandidateNotFound(dto.candidate_id))?;

        let new_hire = NewHireRepository::new(self.db)
            .create(job.company_id, &dto)
            .await?;

        if let Err(err) = self.notifier.send_welcome(&new_hire).await {
            warn!("{}", err);
        }

        Ok(new_hire.into())
    }

    pub async fn get_new_hires(&self, company_id: i32) -> Result<Vec<NewHireDto>, Error> {
        let new_hires = NewHireRepository::new(self.db)
            .get_all_by_company_id(company_id)
            .await?;

        Ok(new_hires.into_iter().map(NewHireDto::from).collect())
    }

    pub async fn get_new_hire(&self, new_hire_id: i32, company_id: i32) -> Result<NewHireDto, Error> {
        let new_hire = NewHireRepository::new(self.db)
            .get_by_id(new_hire_id, company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        Ok(new_hire.into())
    }

    pub async fn update_new_hire(
        &self,
        new_hire_id: i32,
        company_id: i32,
        dto: UpdateNewHireDto,
    ) -> Result<NewHireDto, Error> {
        let new_hire_repository = NewHireRepository::new(self.db);

        let new_hire = new_hire_repository
            .get_by_id(new_hire_id, company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        let new_hire = new_hire_repository.update(new_hire, dto).await?;

        Ok(new_hire.into())
    }

    /// Deletes a new hire and everything attached to it.
    ///
    /// Admin-only. Tasks, note links with their notes, and document links
    /// are removed with the hire in one transaction.
    pub async fn delete_new_hire(&self, user: SessionUser, new_hire_id: i32) -> Result<(), Error> {
        let actor = UserRepository::new(self.db)
            .get_by_id(user.user_id)
            .await?
            .ok_or(crate::error::auth::AuthError::UserNotInDatabase(user.user_id))?;

        if actor.role != "admin" {
            return Err(OnboardingError::ActionNotPermitted(user.user_id).into());
        }

        let new_hire = NewHireRepository::new(self.db)
            .get_by_id(new_hire_id, user.company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        let txn = self.db.begin().await?;

        TaskRepository::new(&txn)
            .delete_many_by_new_hire_id(new_hire.id)
            .await?;
        NoteRepository::new(&txn)
            .delete_many_by_new_hire_id(new_hire.id)
            .await?;
        NewHireDocumentRepository::new(&txn)
            .delete_many_by_new_hire_id(new_hire.id)
            .await?;
        NewHireRepository::new(&txn).delete(new_hire.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::service::notification::{NotifyError, WelcomeNotifier};

    struct FailingNotifier;

    #[async_trait]
    impl WelcomeNotifier for FailingNotifier {
        async fn send_welcome(
            &self,
            _new_hire: &entity::new_hire::Model,
        ) -> Result<(), NotifyError> {
            Err(NotifyError("smtp unreachable".to_string()))
        }
    }

    fn failing_notifier() -> Arc<dyn WelcomeNotifier> {
        Arc::new(FailingNotifier)
    }

    mod initiate_onboarding {
        use crewline_test_utils::prelude::*;
        use entity::status::OnboardingStatus;
        use std::sync::Arc;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::session::user::SessionUser,
            service::{
                notification::{LogWelcomeNotifier, WelcomeNotifier},
                onboarding::new_hire::{tests::failing_notifier, NewHireService},
            },
            test_support,
        };

        /// Expect the hire created in the job's tenant, not-started at zero progress
        #[tokio::test]
        async fn creates_hire_in_jobs_tenant() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let job = seed.insert_job(company.id, "Engineer", "Engineering").await?;
            let candidate = seed
                .insert_candidate(company.id, "Grace", "Hopper", "grace@acme.test")
                .await?;

            let notifier: Arc<dyn WelcomeNotifier> = Arc::new(LogWelcomeNotifier);
            let new_hire_service = NewHireService::new(&test.state.db, &notifier);

            let new_hire = new_hire_service
                .initiate_onboarding(
                    SessionUser {
                        user_id: user.id,
                        company_id: company.id,
                    },
                    test_support::initiate_dto(candidate.id, job.id),
                )
                .await?;

            assert_eq!(new_hire.company_id, company.id);
            assert_eq!(new_hire.status, OnboardingStatus::NotStarted.to_string());
            assert_eq!(new_hire.progress, 0);

            Ok(())
        }

        /// Expect the hire to persist when the welcome notification fails
        #[tokio::test]
        async fn persists_hire_when_notification_fails() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let job = seed.insert_job(company.id, "Engineer", "Engineering").await?;
            let candidate = seed
                .insert_candidate(company.id, "Grace", "Hopper", "grace@acme.test")
                .await?;

            let notifier = failing_notifier();
            let new_hire_service = NewHireService::new(&test.state.db, &notifier);

            let new_hire = new_hire_service
                .initiate_onboarding(
                    SessionUser {
                        user_id: user.id,
                        company_id: company.id,
                    },
                    test_support::initiate_dto(candidate.id, job.id),
                )
                .await?;

            let stored = new_hire_service
                .get_new_hire(new_hire.id, company.id)
                .await?;
            assert_eq!(stored.id, new_hire.id);

            Ok(())
        }

        /// Expect 404-mapped error when the job does not exist in the tenant
        #[tokio::test]
        async fn rejects_unknown_job() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let candidate = seed
                .insert_candidate(company.id, "Grace", "Hopper", "grace@acme.test")
                .await?;

            let notifier: std::sync::Arc<dyn WelcomeNotifier> =
                std::sync::Arc::new(LogWelcomeNotifier);
            let new_hire_service = NewHireService::new(&test.state.db, &notifier);

            let result = new_hire_service
                .initiate_onboarding(
                    SessionUser {
                        user_id: user.id,
                        company_id: company.id,
                    },
                    test_support::initiate_dto(candidate.id, 99_999),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::JobNotFound(_)))
            ));

            Ok(())
        }
    }

    mod delete_new_hire {
        use crewline_test_utils::prelude::*;
        use sea_orm::EntityTrait;
        use std::sync::Arc;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::session::user::SessionUser,
            service::{
                notification::{LogWelcomeNotifier, WelcomeNotifier},
                onboarding::new_hire::NewHireService,
            },
        };

        /// Expect a non-admin actor to be rejected without touching the hire
        #[tokio::test]
        async fn rejects_non_admin_actor() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let admin = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let recruiter = seed
                .insert_user(company.id, "Bob", "Ross", "bob@acme.test", "recruiter")
                .await?;
            let hire = seed.insert_new_hire(&company, &admin).await?;

            let notifier: Arc<dyn WelcomeNotifier> = Arc::new(LogWelcomeNotifier);
            let new_hire_service = NewHireService::new(&test.state.db, &notifier);

            let result = new_hire_service
                .delete_new_hire(
                    SessionUser {
                        user_id: recruiter.id,
                        company_id: company.id,
                    },
                    hire.id,
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::ActionNotPermitted(_)))
            ));
            assert!(new_hire_service.get_new_hire(hire.id, company.id).await.is_ok());

            Ok(())
        }

        /// Expect tasks, notes, and document links removed with the hire
        #[tokio::test]
        async fn cascades_attachments() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let admin = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &admin).await?;
            seed.task(hire.id, "Laptop").insert().await?;

            let notifier: Arc<dyn WelcomeNotifier> = Arc::new(LogWelcomeNotifier);
            let new_hire_service = NewHireService::new(&test.state.db, &notifier);

            new_hire_service
                .delete_new_hire(
                    SessionUser {
                        user_id: admin.id,
                        company_id: company.id,
                    },
                    hire.id,
                )
                .await?;

            let tasks = entity::prelude::OnboardingTask::find()
                .all(&test.state.db)
                .await?;
            assert!(tasks.is_empty());

            let hires = entity::prelude::NewHire::find().all(&test.state.db).await?;
            assert!(hires.is_empty());

            Ok(())
        }
    }
}
