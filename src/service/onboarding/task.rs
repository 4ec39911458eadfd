use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::status::TaskStatus;

use crate::{
    data::onboarding::{
        new_hire::NewHireRepository,
        task::{TaskCreate, TaskRepository, TaskUpdate},
        template::TemplateRepository,
    },
    error::{onboarding::OnboardingError, Error},
    model::{
        onboarding::{ApplyTemplateDto, CreateTaskDto, OnboardingTaskDto, UpdateTaskDto},
        session::user::SessionUser,
    },
    service::onboarding::progress,
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    /// Creates a new instance of [`TaskService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a template (or an explicit task list) to a new hire.
    ///
    /// With explicit `tasks` each is created verbatim as a standalone task.
    /// Without them the template's catalog tasks are cloned in sequence
    /// order, the single `due_date` applied to all; an empty template is
    /// rejected in that mode. Created tasks start `pending` and progress is
    /// recalculated before the transaction commits.
    pub async fn apply_template(
        &self,
        company_id: i32,
        dto: ApplyTemplateDto,
    ) -> Result<Vec<OnboardingTaskDto>, Error> {
        let new_hire = NewHireRepository::new(self.db)
            .get_by_id(dto.new_hire_id, company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(dto.new_hire_id))?;

        let template = TemplateRepository::new(self.db)
            .get_by_id(dto.template_id, company_id)
            .await?
            .ok_or(OnboardingError::TemplateNotFound(dto.template_id))?;

        if let Some(tasks) = &dto.tasks {
            if tasks.iter().any(|task| task.title.trim().is_empty()) {
                return Err(
                    OnboardingError::Validation("Task title is required".to_string()).into(),
                );
            }
        }

        let txn = self.db.begin().await?;

        let task_repository = TaskRepository::new(&txn);

        match dto.tasks {
            Some(tasks) => {
                for task in tasks {
                    task_repository
                        .create(
                            new_hire.id,
                            TaskCreate {
                                task_template_id: None,
                                title: task.title,
                                description: task.description,
                                due_date: task.due_date,
                                assigned_to: task.assigned_to,
                                priority: task.priority,
                                category: task.category,
                            },
                        )
                        .await?;
                }
            }
            None => {
                let mapping = TemplateRepository::new(&txn).get_tasks(template.id).await?;

                if mapping.is_empty() {
                    return Err(OnboardingError::EmptyTemplate(template.id).into());
                }

                for (map, task_template) in mapping {
                    let Some(task_template) = task_template else {
                        continue;
                    };

                    task_repository
                        .create(
                            new_hire.id,
                            TaskCreate {
                                task_template_id: Some(map.task_template_id),
                                title: task_template.title,
                                description: task_template.description,
                                due_date: Some(dto.due_date),
                                assigned_to: None,
                                priority: None,
                                category: None,
                            },
                        )
                        .await?;
                }
            }
        }

        let tasks = task_repository.get_many_by_new_hire_id(new_hire.id).await?;

        progress::recalculate(&txn, new_hire).await?;

        txn.commit().await?;

        Ok(tasks.into_iter().map(OnboardingTaskDto::from).collect())
    }

    pub async fn create_task(
        &self,
        company_id: i32,
        dto: CreateTaskDto,
    ) -> Result<OnboardingTaskDto, Error> {
        let new_hire = NewHireRepository::new(self.db)
            .get_by_id(dto.new_hire_id, company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(dto.new_hire_id))?;

        if dto.title.trim().is_empty() {
            return Err(OnboardingError::Validation("Task title is required".to_string()).into());
        }

        let txn = self.db.begin().await?;

        let task = TaskRepository::new(&txn)
            .create(
                new_hire.id,
                TaskCreate {
                    task_template_id: None,
                    title: dto.title,
                    description: dto.description,
                    due_date: dto.due_date,
                    assigned_to: dto.assigned_to,
                    priority: dto.priority,
                    category: dto.category,
                },
            )
            .await?;

        progress::recalculate(&txn, new_hire).await?;

        txn.commit().await?;

        Ok(task.into())
    }

    pub async fn get_tasks(
        &self,
        new_hire_id: i32,
        company_id: i32,
    ) -> Result<Vec<OnboardingTaskDto>, Error> {
        NewHireRepository::new(self.db)
            .get_by_id(new_hire_id, company_id)
            .await?
            .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?;

        let tasks = TaskRepository::new(self.db)
            .get_many_by_new_hire_id(new_hire_id)
            .await?;

        Ok(tasks.into_iter().map(OnboardingTaskDto::from).collect())
    }

    /// Updates a task.
    ///
    /// Status transitions are assignee-only: the effective assignee after
    /// this update must be the acting user, which also lets an assignment
    /// and a transition land in a single request. Completing stamps
    /// `completed_by`/`completed_date` with the status; leaving `completed`
    /// clears them. The owning hire is recalculated, and both owners when
    /// the task moves between hires.
    pub async fn update_task(
        &self,
        user: SessionUser,
        task_id: i32,
        dto: UpdateTaskDto,
    ) -> Result<OnboardingTaskDto, Error> {
        let task = TaskRepository::new(self.db)
            .get_by_id(task_id)
            .await?
            .ok_or(OnboardingError::TaskNotFound(task_id))?;

        let new_hire_repository = NewHireRepository::new(self.db);

        // Cross-tenant tasks behave as not-found
        let owner = new_hire_repository
            .get_by_id(task.new_hire_id, user.company_id)
            .await?
            .ok_or(OnboardingError::TaskNotFound(task_id))?;

        let target = match dto.new_hire_id {
            Some(new_hire_id) if new_hire_id != task.new_hire_id => Some(
                new_hire_repository
                    .get_by_id(new_hire_id, user.company_id)
                    .await?
                    .ok_or(OnboardingError::NewHireNotFound(new_hire_id))?,
            ),
            _ => None,
        };

        let mut update = TaskUpdate {
            new_hire_id: dto.new_hire_id,
            title: dto.title,
            description: dto.description,
            due_date: dto.due_date,
            assigned_to: dto.assigned_to,
            priority: dto.priority,
            category: dto.category,
            ..Default::default()
        };

        if let Some(status) = dto.status {
            let new_status = status.parse::<TaskStatus>().map_err(|_| {
                OnboardingError::Validation(format!("Unknown task status '{status}'"))
            })?;

            if new_status != task.status {
                let assignee = update.assigned_to.or(task.assigned_to);

                if assignee != Some(user.user_id) {
                    return Err(OnboardingError::NotTaskAssignee {
                        user_id: user.user_id,
                        task_id,
                    }
                    .into());
                }

                if new_status == TaskStatus::Completed {
                    update.completed_by = Some(user.user_id);
                    update.completed_date = Some(Utc::now().naive_utc());
                } else if task.status == TaskStatus::Completed {
                    update.clear_completion = true;
                }
            }

            update.status = Some(new_status);
        }

        let txn = self.db.begin().await?;

        let task = TaskRepository::new(&txn).update(task, update).await?;

        progress::recalculate(&txn, owner).await?;
        if let Some(target) = target {
            progress::recalculate(&txn, target).await?;
        }

        txn.commit().await?;

        Ok(task.into())
    }

    pub async fn delete_task(&self, user: SessionUser, task_id: i32) -> Result<(), Error> {
        let task = TaskRepository::new(self.db)
            .get_by_id(task_id)
            .await?
            .ok_or(OnboardingError::TaskNotFound(task_id))?;

        let owner = NewHireRepository::new(self.db)
            .get_by_id(task.new_hire_id, user.company_id)
            .await?
            .ok_or(OnboardingError::TaskNotFound(task_id))?;

        let txn = self.db.begin().await?;

        TaskRepository::new(&txn).delete(task.id).await?;
        progress::recalculate(&txn, owner).await?;

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    mod apply_template {
        use chrono::{Days, Utc};
        use crewline_test_utils::prelude::*;
        use entity::status::TaskStatus;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::onboarding::{
                ApplyTemplateDto, NewTaskDto, ReplaceTemplateTasksDto, TemplateTaskInputDto,
            },
            service::onboarding::{task::TaskService, template::TemplateService},
        };

        /// Expect template tasks cloned pending with the uniform due date
        #[tokio::test]
        async fn clones_template_tasks() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &user).await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;

            let template_service = TemplateService::new(&test.state.db);
            template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: vec![
                            TemplateTaskInputDto {
                                task_template_id: None,
                                title: Some("Laptop".to_string()),
                                description: None,
                            },
                            TemplateTaskInputDto {
                                task_template_id: None,
                                title: Some("Badge".to_string()),
                                description: None,
                            },
                        ],
                    },
                )
                .await?;

            let due_date = Utc::now().date_naive() + Days::new(30);
            let task_service = TaskService::new(&test.state.db);
            let tasks = task_service
                .apply_template(
                    company.id,
                    ApplyTemplateDto {
                        new_hire_id: hire.id,
                        template_id: template.id,
                        due_date,
                        tasks: None,
                    },
                )
                .await?;

            assert_eq!(tasks.len(), 2);
            for task in &tasks {
                assert_eq!(task.status, TaskStatus::Pending.to_string());
                assert_eq!(task.due_date, Some(due_date));
                assert!(task.task_template_id.is_some());
            }

            Ok(())
        }

        /// Expect an empty template to be rejected when no explicit tasks are given
        #[tokio::test]
        async fn rejects_empty_template() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &user).await?;
            let template = seed.insert_template(company.id, "Empty", user.id).await?;

            let task_service = TaskService::new(&test.state.db);
            let result = task_service
                .apply_template(
                    company.id,
                    ApplyTemplateDto {
                        new_hire_id: hire.id,
                        template_id: template.id,
                        due_date: Utc::now().date_naive(),
                        tasks: None,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::EmptyTemplate(_)))
            ));

            Ok(())
        }

        /// Expect an explicit task list with a blank title to fail validation
        #[tokio::test]
        async fn rejects_blank_explicit_task_title() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &user).await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;

            let task_service = TaskService::new(&test.state.db);
            let result = task_service
                .apply_template(
                    company.id,
                    ApplyTemplateDto {
                        new_hire_id: hire.id,
                        template_id: template.id,
                        due_date: Utc::now().date_naive(),
                        tasks: Some(vec![NewTaskDto {
                            title: "   ".to_string(),
                            description: None,
                            due_date: None,
                            assigned_to: None,
                            priority: None,
                            category: None,
                        }]),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::Validation(_)))
            ));

            let tasks = task_service.get_tasks(hire.id, company.id).await?;
            assert!(tasks.is_empty());

            Ok(())
        }
    }

    mod update_task {
        use chrono::{Days, Utc};
        use crewline_test_utils::prelude::*;
        use entity::status::{OnboardingStatus, TaskStatus};
        use std::sync::Arc;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::{
                onboarding::{
                    ApplyTemplateDto, ReplaceTemplateTasksDto, TemplateTaskInputDto, UpdateTaskDto,
                },
                session::user::SessionUser,
            },
            service::{
                notification::{LogWelcomeNotifier, WelcomeNotifier},
                onboarding::{
                    new_hire::NewHireService, task::TaskService, template::TemplateService,
                },
            },
            test_support,
        };

        /// Expect a status change by a user who is not the assignee to fail
        #[tokio::test]
        async fn rejects_non_assignee_status_change() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let assignee = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let other = seed
                .insert_user(company.id, "Bob", "Ross", "bob@acme.test", "recruiter")
                .await?;
            let hire = seed.insert_new_hire(&company, &assignee).await?;
            let task = seed
                .task(hire.id, "Laptop")
                .assigned_to(assignee.id)
                .insert()
                .await?;

            let task_service = TaskService::new(&test.state.db);
            let result = task_service
                .update_task(
                    SessionUser {
                        user_id: other.id,
                        company_id: company.id,
                    },
                    task.id,
                    UpdateTaskDto {
                        status: Some("completed".to_string()),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::NotTaskAssignee { .. }))
            ));

            Ok(())
        }

        /// Expect completing to stamp completed_by/completed_date and
        /// un-completing to clear them
        #[tokio::test]
        async fn stamps_and_clears_completion() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &user).await?;
            let task = seed
                .task(hire.id, "Laptop")
                .assigned_to(user.id)
                .insert()
                .await?;

            let actor = SessionUser {
                user_id: user.id,
                company_id: company.id,
            };

            let task_service = TaskService::new(&test.state.db);
            let task_dto = task_service
                .update_task(
                    actor,
                    task.id,
                    UpdateTaskDto {
                        status: Some("completed".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(task_dto.completed_by, Some(user.id));
            assert!(task_dto.completed_date.is_some());

            let task_dto = task_service
                .update_task(
                    actor,
                    task.id,
                    UpdateTaskDto {
                        status: Some("in-progress".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(task_dto.status, TaskStatus::InProgress.to_string());
            assert!(task_dto.completed_by.is_none());
            assert!(task_dto.completed_date.is_none());

            Ok(())
        }

        /// Expect the full initiate, apply, complete scenario to move
        /// progress 0 -> 33 -> 100
        #[tokio::test]
        async fn full_scenario_progress() -> Result<(), TestError> {
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
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;

            let actor = SessionUser {
                user_id: user.id,
                company_id: company.id,
            };

            let notifier: Arc<dyn WelcomeNotifier> = Arc::new(LogWelcomeNotifier);
            let new_hire_service = NewHireService::new(&test.state.db, &notifier);
            let new_hire = new_hire_service
                .initiate_onboarding(actor, test_support::initiate_dto(candidate.id, job.id))
                .await?;

            assert_eq!(new_hire.status, OnboardingStatus::NotStarted.to_string());
            assert_eq!(new_hire.progress, 0);

            let template_service = TemplateService::new(&test.state.db);
            template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: ["Laptop", "Badge", "Accounts"]
                            .iter()
                            .map(|title| TemplateTaskInputDto {
                                task_template_id: None,
                                title: Some(title.to_string()),
                                description: None,
                            })
                            .collect(),
                    },
                )
                .await?;

            let task_service = TaskService::new(&test.state.db);
            let tasks = task_service
                .apply_template(
                    company.id,
                    ApplyTemplateDto {
                        new_hire_id: new_hire.id,
                        template_id: template.id,
                        due_date: Utc::now().date_naive() + Days::new(30),
                        tasks: None,
                    },
                )
                .await?;
            assert_eq!(tasks.len(), 3);

            // Assign and complete the first task in one update
            task_service
                .update_task(
                    actor,
                    tasks[0].id,
                    UpdateTaskDto {
                        assigned_to: Some(user.id),
                        status: Some("completed".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            let hire = new_hire_service
                .get_new_hire(new_hire.id, company.id)
                .await?;
            assert_eq!(hire.progress, 33);
            assert_eq!(hire.status, OnboardingStatus::InProgress.to_string());

            for task in &tasks[1..] {
                task_service
                    .update_task(
                        actor,
                        task.id,
                        UpdateTaskDto {
                            assigned_to: Some(user.id),
                            status: Some("completed".to_string()),
                            ..Default::default()
                        },
                    )
                    .await?;
            }

            let hire = new_hire_service
                .get_new_hire(new_hire.id, company.id)
                .await?;
            assert_eq!(hire.progress, 100);
            assert_eq!(hire.status, OnboardingStatus::Completed.to_string());

            Ok(())
        }
    }

    mod delete_task {
        use crewline_test_utils::prelude::*;
        use entity::status::OnboardingStatus;

        use crate::{
            model::session::user::SessionUser,
            service::onboarding::task::TaskService,
        };

        /// Expect deleting the last task to return the hire to not-started
        #[tokio::test]
        async fn recalculates_owner_after_delete() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &user).await?;
            let task = seed.task(hire.id, "Laptop").insert().await?;

            let task_service = TaskService::new(&test.state.db);
            task_service
                .delete_task(
                    SessionUser {
                        user_id: user.id,
                        company_id: company.id,
                    },
                    task.id,
                )
                .await?;

            let hire = crate::data::onboarding::new_hire::NewHireRepository::new(&test.state.db)
                .get_by_id(hire.id, company.id)
                .await?
                .unwrap();
            assert_eq!(hire.status, OnboardingStatus::NotStarted);
            assert_eq!(hire.progress, 0);

            Ok(())
        }
    }
}
