use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::onboarding::{task_template::TaskTemplateRepository, template::TemplateRepository},
    error::{onboarding::OnboardingError, Error},
    model::onboarding::{
        CreateTemplateDto, ReplaceTemplateTasksDto, TemplateDto, TemplateTaskDto, UpdateTemplateDto,
    },
};

pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateService<'a> {
    /// Creates a new instance of [`TemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_template(
        &self,
        company_id: i32,
        created_by: i32,
        dto: CreateTemplateDto,
    ) -> Result<TemplateDto, Error> {
        if dto.name.trim().is_empty() {
            return Err(OnboardingError::Validation("Template name is required".to_string()).into());
        }

        let template = TemplateRepository::new(self.db)
            .create(company_id, dto.name, created_by)
            .await?;

        Ok(template.into())
    }

    pub async fn get_templates(&self, company_id: i32) -> Result<Vec<TemplateDto>, Error> {
        let templates = TemplateRepository::new(self.db)
            .get_all_by_company_id(company_id)
            .await?;

        Ok(templates.into_iter().map(TemplateDto::from).collect())
    }

    pub async fn update_template(
        &self,
        template_id: i32,
        company_id: i32,
        dto: UpdateTemplateDto,
    ) -> Result<TemplateDto, Error> {
        let template_repository = TemplateRepository::new(self.db);

        let template = template_repository
            .get_by_id(template_id, company_id)
            .await?
            .ok_or(OnboardingError::TemplateNotFound(template_id))?;

        let template = template_repository.update_name(template, dto.name).await?;

        Ok(template.into())
    }

    pub async fn delete_template(&self, template_id: i32, company_id: i32) -> Result<(), Error> {
        let template_repository = TemplateRepository::new(self.db);

        let template = template_repository
            .get_by_id(template_id, company_id)
            .await?
            .ok_or(OnboardingError::TemplateNotFound(template_id))?;

        template_repository.delete(template.id).await?;

        Ok(())
    }

    /// Gets a template's ordered task list.
    pub async fn get_template_tasks(
        &self,
        template_id: i32,
        company_id: i32,
    ) -> Result<Vec<TemplateTaskDto>, Error> {
        let template_repository = TemplateRepository::new(self.db);

        let template = template_repository
            .get_by_id(template_id, company_id)
            .await?
            .ok_or(OnboardingError::TemplateNotFound(template_id))?;

        let tasks = template_repository.get_tasks(template.id).await?;

        Ok(tasks
            .into_iter()
            .filter_map(|(map, task_template)| {
                task_template.map(|task_template| TemplateTaskDto {
                    task_template_id: task_template.id,
                    title: task_template.title,
                    description: task_template.description,
                    sequence: map.sequence,
                })
            })
            .collect())
    }

    /// Replaces a template's task list in full.
    ///
    /// Each input item either references an existing catalog entry by
    /// `task_template_id` or carries an inline `title`/`description` that
    /// creates one. The clear, the catalog inserts, and the reinsert all run
    /// in one transaction: any failure leaves the prior mapping intact.
    pub async fn replace_template_tasks(
        &self,
        template_id: i32,
        company_id: i32,
        dto: ReplaceTemplateTasksDto,
    ) -> Result<Vec<TemplateTaskDto>, Error> {
        let template = TemplateRepository::new(self.db)
            .get_by_id(template_id, company_id)
            .await?
            .ok_or(OnboardingError::TemplateNotFound(template_id))?;

        let txn = self.db.begin().await?;

        let task_template_repository = TaskTemplateRepository::new(&txn);

        let mut task_template_ids = Vec::with_capacity(dto.tasks.len());
        for item in dto.tasks {
            match item.task_template_id {
                Some(task_template_id) => task_template_ids.push(task_template_id),
                None => {
                    let title = item.title.filter(|title| !title.trim().is_empty()).ok_or(
                        OnboardingError::Validation(
                            "Template task needs a task_template_id or a title".to_string(),
                        ),
                    )?;

                    let created = task_template_repository
                        .create(company_id, title, item.description)
                        .await?;

                    task_template_ids.push(created.id);
                }
            }
        }

        TemplateRepository::new(&txn)
            .replace_tasks(template, task_template_ids)
            .await?;

        txn.commit().await?;

        self.get_template_tasks(template_id, company_id).await
    }
}

#[cfg(test)]
mod tests {
    mod replace_template_tasks {
        use crewline_test_utils::prelude::*;

        use crate::{
            model::onboarding::{ReplaceTemplateTasksDto, TemplateTaskInputDto},
            service::onboarding::template::TemplateService,
        };

        /// Expect an A,B mapping replaced by inline C to yield exactly C at sequence 1
        #[tokio::test]
        async fn replaces_mapping_with_inline_task() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let a = seed.insert_task_template(company.id, "A", None).await?;
            let b = seed.insert_task_template(company.id, "B", None).await?;

            let template_service = TemplateService::new(&test.state.db);
            template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: vec![
                            TemplateTaskInputDto {
                                task_template_id: Some(a.id),
                                title: None,
                                description: None,
                            },
                            TemplateTaskInputDto {
                                task_template_id: Some(b.id),
                                title: None,
                                description: None,
                            },
                        ],
                    },
                )
                .await?;

            let tasks = template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: vec![TemplateTaskInputDto {
                            task_template_id: None,
                            title: Some("C".to_string()),
                            description: None,
                        }],
                    },
                )
                .await?;

            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].title, "C");
            assert_eq!(tasks[0].sequence, 1);

            let templates = template_service.get_templates(company.id).await?;
            assert_eq!(templates[0].item_count, 1);

            Ok(())
        }

        /// Expect a failed replacement to leave the prior mapping unchanged
        #[tokio::test]
        async fn rolls_back_on_failure() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let a = seed.insert_task_template(company.id, "A", None).await?;

            let template_service = TemplateService::new(&test.state.db);
            template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: vec![TemplateTaskInputDto {
                            task_template_id: Some(a.id),
                            title: None,
                            description: None,
                        }],
                    },
                )
                .await?;

            // References a catalog entry that does not exist, so the insert
            // step fails after the mapping has already been cleared
            let result = template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: vec![TemplateTaskInputDto {
                            task_template_id: Some(99_999),
                            title: None,
                            description: None,
                        }],
                    },
                )
                .await;
            assert!(result.is_err());

            let tasks = template_service
                .get_template_tasks(template.id, company.id)
                .await?;
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].title, "A");

            Ok(())
        }

        /// Expect an empty replacement to empty the mapping and zero item_count
        #[tokio::test]
        async fn accepts_empty_task_list() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let a = seed.insert_task_template(company.id, "A", None).await?;

            let template_service = TemplateService::new(&test.state.db);
            template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto {
                        tasks: vec![TemplateTaskInputDto {
                            task_template_id: Some(a.id),
                            title: None,
                            description: None,
                        }],
                    },
                )
                .await?;

            let tasks = template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    ReplaceTemplateTasksDto { tasks: Vec::new() },
                )
                .await?;
            assert!(tasks.is_empty());

            let templates = template_service.get_templates(company.id).await?;
            assert_eq!(templates[0].item_count, 0);

            Ok(())
        }
    }

    mod update_template {
        use crewline_test_utils::prelude::*;

        use crate::{
            error::{onboarding::OnboardingError, Error},
            model::onboarding::UpdateTemplateDto,
            service::onboarding::template::TemplateService,
        };

        /// Expect 404-mapped error for a template in another tenant
        #[tokio::test]
        async fn rejects_cross_tenant_update() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let other_company = seed.insert_company("Globex").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;

            let template_service = TemplateService::new(&test.state.db);
            let result = template_service
                .update_template(
                    template.id,
                    other_company.id,
                    UpdateTemplateDto {
                        name: "Sales".to_string(),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::OnboardingError(OnboardingError::TemplateNotFound(_)))
            ));

            Ok(())
        }
    }
}
