use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::onboarding::{task_template::TaskTemplateRepository, template::TemplateRepository},
    error::{onboarding::OnboardingError, Error},
    model::onboarding::{CreateTaskTemplateDto, TaskTemplateDto, UpdateTaskTemplateDto},
};

pub struct TaskTemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskTemplateService<'a> {
    /// Creates a new instance of [`TaskTemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_task_template(
        &self,
        company_id: i32,
        dto: CreateTaskTemplateDto,
    ) -> Result<TaskTemplateDto, Error> {
        if dto.title.trim().is_empty() {
            return Err(
                OnboardingError::Validation("Task template title is required".to_string()).into(),
            );
        }

        let task_template = TaskTemplateRepository::new(self.db)
            .create(company_id, dto.title, dto.description)
            .await?;

        Ok(task_template.into())
    }

    pub async fn get_task_templates(&self, company_id: i32) -> Result<Vec<TaskTemplateDto>, Error> {
        let task_templates = TaskTemplateRepository::new(self.db)
            .get_all_by_company_id(company_id)
            .await?;

        Ok(task_templates
            .into_iter()
            .map(TaskTemplateDto::from)
            .collect())
    }

    pub async fn update_task_template(
        &self,
        task_template_id: i32,
        company_id: i32,
        dto: UpdateTaskTemplateDto,
    ) -> Result<TaskTemplateDto, Error> {
        let task_template_repository = TaskTemplateRepository::new(self.db);

        let task_template = task_template_repository
            .get_by_id(task_template_id, company_id)
            .await?
            .ok_or(OnboardingError::TaskTemplateNotFound(task_template_id))?;

        let task_template = task_template_repository
            .update(task_template, dto.title, dto.description)
            .await?;

        Ok(task_template.into())
    }

    /// Deletes a catalog entry.
    ///
    /// Mapping rows referencing it are removed and the affected templates'
    /// `item_count` is refreshed in the same transaction. Task instances
    /// cloned from the entry are left untouched.
    pub async fn delete_task_template(
        &self,
        task_template_id: i32,
        company_id: i32,
    ) -> Result<(), Error> {
        TaskTemplateRepository::new(self.db)
            .get_by_id(task_template_id, company_id)
            .await?
            .ok_or(OnboardingError::TaskTemplateNotFound(task_template_id))?;

        let txn = self.db.begin().await?;

        let task_template_repository = TaskTemplateRepository::new(&txn);
        let template_repository = TemplateRepository::new(&txn);

        let mut template_ids = task_template_repository
            .get_referencing_template_ids(task_template_id)
            .await?;
        template_ids.sort_unstable();
        template_ids.dedup();

        task_template_repository.delete(task_template_id).await?;

        for template_id in template_ids {
            if let Some(template) = template_repository
                .get_by_id(template_id, company_id)
                .await?
            {
                template_repository.resequence_tasks(template.id).await?;
                template_repository.refresh_item_count(template).await?;
            }
        }

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    mod delete_task_template {
        use crewline_test_utils::prelude::*;

        use crate::service::onboarding::{
            task_template::TaskTemplateService, template::TemplateService,
        };

        /// Expect referencing templates recounted and resequenced after a catalog delete
        #[tokio::test]
        async fn refreshes_referencing_template_counts() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let laptop = seed.insert_task_template(company.id, "Laptop", None).await?;
            let badge = seed.insert_task_template(company.id, "Badge", None).await?;

            let template_service = TemplateService::new(&test.state.db);
            template_service
                .replace_template_tasks(
                    template.id,
                    company.id,
                    crate::model::onboarding::ReplaceTemplateTasksDto {
                        tasks: vec![
                            crate::model::onboarding::TemplateTaskInputDto {
                                task_template_id: Some(laptop.id),
                                title: None,
                                description: None,
                            },
                            crate::model::onboarding::TemplateTaskInputDto {
                                task_template_id: Some(badge.id),
                                title: None,
                                description: None,
                            },
                        ],
                    },
                )
                .await?;

            let task_template_service = TaskTemplateService::new(&test.state.db);
            task_template_service
                .delete_task_template(laptop.id, company.id)
                .await?;

            let templates = template_service.get_templates(company.id).await?;
            assert_eq!(templates[0].item_count, 1);

            let tasks = template_service
                .get_template_tasks(template.id, company.id)
                .await?;
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].title, "Badge");
            assert_eq!(tasks[0].sequence, 1);

            Ok(())
        }
    }
}
