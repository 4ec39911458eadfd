use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct TaskTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskTemplateRepository<'a, C> {
    /// Creates a new instance of [`TaskTemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        company_id: i32,
        title: String,
        description: Option<String>,
    ) -> Result<entity::onboarding_task_template::Model, DbErr> {
        let task_template = entity::onboarding_task_template::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        task_template.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        task_template_id: i32,
        company_id: i32,
    ) -> Result<Option<entity::onboarding_task_template::Model>, DbErr> {
        entity::prelude::OnboardingTaskTemplate::find_by_id(task_template_id)
            .filter(entity::onboarding_task_template::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    pub async fn get_all_by_company_id(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::onboarding_task_template::Model>, DbErr> {
        entity::prelude::OnboardingTaskTemplate::find()
            .filter(entity::onboarding_task_template::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::onboarding_task_template::Column::Title)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        task_template: entity::onboarding_task_template::Model,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<entity::onboarding_task_template::Model, DbErr> {
        let mut task_template_am = task_template.into_active_model();

        if let Some(title) = title {
            task_template_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = description {
            task_template_am.description = ActiveValue::Set(Some(description));
        }

        task_template_am.update(self.db).await
    }

    /// IDs of the templates whose mapping references this catalog entry,
    /// collected before a delete so their `item_count` can be refreshed.
    pub async fn get_referencing_template_ids(
        &self,
        task_template_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        let maps = entity::prelude::TemplateTaskMap::find()
            .filter(entity::template_task_map::Column::TaskTemplateId.eq(task_template_id))
            .all(self.db)
            .await?;

        Ok(maps.into_iter().map(|map| map.template_id).collect())
    }

    /// Deletes a catalog entry and its mapping rows. Task instances cloned
    /// from it are untouched.
    pub async fn delete(&self, task_template_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TemplateTaskMap::delete_many()
            .filter(entity::template_task_map::Column::TaskTemplateId.eq(task_template_id))
            .exec(self.db)
            .await?;

        entity::prelude::OnboardingTaskTemplate::delete_by_id(task_template_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod delete {
        use crewline_test_utils::prelude::*;
        use entity::status::TaskStatus;
        use sea_orm::EntityTrait;

        use crate::data::onboarding::task_template::TaskTemplateRepository;

        /// Expect task instances cloned from a catalog entry to survive its deletion
        #[tokio::test]
        async fn keeps_task_instances() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let hire = seed.insert_new_hire(&company, &user).await?;
            let task_template = seed.insert_task_template(company.id, "Laptop", None).await?;
            let task = seed
                .task(hire.id, "Laptop")
                .task_template_id(task_template.id)
                .status(TaskStatus::Pending)
                .insert()
                .await?;

            let task_template_repo = TaskTemplateRepository::new(&test.state.db);
            let result = task_template_repo.delete(task_template.id).await?;
            assert_eq!(result.rows_affected, 1);

            let task = entity::prelude::OnboardingTask::find_by_id(task.id)
                .one(&test.state.db)
                .await?;
            assert!(task.is_some());

            Ok(())
        }
    }
}
