use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct TemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TemplateRepository<'a, C> {
    /// Creates a new instance of [`TemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new onboarding template with an empty task mapping
    pub async fn create(
        &self,
        company_id: i32,
        name: String,
        created_by: i32,
    ) -> Result<entity::onboarding_template::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let template = entity::onboarding_template::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set(name),
            item_count: ActiveValue::Set(0),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        template.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        template_id: i32,
        company_id: i32,
    ) -> Result<Option<entity::onboarding_template::Model>, DbErr> {
        entity::prelude::OnboardingTemplate::find_by_id(template_id)
            .filter(entity::onboarding_template::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    pub async fn get_all_by_company_id(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::onboarding_template::Model>, DbErr> {
        entity::prelude::OnboardingTemplate::find()
            .filter(entity::onboarding_template::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::onboarding_template::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update_name(
        &self,
        template: entity::onboarding_template::Model,
        name: String,
    ) -> Result<entity::onboarding_template::Model, DbErr> {
        let mut template_am = template.into_active_model();
        template_am.name = ActiveValue::Set(name);
        template_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        template_am.update(self.db).await
    }

    /// Deletes a template; its task mapping rows cascade.
    ///
    /// Returns OK regardless of the template existing, check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, template_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TemplateTaskMap::delete_many()
            .filter(entity::template_task_map::Column::TemplateId.eq(template_id))
            .exec(self.db)
            .await?;

        entity::prelude::OnboardingTemplate::delete_by_id(template_id)
            .exec(self.db)
            .await
    }

    /// Gets a template's task mapping in sequence order, each entry paired
    /// with the catalog task template it references.
    pub async fn get_tasks(
        &self,
        template_id: i32,
    ) -> Result<
        Vec<(
            entity::template_task_map::Model,
            Option<entity::onboarding_task_template::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TemplateTaskMap::find()
            .filter(entity::template_task_map::Column::TemplateId.eq(template_id))
            .find_also_related(entity::onboarding_task_template::Entity)
            .order_by_asc(entity::template_task_map::Column::Sequence)
            .all(self.db)
            .await
    }

    /// Rewrites a template's task mapping in full: clear, reinsert with
    /// sequence 1..N, then refresh the denormalized `item_count`.
    ///
    /// Callers run this inside a transaction so an observer never sees the
    /// cleared-but-not-reinserted intermediate state.
    pub async fn replace_tasks(
        &self,
        template: entity::onboarding_template::Model,
        task_template_ids: Vec<i32>,
    ) -> Result<entity::onboarding_template::Model, DbErr> {
        entity::prelude::TemplateTaskMap::delete_many()
            .filter(entity::template_task_map::Column::TemplateId.eq(template.id))
            .exec(self.db)
            .await?;

        let item_count = task_template_ids.len() as i32;

        if !task_template_ids.is_empty() {
            let maps =
                task_template_ids
                    .into_iter()
                    .enumerate()
                    .map(|(index, task_template_id)| entity::template_task_map::ActiveModel {
                        template_id: ActiveValue::Set(template.id),
                        task_template_id: ActiveValue::Set(task_template_id),
                        sequence: ActiveValue::Set(index as i32 + 1),
                        ..Default::default()
                    });

            entity::prelude::TemplateTaskMap::insert_many(maps)
                .exec(self.db)
                .await?;
        }

        let mut template_am = template.into_active_model();
        template_am.item_count = ActiveValue::Set(item_count);
        template_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        template_am.update(self.db).await
    }

    /// Rewrites a template's mapping sequences to contiguous 1..N,
    /// preserving the existing order. Used after catalog deletions punch
    /// holes in the sequence.
    pub async fn resequence_tasks(&self, template_id: i32) -> Result<(), DbErr> {
        let maps = entity::prelude::TemplateTaskMap::find()
            .filter(entity::template_task_map::Column::TemplateId.eq(template_id))
            .order_by_asc(entity::template_task_map::Column::Sequence)
            .all(self.db)
            .await?;

        for (index, map) in maps.into_iter().enumerate() {
            let sequence = index as i32 + 1;
            if map.sequence == sequence {
                continue;
            }

            let mut map_am = map.into_active_model();
            map_am.sequence = ActiveValue::Set(sequence);
            map_am.update(self.db).await?;
        }

        Ok(())
    }

    /// Recounts a template's mapping rows and rewrites `item_count`, used
    /// after catalog deletions cascade into the mapping.
    pub async fn refresh_item_count(
        &self,
        template: entity::onboarding_template::Model,
    ) -> Result<entity::onboarding_template::Model, DbErr> {
        let count = entity::prelude::TemplateTaskMap::find()
            .filter(entity::template_task_map::Column::TemplateId.eq(template.id))
            .count(self.db)
            .await?;

        let mut template_am = template.into_active_model();
        template_am.item_count = ActiveValue::Set(count as i32);
        template_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        template_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod replace_tasks {
        use crewline_test_utils::prelude::*;

        use crate::data::onboarding::template::TemplateRepository;

        /// Expect mapping rewritten with contiguous sequence and item_count updated
        #[tokio::test]
        async fn rewrites_mapping_in_sequence_order() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let first = seed.insert_task_template(company.id, "Laptop", None).await?;
            let second = seed.insert_task_template(company.id, "Badge", None).await?;

            let template_repo = TemplateRepository::new(&test.state.db);
            let template = template_repo
                .replace_tasks(template, vec![second.id, first.id])
                .await?;

            assert_eq!(template.item_count, 2);

            let tasks = template_repo.get_tasks(template.id).await?;
            let sequences: Vec<(i32, i32)> = tasks
                .iter()
                .map(|(map, _)| (map.sequence, map.task_template_id))
                .collect();
            assert_eq!(sequences, vec![(1, second.id), (2, first.id)]);

            Ok(())
        }

        /// Expect an empty replacement to clear the mapping and zero item_count
        #[tokio::test]
        async fn clears_mapping_for_empty_input() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let task_template = seed.insert_task_template(company.id, "Laptop", None).await?;

            let template_repo = TemplateRepository::new(&test.state.db);
            let template = template_repo
                .replace_tasks(template, vec![task_template.id])
                .await?;
            let template = template_repo.replace_tasks(template, Vec::new()).await?;

            assert_eq!(template.item_count, 0);
            assert!(template_repo.get_tasks(template.id).await?.is_empty());

            Ok(())
        }
    }

    mod delete {
        use crewline_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::data::onboarding::template::TemplateRepository;

        /// Expect template and its mapping rows to be removed
        #[tokio::test]
        async fn deletes_template_and_mapping() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;
            let template = seed.insert_template(company.id, "Engineering", user.id).await?;
            let task_template = seed.insert_task_template(company.id, "Laptop", None).await?;

            let template_repo = TemplateRepository::new(&test.state.db);
            let template = template_repo
                .replace_tasks(template, vec![task_template.id])
                .await?;

            let result = template_repo.delete(template.id).await?;
            assert_eq!(result.rows_affected, 1);

            let remaining = entity::prelude::TemplateTaskMap::find()
                .all(&test.state.db)
                .await?;
            assert!(remaining.is_empty());

            Ok(())
        }
    }
}
