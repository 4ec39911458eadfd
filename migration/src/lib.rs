pub use sea_orm_migration::prelude::*;

mod m20260825_000001_create_company_table;
mod m20260825_000002_create_app_user_table;
mod m20260825_000003_create_job_table;
mod m20260825_000004_create_candidate_table;
mod m20260825_000005_create_document_table;
mod m20260825_000006_create_onboarding_template_table;
mod m20260825_000007_create_onboarding_task_template_table;
mod m20260825_000008_create_template_task_map_table;
mod m20260825_000009_create_new_hire_table;
mod m20260825_000010_create_onboarding_task_table;
mod m20260825_000011_create_note_table;
mod m20260825_000012_create_new_hire_note_table;
mod m20260825_000013_create_new_hire_document_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_create_company_table::Migration),
            Box::new(m20260825_000002_create_app_user_table::Migration),
            Box::new(m20260825_000003_create_job_table::Migration),
            Box::new(m20260825_000004_create_candidate_table::Migration),
            Box::new(m20260825_000005_create_document_table::Migration),
            Box::new(m20260825_000006_create_onboarding_template_table::Migration),
            Box::new(m20260825_000007_create_onboarding_task_template_table::Migration),
            Box::new(m20260825_000008_create_template_task_map_table::Migration),
            Box::new(m20260825_000009_create_new_hire_table::Migration),
            Box::new(m20260825_000010_create_onboarding_task_table::Migration),
            Box::new(m20260825_000011_create_note_table::Migration),
            Box::new(m20260825_000012_create_new_hire_note_table::Migration),
            Box::new(m20260825_000013_create_new_hire_document_table::Migration),
        ]
    }
}
