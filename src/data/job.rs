use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a job within the given tenant; other tenants' jobs behave as
    /// not-found.
    pub async fn get_by_id(
        &self,
        job_id: i32,
        company_id: i32,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id)
            .filter(entity::job::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }
}
