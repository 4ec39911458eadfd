use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CandidateRepository<'a, C> {
    /// Creates a new instance of [`CandidateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        candidate_id: i32,
        company_id: i32,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find_by_id(candidate_id)
            .filter(entity::candidate::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }
}
