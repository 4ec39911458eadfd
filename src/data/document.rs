use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    /// Creates a new instance of [`DocumentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        document_id: i32,
        company_id: i32,
    ) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(document_id)
            .filter(entity::document::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }
}
