use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct NewHireDocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewHireDocumentRepository<'a, C> {
    /// Creates a new instance of [`NewHireDocumentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new_hire_id: i32,
        document_id: i32,
        added_by: i32,
    ) -> Result<entity::new_hire_document::Model, DbErr> {
        let link = entity::new_hire_document::ActiveModel {
            new_hire_id: ActiveValue::Set(new_hire_id),
            document_id: ActiveValue::Set(document_id),
            added_by: ActiveValue::Set(added_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        link.insert(self.db).await
    }

    /// Gets a new hire's document links paired with the documents they
    /// point at.
    pub async fn get_many_by_new_hire_id(
        &self,
        new_hire_id: i32,
    ) -> Result<Vec<(entity::new_hire_document::Model, Option<entity::document::Model>)>, DbErr>
    {
        entity::prelude::NewHireDocument::find()
            .filter(entity::new_hire_document::Column::NewHireId.eq(new_hire_id))
            .find_also_related(entity::document::Entity)
            .order_by_desc(entity::new_hire_document::Column::CreatedAt)
            .order_by_desc(entity::new_hire_document::Column::Id)
            .all(self.db)
            .await
    }

    /// Removes the link between a new hire and a document; the document
    /// itself is untouched.
    pub async fn delete(
        &self,
        new_hire_id: i32,
        document_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::NewHireDocument::delete_many()
            .filter(entity::new_hire_document::Column::NewHireId.eq(new_hire_id))
            .filter(entity::new_hire_document::Column::DocumentId.eq(document_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_many_by_new_hire_id(
        &self,
        new_hire_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::NewHireDocument::delete_many()
            .filter(entity::new_hire_document::Column::NewHireId.eq(new_hire_id))
            .exec(self.db)
            .await
    }
}
