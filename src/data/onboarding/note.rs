use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct NoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoteRepository<'a, C> {
    /// Creates a new instance of [`NoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a note and its link to the new hire. Two inserts; callers
    /// run this inside a transaction.
    pub async fn create(
        &self,
        company_id: i32,
        new_hire_id: i32,
        author_id: i32,
        title: Option<String>,
        content: String,
    ) -> Result<entity::note::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let note = entity::note::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let note = note.insert(self.db).await?;

        let link = entity::new_hire_note::ActiveModel {
            new_hire_id: ActiveValue::Set(new_hire_id),
            note_id: ActiveValue::Set(note.id),
            created_by: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        link.insert(self.db).await?;

        Ok(note)
    }

    /// Gets a new hire's notes newest-first, paired with their note rows.
    pub async fn get_many_by_new_hire_id(
        &self,
        new_hire_id: i32,
    ) -> Result<Vec<(entity::new_hire_note::Model, Option<entity::note::Model>)>, DbErr> {
        entity::prelude::NewHireNote::find()
            .filter(entity::new_hire_note::Column::NewHireId.eq(new_hire_id))
            .find_also_related(entity::note::Entity)
            .order_by_desc(entity::new_hire_note::Column::CreatedAt)
            .order_by_desc(entity::new_hire_note::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, note_id: i32) -> Result<Option<entity::note::Model>, DbErr> {
        entity::prelude::Note::find_by_id(note_id).one(self.db).await
    }

    pub async fn update(
        &self,
        note: entity::note::Model,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<entity::note::Model, DbErr> {
        let mut note_am = note.into_active_model();

        if let Some(title) = title {
            note_am.title = ActiveValue::Set(Some(title));
        }
        if let Some(content) = content {
            note_am.content = ActiveValue::Set(content);
        }

        note_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        note_am.update(self.db).await
    }

    /// Deletes a note and its new-hire links.
    pub async fn delete(&self, note_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::NewHireNote::delete_many()
            .filter(entity::new_hire_note::Column::NoteId.eq(note_id))
            .exec(self.db)
            .await?;

        entity::prelude::Note::delete_by_id(note_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_many_by_new_hire_id(&self, new_hire_id: i32) -> Result<(), DbErr> {
        let links = entity::prelude::NewHireNote::find()
            .filter(entity::new_hire_note::Column::NewHireId.eq(new_hire_id))
            .all(self.db)
            .await?;

        let note_ids: Vec<i32> = links.iter().map(|link| link.note_id).collect();

        entity::prelude::NewHireNote::delete_many()
            .filter(entity::new_hire_note::Column::NewHireId.eq(new_hire_id))
            .exec(self.db)
            .await?;

        if !note_ids.is_empty() {
            entity::prelude::Note::delete_many()
                .filter(entity::note::Column::Id.is_in(note_ids))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }
}
