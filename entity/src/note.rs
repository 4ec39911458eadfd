use sea_orm::entity::prelude::*;

/// A free-text note authored by a single user.
///
/// Only the stored author may update or delete a note.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "note")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub title: Option<String>,
    pub content: String,
    pub author_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::AuthorId",
        to = "super::app_user::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::new_hire_note::Entity")]
    NewHireNote,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::new_hire_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHireNote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
