use sea_orm::entity::prelude::*;

/// Association between a new hire and a previously-uploaded document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "new_hire_document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub new_hire_id: i32,
    pub document_id: i32,
    pub added_by: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::new_hire::Entity",
        from = "Column::NewHireId",
        to = "super::new_hire::Column::Id",
        on_delete = "Cascade"
    )]
    NewHire,
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::DocumentId",
        to = "super::document::Column::Id",
        on_delete = "Cascade"
    )]
    Document,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::AddedBy",
        to = "super::app_user::Column::Id"
    )]
    AddedBy,
}

impl Related<super::new_hire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHire.def()
    }
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
