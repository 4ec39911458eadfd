use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "new_hire_note")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub new_hire_id: i32,
    pub note_id: i32,
    pub created_by: i32,
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
        belongs_to = "super::note::Entity",
        from = "Column::NoteId",
        to = "super::note::Column::Id",
        on_delete = "Cascade"
    )]
    Note,
}

impl Related<super::new_hire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHire.def()
    }
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
