use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub file_path: String,
    pub uploaded_by: i32,
    pub created_at: DateTime,
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
        from = "Column::UploadedBy",
        to = "super::app_user::Column::Id"
    )]
    UploadedBy,
    #[sea_orm(has_many = "super::new_hire_document::Entity")]
    NewHireDocument,
}

impl Related<super::new_hire_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHireDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
