use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "onboarding_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    /// Denormalized count of mapped tasks, rewritten whenever the mapping changes.
    pub item_count: i32,
    pub created_by: i32,
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
        from = "Column::CreatedBy",
        to = "super::app_user::Column::Id"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::template_task_map::Entity")]
    TemplateTaskMap,
}

impl Related<super::template_task_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TemplateTaskMap.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
