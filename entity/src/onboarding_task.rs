use sea_orm::entity::prelude::*;

use crate::status::TaskStatus;

/// A single onboarding task belonging to a new hire.
///
/// Tasks cloned from a template keep a reference to the catalog entry they
/// came from, but are independent copies: deleting the catalog entry leaves
/// the instance untouched.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "onboarding_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub new_hire_id: i32,
    pub task_template_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub status: TaskStatus,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub completed_by: Option<i32>,
    pub completed_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::new_hire::Entity",
        from = "Column::NewHireId",
        to = "super::new_hire::Column::Id"
    )]
    NewHire,
    #[sea_orm(
        belongs_to = "super::onboarding_task_template::Entity",
        from = "Column::TaskTemplateId",
        to = "super::onboarding_task_template::Column::Id",
        on_delete = "SetNull"
    )]
    OnboardingTaskTemplate,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::AssignedTo",
        to = "super::app_user::Column::Id"
    )]
    AssignedTo,
}

impl Related<super::new_hire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
