use sea_orm::entity::prelude::*;

/// Ordered mapping of catalog task templates onto an onboarding template.
///
/// `sequence` is contiguous 1..N within a template and is always rewritten
/// in full when the template's task list changes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "template_task_map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_id: i32,
    pub task_template_id: i32,
    pub sequence: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::onboarding_template::Entity",
        from = "Column::TemplateId",
        to = "super::onboarding_template::Column::Id",
        on_delete = "Cascade"
    )]
    OnboardingTemplate,
    #[sea_orm(
        belongs_to = "super::onboarding_task_template::Entity",
        from = "Column::TaskTemplateId",
        to = "super::onboarding_task_template::Column::Id",
        on_delete = "Cascade"
    )]
    OnboardingTaskTemplate,
}

impl Related<super::onboarding_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnboardingTemplate.def()
    }
}

impl Related<super::onboarding_task_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnboardingTaskTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
