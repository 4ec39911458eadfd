use sea_orm::entity::prelude::*;

use crate::status::OnboardingStatus;

/// A candidate undergoing onboarding.
///
/// `status` and `progress` are derived from the hire's task set and are only
/// ever written by the progress recalculation, never directly by clients.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "new_hire")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub candidate_id: i32,
    pub job_id: i32,
    pub manager_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub work_location: Option<String>,
    pub start_date: Date,
    pub status: OnboardingStatus,
    pub progress: i32,
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
        belongs_to = "super::candidate::Entity",
        from = "Column::CandidateId",
        to = "super::candidate::Column::Id"
    )]
    Candidate,
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::ManagerId",
        to = "super::app_user::Column::Id"
    )]
    Manager,
    #[sea_orm(has_many = "super::onboarding_task::Entity")]
    OnboardingTask,
    #[sea_orm(has_many = "super::new_hire_note::Entity")]
    NewHireNote,
    #[sea_orm(has_many = "super::new_hire_document::Entity")]
    NewHireDocument,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::candidate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidate.def()
    }
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::onboarding_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnboardingTask.def()
    }
}

impl Related<super::new_hire_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHireNote.def()
    }
}

impl Related<super::new_hire_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewHireDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
