use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::status::TaskStatus;

/// Fields of a task create, shared by ad-hoc creation and template cloning.
pub struct TaskCreate {
    pub task_template_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

/// Field changes for a task update. `None` leaves a field unchanged.
///
/// Completion stamps are decided by the service (they must move atomically
/// with the status change) and applied here in the same update statement.
#[derive(Default)]
pub struct TaskUpdate {
    pub new_hire_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub completed_by: Option<i32>,
    pub completed_date: Option<NaiveDateTime>,
    pub clear_completion: bool,
}

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a task in `pending` state.
    pub async fn create(
        &self,
        new_hire_id: i32,
        create: TaskCreate,
    ) -> Result<entity::onboarding_task::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let task = entity::onboarding_task::ActiveModel {
            new_hire_id: ActiveValue::Set(new_hire_id),
            task_template_id: ActiveValue::Set(create.task_template_id),
            title: ActiveValue::Set(create.title),
            description: ActiveValue::Set(create.description),
            due_date: ActiveValue::Set(create.due_date),
            status: ActiveValue::Set(TaskStatus::Pending),
            assigned_to: ActiveValue::Set(create.assigned_to),
            priority: ActiveValue::Set(create.priority),
            category: ActiveValue::Set(create.category),
            completed_by: ActiveValue::Set(None),
            completed_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        task_id: i32,
    ) -> Result<Option<entity::onboarding_task::Model>, DbErr> {
        entity::prelude::OnboardingTask::find_by_id(task_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_new_hire_id(
        &self,
        new_hire_id: i32,
    ) -> Result<Vec<entity::onboarding_task::Model>, DbErr> {
        entity::prelude::OnboardingTask::find()
            .filter(entity::onboarding_task::Column::NewHireId.eq(new_hire_id))
            .order_by_asc(entity::onboarding_task::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        task: entity::onboarding_task::Model,
        update: TaskUpdate,
    ) -> Result<entity::onboarding_task::Model, DbErr> {
        let mut task_am = task.into_active_model();

        if let Some(new_hire_id) = update.new_hire_id {
            task_am.new_hire_id = ActiveValue::Set(new_hire_id);
        }
        if let Some(title) = update.title {
            task_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = update.description {
            task_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(due_date) = update.due_date {
            task_am.due_date = ActiveValue::Set(Some(due_date));
        }
        if let Some(status) = update.status {
            task_am.status = ActiveValue::Set(status);
        }
        if let Some(assigned_to) = update.assigned_to {
            task_am.assigned_to = ActiveValue::Set(Some(assigned_to));
        }
        if let Some(priority) = update.priority {
            task_am.priority = ActiveValue::Set(Some(priority));
        }
        if let Some(category) = update.category {
            task_am.category = ActiveValue::Set(Some(category));
        }
        if let Some(completed_by) = update.completed_by {
            task_am.completed_by = ActiveValue::Set(Some(completed_by));
        }
        if let Some(completed_date) = update.completed_date {
            task_am.completed_date = ActiveValue::Set(Some(completed_date));
        }
        if update.clear_completion {
            task_am.completed_by = ActiveValue::Set(None);
            task_am.completed_date = ActiveValue::Set(None);
        }

        task_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        task_am.update(self.db).await
    }

    pub async fn delete(&self, task_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::OnboardingTask::delete_by_id(task_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_many_by_new_hire_id(
        &self,
        new_hire_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::OnboardingTask::delete_many()
            .filter(entity::onboarding_task::Column::NewHireId.eq(new_hire_id))
            .exec(self.db)
            .await
    }
}
