//! Database seeding context for fixture rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::status::{OnboardingStatus, TaskStatus};

/// Inserts fixture rows into the test database.
///
/// Obtained through [`TestSetup::seed`](crate::TestSetup::seed); every method
/// inserts one row with standard test values and returns the stored model.
pub struct SeedContext<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedContext<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_company(&self, name: &str) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_user(
        &self,
        company_id: i32,
        first_name: &str,
        last_name: &str,
        email: &str,
        role: &str,
    ) -> Result<entity::app_user::Model, DbErr> {
        entity::app_user::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_job(
        &self,
        company_id: i32,
        title: &str,
        department: &str,
    ) -> Result<entity::job::Model, DbErr> {
        entity::job::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(title.to_string()),
            department: ActiveValue::Set(department.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_candidate(
        &self,
        company_id: i32,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<entity::candidate::Model, DbErr> {
        entity::candidate::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_document(
        &self,
        company_id: i32,
        name: &str,
        file_path: &str,
        uploaded_by: i32,
    ) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set(name.to_string()),
            file_path: ActiveValue::Set(file_path.to_string()),
            uploaded_by: ActiveValue::Set(uploaded_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_template(
        &self,
        company_id: i32,
        name: &str,
        created_by: i32,
    ) -> Result<entity::onboarding_template::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::onboarding_template::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set(name.to_string()),
            item_count: ActiveValue::Set(0),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_task_template(
        &self,
        company_id: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<entity::onboarding_task_template::Model, DbErr> {
        entity::onboarding_task_template::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts a new hire managed by `manager`, creating the job and
    /// candidate rows it references.
    pub async fn insert_new_hire(
        &self,
        company: &entity::company::Model,
        manager: &entity::app_user::Model,
    ) -> Result<entity::new_hire::Model, DbErr> {
        let job = self.insert_job(company.id, "Engineer", "Engineering").await?;
        let candidate = self
            .insert_candidate(company.id, "Grace", "Hopper", "grace.hopper@example.test")
            .await?;

        let now = Utc::now().naive_utc();

        entity::new_hire::ActiveModel {
            company_id: ActiveValue::Set(company.id),
            candidate_id: ActiveValue::Set(candidate.id),
            job_id: ActiveValue::Set(job.id),
            manager_id: ActiveValue::Set(Some(manager.id)),
            first_name: ActiveValue::Set("Grace".to_string()),
            last_name: ActiveValue::Set("Hopper".to_string()),
            email: ActiveValue::Set("grace.hopper@example.test".to_string()),
            position: ActiveValue::Set("Engineer".to_string()),
            department: ActiveValue::Set("Engineering".to_string()),
            work_location: ActiveValue::Set(Some("Remote".to_string())),
            start_date: ActiveValue::Set(now.date()),
            status: ActiveValue::Set(OnboardingStatus::NotStarted),
            progress: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Starts a task fixture for the given hire; finish with
    /// [`TaskSeed::insert`].
    pub fn task(&self, new_hire_id: i32, title: &str) -> TaskSeed<'a> {
        TaskSeed {
            db: self.db,
            new_hire_id,
            title: title.to_string(),
            task_template_id: None,
            status: TaskStatus::Pending,
            assigned_to: None,
            due_date: None,
        }
    }
}

/// Builder for an onboarding task fixture row.
pub struct TaskSeed<'a> {
    db: &'a DatabaseConnection,
    new_hire_id: i32,
    title: String,
    task_template_id: Option<i32>,
    status: TaskStatus,
    assigned_to: Option<i32>,
    due_date: Option<chrono::NaiveDate>,
}

impl TaskSeed<'_> {
    pub fn task_template_id(mut self, task_template_id: i32) -> Self {
        self.task_template_id = Some(task_template_id);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn assigned_to(mut self, user_id: i32) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    pub fn due_date(mut self, due_date: chrono::NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub async fn insert(self) -> Result<entity::onboarding_task::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::onboarding_task::ActiveModel {
            new_hire_id: ActiveValue::Set(self.new_hire_id),
            task_template_id: ActiveValue::Set(self.task_template_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            due_date: ActiveValue::Set(self.due_date),
            status: ActiveValue::Set(self.status),
            assigned_to: ActiveValue::Set(self.assigned_to),
            priority: ActiveValue::Set(None),
            category: ActiveValue::Set(None),
            completed_by: ActiveValue::Set(None),
            completed_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
