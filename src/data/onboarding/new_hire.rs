use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::status::OnboardingStatus;

use crate::model::onboarding::{InitiateOnboardingDto, UpdateNewHireDto};

pub struct NewHireRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewHireRepository<'a, C> {
    /// Creates a new instance of [`NewHireRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new hire record in its initial derived state
    /// (`not-started`, progress 0).
    pub async fn create(
        &self,
        company_id: i32,
        dto: &InitiateOnboardingDto,
    ) -> Result<entity::new_hire::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let new_hire = entity::new_hire::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            candidate_id: ActiveValue::Set(dto.candidate_id),
            job_id: ActiveValue::Set(dto.job_id),
            manager_id: ActiveValue::Set(dto.manager_id),
            first_name: ActiveValue::Set(dto.first_name.clone()),
            last_name: ActiveValue::Set(dto.last_name.clone()),
            email: ActiveValue::Set(dto.email.clone()),
            position: ActiveValue::Set(dto.position.clone()),
            department: ActiveValue::Set(dto.department.clone()),
            work_location: ActiveValue::Set(dto.work_location.clone()),
            start_date: ActiveValue::Set(dto.start_date),
            status: ActiveValue::Set(OnboardingStatus::NotStarted),
            progress: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        new_hire.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        new_hire_id: i32,
        company_id: i32,
    ) -> Result<Option<entity::new_hire::Model>, DbErr> {
        entity::prelude::NewHire::find_by_id(new_hire_id)
            .filter(entity::new_hire::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    pub async fn get_all_by_company_id(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::new_hire::Model>, DbErr> {
        entity::prelude::NewHire::find()
            .filter(entity::new_hire::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::new_hire::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Updates personal/job fields. Derived `status`/`progress` are not
    /// touched here; only [`Self::set_progress`] writes them.
    pub async fn update(
        &self,
        new_hire: entity::new_hire::Model,
        dto: UpdateNewHireDto,
    ) -> Result<entity::new_hire::Model, DbErr> {
        let mut new_hire_am = new_hire.into_active_model();

        if let Some(manager_id) = dto.manager_id {
            new_hire_am.manager_id = ActiveValue::Set(Some(manager_id));
        }
        if let Some(first_name) = dto.first_name {
            new_hire_am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = dto.last_name {
            new_hire_am.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = dto.email {
            new_hire_am.email = ActiveValue::Set(email);
        }
        if let Some(position) = dto.position {
            new_hire_am.position = ActiveValue::Set(position);
        }
        if let Some(department) = dto.department {
            new_hire_am.department = ActiveValue::Set(department);
        }
        if let Some(work_location) = dto.work_location {
            new_hire_am.work_location = ActiveValue::Set(Some(work_location));
        }
        if let Some(start_date) = dto.start_date {
            new_hire_am.start_date = ActiveValue::Set(start_date);
        }

        new_hire_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        new_hire_am.update(self.db).await
    }

    /// Writes the derived progress/status pair, invoked only by the
    /// progress recalculation.
    pub async fn set_progress(
        &self,
        new_hire: entity::new_hire::Model,
        progress: i32,
        status: OnboardingStatus,
    ) -> Result<entity::new_hire::Model, DbErr> {
        let mut new_hire_am = new_hire.into_active_model();
        new_hire_am.progress = ActiveValue::Set(progress);
        new_hire_am.status = ActiveValue::Set(status);
        new_hire_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        new_hire_am.update(self.db).await
    }

    /// Deletes a new hire row. Dependent rows (tasks, note links, document
    /// links) are removed by the service inside the same transaction.
    pub async fn delete(&self, new_hire_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::NewHire::delete_by_id(new_hire_id)
            .exec(self.db)
            .await
    }
}
