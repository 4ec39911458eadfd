use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;

use entity::status::{OnboardingStatus, TaskStatus};

use crate::{
    data::onboarding::{new_hire::NewHireRepository, task::TaskRepository},
    error::Error,
};

/// Derives a new hire's aggregate `progress`/`status` pair from its task
/// set.
///
/// `progress` is the rounded percentage of completed tasks, zero when there
/// are none. Status: no tasks is `not-started`, all completed is
/// `completed`, any task flagged delayed or any non-completed task past its
/// due date is `delayed`, otherwise `in-progress`.
pub fn derive_progress(
    tasks: &[entity::onboarding_task::Model],
    today: NaiveDate,
) -> (i32, OnboardingStatus) {
    let total = tasks.len() as i32;

    if total == 0 {
        return (0, OnboardingStatus::NotStarted);
    }

    let completed = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count() as i32;

    // round(100 * completed / total) without going through floats
    let progress = (200 * completed + total) / (2 * total);

    if completed == total {
        return (100, OnboardingStatus::Completed);
    }

    let delayed = tasks.iter().any(|task| {
        task.status == TaskStatus::Delayed
            || (task.status != TaskStatus::Completed && task.due_date.is_some_and(|due| due < today))
    });

    let status = if delayed {
        OnboardingStatus::Delayed
    } else {
        OnboardingStatus::InProgress
    };

    (progress, status)
}

/// Recomputes a hire's derived pair from current task state and writes it.
///
/// Runs inside the caller's transaction so progress is never visibly stale
/// relative to the task mutation that triggered it. Recomputing from
/// scratch each time makes the recalculation idempotent.
pub async fn recalculate<C: ConnectionTrait>(
    db: &C,
    new_hire: entity::new_hire::Model,
) -> Result<entity::new_hire::Model, Error> {
    let tasks = TaskRepository::new(db)
        .get_many_by_new_hire_id(new_hire.id)
        .await?;

    let (progress, status) = derive_progress(&tasks, Utc::now().date_naive());

    Ok(NewHireRepository::new(db)
        .set_progress(new_hire, progress, status)
        .await?)
}

#[cfg(test)]
mod tests {
    mod derive_progress {
        use chrono::NaiveDate;
        use entity::status::{OnboardingStatus, TaskStatus};

        use crate::service::onboarding::progress::derive_progress;

        fn task(status: TaskStatus, due_date: Option<NaiveDate>) -> entity::onboarding_task::Model {
            let now = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();

            entity::onboarding_task::Model {
                id: 0,
                new_hire_id: 1,
                task_template_id: None,
                title: "Task".to_string(),
                description: None,
                due_date,
                status,
                assigned_to: None,
                priority: None,
                category: None,
                completed_by: None,
                completed_date: None,
                created_at: now,
                updated_at: now,
            }
        }

        fn today() -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        }

        /// Expect zero progress and not-started for an empty task set
        #[test]
        fn zero_tasks_is_not_started() {
            assert_eq!(derive_progress(&[], today()), (0, OnboardingStatus::NotStarted));
        }

        /// Expect 100 and completed when every task is completed
        #[test]
        fn all_completed_is_completed() {
            let tasks = vec![
                task(TaskStatus::Completed, None),
                task(TaskStatus::Completed, None),
            ];

            assert_eq!(
                derive_progress(&tasks, today()),
                (100, OnboardingStatus::Completed)
            );
        }

        /// Expect 1 of 3 completed to round to 33 and stay in-progress
        #[test]
        fn one_of_three_rounds_to_33() {
            let tasks = vec![
                task(TaskStatus::Completed, None),
                task(TaskStatus::Pending, None),
                task(TaskStatus::Pending, None),
            ];

            assert_eq!(
                derive_progress(&tasks, today()),
                (33, OnboardingStatus::InProgress)
            );
        }

        /// Expect 2 of 3 completed to round to 67
        #[test]
        fn two_of_three_rounds_to_67() {
            let tasks = vec![
                task(TaskStatus::Completed, None),
                task(TaskStatus::Completed, None),
                task(TaskStatus::InProgress, None),
            ];

            assert_eq!(
                derive_progress(&tasks, today()),
                (67, OnboardingStatus::InProgress)
            );
        }

        /// Expect a task flagged delayed to flip the aggregate to delayed
        #[test]
        fn delayed_flag_propagates() {
            let tasks = vec![
                task(TaskStatus::Completed, None),
                task(TaskStatus::Delayed, None),
            ];

            assert_eq!(
                derive_progress(&tasks, today()),
                (50, OnboardingStatus::Delayed)
            );
        }

        /// Expect an overdue non-completed task to flip the aggregate to delayed
        #[test]
        fn overdue_task_propagates_delayed() {
            let overdue = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
            let tasks = vec![
                task(TaskStatus::Completed, Some(overdue)),
                task(TaskStatus::Pending, Some(overdue)),
            ];

            assert_eq!(
                derive_progress(&tasks, today()),
                (50, OnboardingStatus::Delayed)
            );
        }

        /// Expect identical output when derived twice from the same input
        #[test]
        fn derivation_is_idempotent() {
            let tasks = vec![
                task(TaskStatus::Completed, None),
                task(TaskStatus::InProgress, None),
            ];

            assert_eq!(
                derive_progress(&tasks, today()),
                derive_progress(&tasks, today())
            );
        }
    }
}
