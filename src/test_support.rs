//! Request payload builders shared by the in-crate test suites.

use chrono::{Days, Utc};

use crate::model::onboarding::InitiateOnboardingDto;

/// An onboarding initiation payload for the given candidate and job,
/// starting two weeks out.
pub fn initiate_dto(candidate_id: i32, job_id: i32) -> InitiateOnboardingDto {
    InitiateOnboardingDto {
        candidate_id,
        job_id,
        manager_id: None,
        work_location: Some("Remote".to_string()),
        start_date: Utc::now().date_naive() + Days::new(14),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace.hopper@example.test".to_string(),
        position: "Engineer".to_string(),
        department: "Engineering".to_string(),
    }
}
