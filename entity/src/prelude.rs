pub use super::app_user::Entity as AppUser;
pub use super::candidate::Entity as Candidate;
pub use super::company::Entity as Company;
pub use super::document::Entity as Document;
pub use super::job::Entity as Job;
pub use super::new_hire::Entity as NewHire;
pub use super::new_hire_document::Entity as NewHireDocument;
pub use super::new_hire_note::Entity as NewHireNote;
pub use super::note::Entity as Note;
pub use super::onboarding_task::Entity as OnboardingTask;
pub use super::onboarding_task_template::Entity as OnboardingTaskTemplate;
pub use super::onboarding_template::Entity as OnboardingTemplate;
pub use super::template_task_map::Entity as TemplateTaskMap;
