use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
#[error("Welcome notification failed: {0}")]
pub struct NotifyError(pub String);

/// Seam for the "welcome new hire" automation fired at onboarding
/// initiation.
///
/// The call is best-effort: callers log failures and continue, the new hire
/// row persists regardless of the notification outcome.
#[async_trait]
pub trait WelcomeNotifier: Send + Sync {
    async fn send_welcome(&self, new_hire: &entity::new_hire::Model) -> Result<(), NotifyError>;
}

/// Default notifier that records the welcome event in the log stream.
pub struct LogWelcomeNotifier;

#[async_trait]
impl WelcomeNotifier for LogWelcomeNotifier {
    async fn send_welcome(&self, new_hire: &entity::new_hire::Model) -> Result<(), NotifyError> {
        info!(
            "Welcome notification for new hire ID {} ({} {})",
            new_hire.id, new_hire.first_name, new_hire.last_name
        );

        Ok(())
    }
}
