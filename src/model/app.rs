use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::notification::WelcomeNotifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notifier: Arc<dyn WelcomeNotifier>,
}
