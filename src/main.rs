use std::sync::Arc;

use tracing::info;

use crewline::{
    config::Config,
    model::app::AppState,
    router, startup,
    service::notification::LogWelcomeNotifier,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    let session = startup::build_session_layer();

    let state = AppState {
        db,
        notifier: Arc::new(LogWelcomeNotifier),
    };

    let app = router::routes().with_state(state).layer(session);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
