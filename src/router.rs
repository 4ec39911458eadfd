//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs` with the raw document at
//! `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Crewline", description = "Crewline onboarding API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::onboarding::ONBOARDING_TAG, description = "Onboarding API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::onboarding::template::get_templates))
        .routes(routes!(controller::onboarding::template::create_template))
        .routes(routes!(controller::onboarding::template::update_template))
        .routes(routes!(controller::onboarding::template::delete_template))
        .routes(routes!(controller::onboarding::template::get_template_tasks))
        .routes(routes!(
            controller::onboarding::template::replace_template_tasks
        ))
        .routes(routes!(
            controller::onboarding::task_template::get_task_templates
        ))
        .routes(routes!(
            controller::onboarding::task_template::create_task_template
        ))
        .routes(routes!(
            controller::onboarding::task_template::update_task_template
        ))
        .routes(routes!(
            controller::onboarding::task_template::delete_task_template
        ))
        .routes(routes!(controller::onboarding::new_hire::initiate_onboarding))
        .routes(routes!(controller::onboarding::new_hire::get_new_hires))
        .routes(routes!(controller::onboarding::new_hire::get_new_hire))
        .routes(routes!(controller::onboarding::new_hire::update_new_hire))
        .routes(routes!(controller::onboarding::new_hire::delete_new_hire))
        .routes(routes!(controller::onboarding::task::apply_template))
        .routes(routes!(controller::onboarding::task::get_new_hire_tasks))
        .routes(routes!(controller::onboarding::task::create_task))
        .routes(routes!(controller::onboarding::task::update_task))
        .routes(routes!(controller::onboarding::task::delete_task))
        .routes(routes!(controller::onboarding::note::add_note))
        .routes(routes!(controller::onboarding::note::get_notes))
        .routes(routes!(controller::onboarding::note::update_note))
        .routes(routes!(controller::onboarding::note::delete_note))
        .routes(routes!(controller::onboarding::document::add_document))
        .routes(routes!(controller::onboarding::document::get_documents))
        .routes(routes!(controller::onboarding::document::remove_document))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
