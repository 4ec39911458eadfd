//! HTTP controller endpoints for the Crewline web API.
//!
//! Axum handlers resolving the acting user from the session, delegating to
//! the service layer, and mapping results to HTTP responses. Endpoints are
//! annotated with utoipa for OpenAPI documentation.

pub mod auth;
pub mod onboarding;
pub mod util;
