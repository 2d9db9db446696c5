pub mod extract;
pub mod guard;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::dashboard::handlers as dashboard;
use crate::form::handlers as form;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session (open)
        .route("/api/v1/session", get(session::handle_current_session))
        .route("/api/v1/session/login", post(session::handle_login))
        .route("/api/v1/session/logout", post(session::handle_logout))
        // Dashboard (session required)
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route(
            "/api/v1/form",
            get(form::handle_get_form).patch(form::handle_update_field),
        )
        .route("/api/v1/form/schema", get(form::handle_form_schema))
        .route("/api/v1/form/reset", post(form::handle_reset_form))
        .route("/api/v1/form/submit", post(dashboard::handle_submit))
        .route("/api/v1/analytics", get(analytics::handle_analytics))
        .with_state(state)
}
