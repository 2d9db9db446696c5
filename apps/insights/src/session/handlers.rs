use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::session::SessionRecord;
use crate::routes::extract::ApiJson;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub user: Option<SessionRecord>,
}

/// POST /api/v1/session/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<SessionRecord>, AppError> {
    let record = state.session.login(&req.id, &req.password)?;
    state.reset_workspace().await;
    Ok(Json(record))
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.session.logout()?;
    state.reset_workspace().await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/session
pub async fn handle_current_session(
    State(state): State<AppState>,
) -> Result<Json<SessionStatus>, AppError> {
    let user = state.session.current_user()?;
    Ok(Json(SessionStatus {
        authenticated: user.is_some(),
        user,
    }))
}
