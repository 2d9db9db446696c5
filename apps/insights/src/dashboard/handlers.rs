use axum::{extract::State, Json};
use serde::Serialize;

use crate::dashboard::SubmissionState;
use crate::errors::AppError;
use crate::models::personnel::PersonnelAttributes;
use crate::models::session::SessionRecord;
use crate::routes::guard::RequireSession;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub user: SessionRecord,
    pub form: PersonnelAttributes,
    pub submitting: bool,
    pub submission: SubmissionState,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
) -> Json<DashboardResponse> {
    let form = state.form.read().await.attributes().clone();
    let submission = state.submission.current().await;
    Json(DashboardResponse {
        user,
        form,
        submitting: submission == SubmissionState::Submitting,
        submission,
    })
}

/// POST /api/v1/form/submit
///
/// The prediction runs on its own task so a dropped client connection does not
/// cancel it; the outcome is still recorded for the next dashboard read.
pub async fn handle_submit(
    _session: RequireSession,
    State(state): State<AppState>,
) -> Result<Json<SubmissionState>, AppError> {
    let attributes = state.form.read().await.attributes().clone();
    let tracker = state.submission.clone();
    let predictor = state.predictor.clone();

    let outcome = tokio::spawn(async move { tracker.submit(predictor.as_ref(), attributes).await })
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(outcome))
}
