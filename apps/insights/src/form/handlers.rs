use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::form::{schema, FieldSchema};
use crate::models::personnel::{PersonnelAttributes, PersonnelField};
use crate::routes::extract::ApiJson;
use crate::routes::guard::RequireSession;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FieldUpdate {
    pub field: PersonnelField,
    pub value: Value,
}

/// GET /api/v1/form
pub async fn handle_get_form(
    _session: RequireSession,
    State(state): State<AppState>,
) -> Json<PersonnelAttributes> {
    Json(state.form.read().await.attributes().clone())
}

/// PATCH /api/v1/form
pub async fn handle_update_field(
    _session: RequireSession,
    State(state): State<AppState>,
    ApiJson(update): ApiJson<FieldUpdate>,
) -> Result<Json<PersonnelAttributes>, AppError> {
    let mut form = state.form.write().await;
    form.set_field(update.field, &update.value)?;
    Ok(Json(form.attributes().clone()))
}

/// POST /api/v1/form/reset
pub async fn handle_reset_form(
    _session: RequireSession,
    State(state): State<AppState>,
) -> Json<PersonnelAttributes> {
    let mut form = state.form.write().await;
    form.reset();
    Json(form.attributes().clone())
}

/// GET /api/v1/form/schema
pub async fn handle_form_schema(_session: RequireSession) -> Json<Vec<FieldSchema>> {
    Json(schema())
}
