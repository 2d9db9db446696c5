use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::models::session::SessionRecord;
use crate::state::AppState;

/// Extractor that admits a request only while a session record is stored.
/// Without one the handler never runs and the caller gets `401`.
pub struct RequireSession(pub SessionRecord);

#[async_trait]
impl FromRequestParts<AppState> for RequireSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .session
            .current_user()?
            .map(RequireSession)
            .ok_or(AppError::Unauthorized)
    }
}
