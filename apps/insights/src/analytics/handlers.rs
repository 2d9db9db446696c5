use axum::{extract::State, Json};
use tracing::warn;

use crate::analytics::{load_dataset, summarize, AnalyticsState};
use crate::errors::AppError;
use crate::routes::guard::RequireSession;
use crate::state::AppState;

/// GET /api/v1/analytics
///
/// The summary is computed once per process; a missing dataset is re-checked on
/// every call so dropping the file in place does not need a restart.
pub async fn handle_analytics(
    _session: RequireSession,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsState>, AppError> {
    if let Some(analytics) = state.analytics.get() {
        return Ok(Json(AnalyticsState::Loaded {
            analytics: analytics.clone(),
        }));
    }

    let path = state.config.dataset_file.clone();
    let rows = tokio::task::spawn_blocking({
        let path = path.clone();
        move || load_dataset(&path)
    })
    .await
    .map_err(anyhow::Error::from)??;

    let Some(rows) = rows else {
        warn!("Dataset not found at {}", path.display());
        return Ok(Json(AnalyticsState::NotLoaded {
            message: format!(
                "Could not load {}. Place the dataset file there and retry.",
                path.display()
            ),
        }));
    };

    let analytics = state
        .analytics
        .get_or_init(|| async move { summarize(&rows) })
        .await;

    Ok(Json(AnalyticsState::Loaded {
        analytics: analytics.clone(),
    }))
}
