use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};

use crate::analytics::WorkforceAnalytics;

use crate::config::Config;
use crate::dashboard::SubmissionTracker;
use crate::form::FormState;
use crate::prediction_client::Predictor;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    /// Pluggable prediction backend. Default: `PredictionClient` over HTTP.
    pub predictor: Arc<dyn Predictor>,
    pub form: Arc<RwLock<FormState>>,
    pub submission: Arc<SubmissionTracker>,
    /// Dataset summary, filled on the first successful load.
    pub analytics: Arc<OnceCell<WorkforceAnalytics>>,
}

impl AppState {
    pub fn new(config: Config, session: SessionStore, predictor: Arc<dyn Predictor>) -> Self {
        Self {
            config,
            session,
            predictor,
            form: Arc::new(RwLock::new(FormState::default())),
            submission: Arc::new(SubmissionTracker::default()),
            analytics: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the dashboard to a fresh form with nothing displayed.
    pub async fn reset_workspace(&self) {
        self.form.write().await.reset();
        self.submission.reset().await;
    }
}
