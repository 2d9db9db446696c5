//! Prediction client: the single point of contact with the remote prediction backend.
//!
//! One POST per call to `{endpoint}/predict`. No retries, no caching, and the
//! transport's default timeout. Failures are folded into `PredictionError`, whose
//! `Display` is the message shown to the user.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::personnel::{FieldViolation, PersonnelAttributes};
use crate::models::prediction::{PredictionRequest, PredictionResult};

/// Used when the backend rejects a request without an `error` message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "API Error occurred";

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid personnel attributes: {}", describe_violations(.0))]
    Invalid(Vec<FieldViolation>),

    #[error("{0}")]
    BackendRejected(String),

    #[error("Cannot connect to the prediction service. Make sure the backend is running.")]
    Unreachable,

    #[error("An unexpected error occurred")]
    Unknown,
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: Option<String>,
}

/// Anything that can turn personnel attributes into a prediction.
/// `AppState` carries an `Arc<dyn Predictor>`; production uses `PredictionClient`.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(
        &self,
        attributes: &PersonnelAttributes,
    ) -> Result<PredictionResult, PredictionError>;
}

#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    predict_url: String,
}

impl PredictionClient {
    /// `base_url` is the backend root, without the `/predict` suffix.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            predict_url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl Predictor for PredictionClient {
    async fn predict(
        &self,
        attributes: &PersonnelAttributes,
    ) -> Result<PredictionResult, PredictionError> {
        attributes.validate().map_err(PredictionError::Invalid)?;

        let request_body = PredictionRequest::new(attributes);

        let response = self
            .client
            .post(&self.predict_url)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) if e.is_builder() => {
                warn!("Prediction request could not be built: {e}");
                return Err(PredictionError::Unknown);
            }
            Err(e) => {
                warn!("Prediction backend unreachable at {}: {e}", self.predict_url);
                return Err(PredictionError::Unreachable);
            }
        };

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BackendErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
            warn!("Prediction backend returned {status}: {message}");
            return Err(PredictionError::BackendRejected(message));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read prediction response body: {e}");
            PredictionError::Unknown
        })?;

        let result: PredictionResult = serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed prediction response: {e}");
            PredictionError::Unknown
        })?;

        debug!(
            "Prediction succeeded: leadership_potential={}, attrition_risk={}",
            result.leadership_potential, result.attrition_risk
        );

        Ok(result)
    }
}
