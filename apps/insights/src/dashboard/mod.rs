//! Submission lifecycle behind the dashboard's analyze button.
//!
//! `Idle -> Submitting -> Displayed | Failed`, re-entered on every submit. At most
//! one prediction is in flight; a second submit while one runs is refused rather
//! than queued.

pub mod handlers;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::assessment::{interpret, Assessment};
use crate::errors::AppError;
use crate::models::personnel::PersonnelAttributes;
use crate::prediction_client::Predictor;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Displayed { assessment: Assessment },
    Failed { message: String },
}

#[derive(Debug)]
struct Slot {
    state: SubmissionState,
    // Bumped by `reset`; a submission started under an older epoch does not publish.
    epoch: u64,
}

/// Status and in-flight flag live under one lock, so `Submitting` is reported
/// exactly while a prediction is outstanding.
#[derive(Debug)]
pub struct SubmissionTracker {
    slot: Mutex<Slot>,
}

impl Default for SubmissionTracker {
    fn default() -> Self {
        Self {
            slot: Mutex::new(Slot {
                state: SubmissionState::Idle,
                epoch: 0,
            }),
        }
    }
}

impl SubmissionTracker {
    pub async fn current(&self) -> SubmissionState {
        self.slot.lock().await.state.clone()
    }

    /// Forgets any displayed result or error. An outstanding prediction keeps the
    /// status at `Submitting` and lands on `Idle` when it completes.
    pub async fn reset(&self) {
        let mut slot = self.slot.lock().await;
        slot.epoch += 1;
        if slot.state != SubmissionState::Submitting {
            slot.state = SubmissionState::Idle;
        }
    }

    /// Runs one prediction to completion and records the outcome.
    /// Prediction failures become `Failed`; only an overlapping submit is an error.
    pub async fn submit(
        &self,
        predictor: &dyn Predictor,
        attributes: PersonnelAttributes,
    ) -> Result<SubmissionState, AppError> {
        let epoch = {
            let mut slot = self.slot.lock().await;
            if slot.state == SubmissionState::Submitting {
                return Err(AppError::Conflict(
                    "A submission is already in progress".to_string(),
                ));
            }
            slot.state = SubmissionState::Submitting;
            slot.epoch
        };

        let next = match predictor.predict(&attributes).await {
            Ok(result) => {
                info!(
                    "Prediction displayed: leadership={}, attrition={}",
                    result.leadership_potential, result.attrition_risk
                );
                SubmissionState::Displayed {
                    assessment: interpret(&result),
                }
            }
            Err(e) => {
                warn!("Prediction failed: {e}");
                SubmissionState::Failed {
                    message: e.to_string(),
                }
            }
        };

        let mut slot = self.slot.lock().await;
        slot.state = if slot.epoch == epoch {
            next.clone()
        } else {
            SubmissionState::Idle
        };
        Ok(next)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::models::prediction::PredictionResult;
    use crate::prediction_client::PredictionError;

    /// Predictor double shared with the router tests.
    pub(crate) enum StubPredictor {
        Answer(&'static str, &'static str),
        Rejected(&'static str),
        Unreachable,
    }

    #[async_trait]
    impl Predictor for StubPredictor {
        async fn predict(
            &self,
            _attributes: &PersonnelAttributes,
        ) -> Result<PredictionResult, PredictionError> {
            match self {
                StubPredictor::Answer(leadership, attrition) => Ok(PredictionResult {
                    leadership_potential: leadership.to_string(),
                    attrition_risk: attrition.to_string(),
                }),
                StubPredictor::Rejected(msg) => Err(PredictionError::BackendRejected(msg.to_string())),
                StubPredictor::Unreachable => Err(PredictionError::Unreachable),
            }
        }
    }

    /// Holds every prediction until released.
    struct GatedPredictor {
        release: Notify,
    }

    #[async_trait]
    impl Predictor for GatedPredictor {
        async fn predict(
            &self,
            _attributes: &PersonnelAttributes,
        ) -> Result<PredictionResult, PredictionError> {
            self.release.notified().await;
            Ok(PredictionResult {
                leadership_potential: "Medium".to_string(),
                attrition_risk: "Medium".to_string(),
            })
        }
    }

    async fn is_submitting(tracker: &SubmissionTracker) -> bool {
        tracker.current().await == SubmissionState::Submitting
    }

    async fn wait_until_submitting(tracker: &SubmissionTracker) {
        while tracker.current().await != SubmissionState::Submitting {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let tracker = SubmissionTracker::default();
        assert_eq!(tracker.current().await, SubmissionState::Idle);
        assert!(!is_submitting(&tracker).await);
    }

    #[tokio::test]
    async fn test_success_displays_assessment() {
        let tracker = SubmissionTracker::default();
        let state = tracker
            .submit(&StubPredictor::Answer("high", "LOW"), PersonnelAttributes::default())
            .await
            .unwrap();

        match &state {
            SubmissionState::Displayed { assessment } => {
                assert_eq!(assessment.leadership.title, "High Leadership Potential");
                assert_eq!(assessment.attrition.title, "Low Attrition Risk");
            }
            other => panic!("unexpected state {other:?}"),
        }
        assert_eq!(tracker.current().await, state);
    }

    #[tokio::test]
    async fn test_rejection_message_is_surfaced() {
        let tracker = SubmissionTracker::default();
        let state = tracker
            .submit(
                &StubPredictor::Rejected("validation failed"),
                PersonnelAttributes::default(),
            )
            .await
            .unwrap();
        assert_eq!(
            state,
            SubmissionState::Failed {
                message: "validation failed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_leaves_form_submittable() {
        let tracker = SubmissionTracker::default();
        let state = tracker
            .submit(&StubPredictor::Unreachable, PersonnelAttributes::default())
            .await
            .unwrap();
        assert!(matches!(state, SubmissionState::Failed { ref message } if message.starts_with("Cannot connect")));
        assert!(!is_submitting(&tracker).await);

        let retry = tracker
            .submit(&StubPredictor::Answer("Low", "High"), PersonnelAttributes::default())
            .await
            .unwrap();
        assert!(matches!(retry, SubmissionState::Displayed { .. }));
    }

    #[tokio::test]
    async fn test_overlapping_submit_is_refused() {
        let tracker = Arc::new(SubmissionTracker::default());
        let predictor = Arc::new(GatedPredictor {
            release: Notify::new(),
        });

        let first = {
            let tracker = tracker.clone();
            let predictor = predictor.clone();
            tokio::spawn(async move {
                tracker
                    .submit(predictor.as_ref(), PersonnelAttributes::default())
                    .await
            })
        };
        wait_until_submitting(&tracker).await;
        assert!(is_submitting(&tracker).await);

        let second = tracker
            .submit(predictor.as_ref(), PersonnelAttributes::default())
            .await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        predictor.release.notify_one();
        let state = first.await.unwrap().unwrap();
        assert!(matches!(state, SubmissionState::Displayed { .. }));
        assert!(!is_submitting(&tracker).await);
    }

    #[tokio::test]
    async fn test_reset_during_submission_discards_late_result() {
        let tracker = Arc::new(SubmissionTracker::default());
        let predictor = Arc::new(GatedPredictor {
            release: Notify::new(),
        });

        let first = {
            let tracker = tracker.clone();
            let predictor = predictor.clone();
            tokio::spawn(async move {
                tracker
                    .submit(predictor.as_ref(), PersonnelAttributes::default())
                    .await
            })
        };
        wait_until_submitting(&tracker).await;
        tracker.reset().await;

        // Still outstanding: status and flag agree until the request finishes.
        assert_eq!(tracker.current().await, SubmissionState::Submitting);
        assert!(is_submitting(&tracker).await);

        predictor.release.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(tracker.current().await, SubmissionState::Idle);
        assert!(!is_submitting(&tracker).await);
    }
}
