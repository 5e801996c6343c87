//! Interaction controller
//!
//! Drives one form submission through
//! `Idle → Validating → Classifying → Fetching → Presenting → Persisting → Idle`.
//! Validation failures and empty catalog results leave early; every exit path
//! returns the controller to `Idle` so the form can be submitted again.

use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    db::RecommendationStore,
    error::{AppError, AppResult},
    models::{Notice, SubmissionForm, SubmissionPhase, SubmissionReport, SubmissionStatus},
    services::{recommendations::RecommendationService, sentiment::SentimentClassifier},
};

pub struct SubmissionController {
    classifier: SentimentClassifier,
    recommender: RecommendationService,
    store: RecommendationStore,
    phase: Mutex<SubmissionPhase>,
}

/// Puts the controller back to `Idle` when the submission ends, however it ends
struct PhaseGuard<'a> {
    phase: &'a Mutex<SubmissionPhase>,
}

impl PhaseGuard<'_> {
    fn advance(&self, next: SubmissionPhase) {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        let previous = *phase;
        *phase = next;
        tracing::debug!(from = ?previous, to = ?next, "Submission phase change");
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.advance(SubmissionPhase::Idle);
    }
}

impl SubmissionController {
    pub fn new(
        classifier: SentimentClassifier,
        recommender: RecommendationService,
        store: RecommendationStore,
    ) -> Self {
        Self {
            classifier,
            recommender,
            store,
            phase: Mutex::new(SubmissionPhase::Idle),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        let phase = *self.phase.lock().unwrap_or_else(|e| e.into_inner());
        SubmissionStatus::from(phase)
    }

    /// Claims the form for a new submission, or reports that one is running
    fn begin(&self) -> AppResult<PhaseGuard<'_>> {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        if *phase != SubmissionPhase::Idle {
            return Err(AppError::Busy);
        }
        *phase = SubmissionPhase::Validating;
        Ok(PhaseGuard { phase: &self.phase })
    }

    /// Handles one press of the submit button
    ///
    /// Invalid input is returned as an error before anything else happens. An
    /// empty catalog answer produces a report with a "No Results" notice. A
    /// failed save adds a warning notice; the recommendations are still
    /// returned. Cancelling `cancel` before the save starts abandons the
    /// submission without saving.
    pub async fn submit(
        &self,
        form: &SubmissionForm,
        cancel: CancellationToken,
    ) -> AppResult<SubmissionReport> {
        let guard = self.begin()?;
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submission", submission_id = %submission_id);

        self.run(&guard, submission_id, form, cancel)
            .instrument(span)
            .await
    }

    async fn run(
        &self,
        guard: &PhaseGuard<'_>,
        submission_id: Uuid,
        form: &SubmissionForm,
        cancel: CancellationToken,
    ) -> AppResult<SubmissionReport> {
        let submission = form.validate().map_err(|e| {
            tracing::info!(field = e.field(), "Submission rejected");
            e
        })?;

        guard.advance(SubmissionPhase::Classifying);
        let sentiment = self.classifier.classify(&submission.feeling);
        tracing::info!(
            sentiment = %sentiment,
            age = submission.user.age,
            "Mood detected"
        );
        let mut report = SubmissionReport::new(submission_id, sentiment);

        guard.advance(SubmissionPhase::Fetching);
        let recommendations = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Submission cancelled while fetching");
                return Err(AppError::Cancelled);
            }
            recommendations = self.recommender.recommend(sentiment, submission.user.age) => recommendations,
        };

        if recommendations.is_empty() {
            report.notices.push(Notice::no_results());
            return Ok(report);
        }

        guard.advance(SubmissionPhase::Presenting);
        report.recommendations = recommendations;

        if cancel.is_cancelled() {
            tracing::info!("Submission cancelled before saving");
            return Err(AppError::Cancelled);
        }

        guard.advance(SubmissionPhase::Persisting);
        match self
            .store
            .append(&report.recommendations, sentiment, &submission.user)
            .await
        {
            Ok(saved) => report.saved = saved,
            Err(e) => {
                tracing::warn!(error = %e, "Could not save recommendations");
                report.notices.push(Notice::save_failed(&e));
            }
        }

        Ok(report)
    }
}
