use std::time::Instant;

use tracing::Instrument;
use uuid::Uuid;

use crate::models::recommendation::Outcome;
use crate::models::sample::FormFields;
use crate::services::dispatcher::Dispatcher;
use crate::services::validation::{Rejection, ValidationPolicy};
use crate::services::{interpreter, normalizer};
use crate::ui::surface::{SharedSurface, SubmissionGuard};

/// Runs one submission end to end: normalize, dispatch, interpret, render.
///
/// The submit button is the only guard against overlapping submissions.
/// [`trigger`](Self::trigger) honours it; [`submit`](Self::submit) does not,
/// and when two submissions overlap the one that settles last owns the
/// surface.
pub struct SubmissionController<D> {
    dispatcher: D,
    surface: SharedSurface,
    policy: ValidationPolicy,
}

impl<D: Dispatcher> SubmissionController<D> {
    pub fn new(dispatcher: D, surface: SharedSurface, policy: ValidationPolicy) -> Self {
        Self {
            dispatcher,
            surface,
            policy,
        }
    }

    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Submit through the button. Refused while the button is disabled.
    pub async fn trigger(&self, form: &FormFields) -> Result<Outcome, SubmitError> {
        let guard = SubmissionGuard::try_acquire(&self.surface).ok_or(SubmitError::InProgress)?;
        self.run(guard, form)
            .instrument(tracing::info_span!("submission", id = %Uuid::new_v4()))
            .await
    }

    /// Submit regardless of the button state.
    pub async fn submit(&self, form: &FormFields) -> Result<Outcome, SubmitError> {
        let guard = SubmissionGuard::acquire(&self.surface);
        self.run(guard, form)
            .instrument(tracing::info_span!("submission", id = %Uuid::new_v4()))
            .await
    }

    async fn run(&self, guard: SubmissionGuard<'_>, form: &FormFields) -> Result<Outcome, SubmitError> {
        metrics::counter!("submissions_total").increment(1);

        let sample = normalizer::normalize(form);
        if let Err(rejection) = self.policy.check(&sample) {
            metrics::counter!("submissions_rejected_total").increment(1);
            tracing::warn!(%rejection, "Submission rejected before dispatch");
            interpreter::render_rejection(&rejection, &mut guard.surface());
            return Err(SubmitError::Rejected(rejection));
        }

        let started = Instant::now();
        let exchange = self.dispatcher.dispatch(&sample).await;
        metrics::histogram!("dispatch_duration_seconds").record(started.elapsed().as_secs_f64());

        let outcome = interpreter::interpret(exchange);
        metrics::counter!("submission_outcomes_total", "outcome" => outcome.kind()).increment(1);
        tracing::info!(outcome = outcome.kind(), "Submission settled");

        interpreter::render(&outcome, &mut guard.surface());
        Ok(outcome)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    InProgress,

    #[error("Invalid input: {0}")]
    Rejected(Rejection),

    #[error("No submit handler is bound to the page")]
    Unbound,

    #[error("Submission task failed: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}
