//! Assessment lifecycle — the submission state machine and its view state.
//!
//! The controller owns one explicit, serializable `ViewState`; rendering is
//! a pure projection from computed values into `ResultsView`, so the display
//! layer has no branching of its own. Phases over a submission:
//! Idle → Submitting → Displaying, back to Idle on any failure.
//!
//! The controller does not hold the HTTP client. A submission is split into
//! `begin_submit` / `finish_submit` so the caller performs the network
//! round-trip without holding the controller lock, keeping the Submitting
//! phase observable while the request is in flight.

use serde::{Deserialize, Serialize};

use crate::form::{self, AssessmentInput, FormError, FormProgress, RawForm};
use crate::prediction::{PredictionError, RiskModelClient};
use crate::recommendations::{self, RecommendationSet};
use crate::risk::{RiskPresentation, RiskScore, RiskTier};

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Where the current submission is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// No submission in flight; the submit control is enabled.
    Idle,
    /// Awaiting the prediction service; the submit control is disabled.
    Submitting,
    /// A result is on screen; the next submit overwrites it.
    Displaying,
}

/// The rendered results block — a pure projection of score and inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub score: RiskScore,
    pub tier: RiskTier,
    /// Needle angle for the semicircular gauge, 0°..=180°.
    pub gauge_rotation_deg: f64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub severity: String,
    /// At most six entries, in selection order.
    pub recommendations: Vec<String>,
}

/// Everything the display surface needs, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub phase: SubmissionPhase,
    pub progress: FormProgress,
    pub results: Option<ResultsView>,
    /// User-facing failure message, cleared on the next successful action.
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            progress: form::compute_progress(&RawForm::default()),
            results: None,
            error: None,
        }
    }
}

/// Projects computed values onto the results surface. No decisions are made
/// here — tier, presentation, and recommendations arrive precomputed.
pub fn render(
    score: RiskScore,
    tier: RiskTier,
    presentation: &RiskPresentation,
    recommendations: &RecommendationSet,
) -> ResultsView {
    ResultsView {
        score,
        tier,
        gauge_rotation_deg: score.gauge_rotation(),
        title: presentation.title.to_string(),
        description: presentation.description.to_string(),
        icon: presentation.icon.to_string(),
        severity: presentation.severity.to_string(),
        recommendations: recommendations.display().to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Why a submission was rejected or failed.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("An assessment is already being scored")]
    Busy,
    #[error("{0}")]
    InvalidInput(#[from] FormError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

/// Drives the form lifecycle and owns the view state.
#[derive(Default)]
pub struct AssessmentController {
    view: ViewState,
}

impl AssessmentController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Recomputes form completion into the view. Idempotent; called on
    /// every field-change event.
    pub fn update_progress(&mut self, form: &RawForm) -> FormProgress {
        let progress = form::compute_progress(form);
        self.view.progress = progress;
        progress
    }

    /// Starts a submission: parses and bounds-checks the raw form, then
    /// transitions Idle → Submitting.
    ///
    /// A parse failure blocks the submission entirely — the phase stays
    /// Idle and the error is surfaced in the view.
    pub fn begin_submit(&mut self, form: &RawForm) -> Result<AssessmentInput, SubmitError> {
        if self.view.phase == SubmissionPhase::Submitting {
            return Err(SubmitError::Busy);
        }

        let input = match form::parse_form(form) {
            Ok(input) => input,
            Err(e) => {
                self.view.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        self.view.phase = SubmissionPhase::Submitting;
        self.view.error = None;
        Ok(input)
    }

    /// Completes a submission with the prediction outcome.
    ///
    /// Success renders the results and transitions to Displaying; failure
    /// reverts to Idle, clears any prior results, and surfaces the error.
    /// The view is never left stuck in Submitting.
    pub fn finish_submit(
        &mut self,
        input: &AssessmentInput,
        outcome: Result<RiskScore, PredictionError>,
    ) -> Result<&ViewState, SubmitError> {
        match outcome {
            Ok(score) => {
                let tier = RiskTier::from_score(score);
                let recommendations = recommendations::select_recommendations(tier, input);
                self.view.results =
                    Some(render(score, tier, tier.presentation(), &recommendations));
                self.view.phase = SubmissionPhase::Displaying;
                // Completion log carries no field values, only the outcome.
                tracing::info!(
                    score = score.value(),
                    tier = tier.as_str(),
                    "risk assessment completed"
                );
                Ok(&self.view)
            }
            Err(e) => {
                self.view.phase = SubmissionPhase::Idle;
                self.view.results = None;
                self.view.error = Some(e.to_string());
                tracing::warn!(error = %e, "prediction request failed");
                Err(e.into())
            }
        }
    }

    /// Runs one full submission against a client. The input record is built
    /// fresh from the raw values and dropped afterwards.
    pub fn submit<C: RiskModelClient>(
        &mut self,
        form: &RawForm,
        client: &C,
    ) -> Result<&ViewState, SubmitError> {
        let input = self.begin_submit(form)?;
        let outcome = client.predict(&input);
        self.finish_submit(&input, outcome)
    }
}
