//! HTTP client for the local risk prediction service.
//!
//! The model backend exposes a single POST endpoint accepting the eight
//! assessment fields as JSON and answering `{"risk": <probability>}`.
//! Every failure mode — connection refused, timeout, non-2xx, bad body —
//! surfaces as a distinct `PredictionError` instead of a default score.

use std::sync::Mutex;

use serde::Deserialize;

use crate::config;
use crate::form::AssessmentInput;
use crate::risk::RiskScore;

/// Errors from the prediction service boundary.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Could not reach the prediction service at {0}")]
    Connection(String),
    #[error("Prediction request timed out after {0}s")]
    Timeout(u64),
    #[error("Prediction service error (HTTP {status}): {body}")]
    Http { status: u16, body: String },
    #[error("Prediction response was malformed: {0}")]
    MalformedResponse(String),
}

/// Seam between the controller and the scoring service.
///
/// Production uses `HttpPredictionClient`; tests swap in
/// `MockRiskModelClient` to drive both result branches.
pub trait RiskModelClient {
    /// Scores one submission; `round(probability * 100)` as a percentage.
    fn predict(&self, input: &AssessmentInput) -> Result<RiskScore, PredictionError>;

    /// Whether the service answers at all. Any HTTP response counts —
    /// reachability, not correctness.
    fn is_reachable(&self) -> bool;
}

/// Response body from the model backend.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    risk: f64,
}

/// Blocking HTTP client for the prediction endpoint.
pub struct HttpPredictionClient {
    endpoint: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpPredictionClient {
    /// Create a client for the given endpoint with a bounded request timeout.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the configured endpoint (env override or local default).
    pub fn from_config() -> Self {
        Self::new(
            &config::prediction_endpoint(),
            config::PREDICTION_TIMEOUT_SECS,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_transport_error(&self, e: &reqwest::Error) -> PredictionError {
        if e.is_connect() {
            PredictionError::Connection(self.endpoint.clone())
        } else if e.is_timeout() {
            PredictionError::Timeout(self.timeout_secs)
        } else {
            PredictionError::MalformedResponse(e.to_string())
        }
    }
}

impl RiskModelClient for HttpPredictionClient {
    fn predict(&self, input: &AssessmentInput) -> Result<RiskScore, PredictionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(PredictionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PredictResponse = response
            .json()
            .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;

        score_from_response(parsed)
    }

    fn is_reachable(&self) -> bool {
        // Any HTTP answer (405 on GET included) proves the server is up;
        // only transport failures mean unreachable.
        self.client.get(&self.endpoint).send().is_ok()
    }
}

/// Validates the response probability before it becomes a score.
fn score_from_response(response: PredictResponse) -> Result<RiskScore, PredictionError> {
    if !response.risk.is_finite() || !(0.0..=1.0).contains(&response.risk) {
        return Err(PredictionError::MalformedResponse(format!(
            "risk probability {} outside [0,1]",
            response.risk,
        )));
    }
    Ok(RiskScore::from_probability(response.risk))
}

/// Mock model client for tests — configurable outcome, records the last
/// submission it was asked to score. The outcome can be changed midway
/// through a test to exercise recovery paths.
pub struct MockRiskModelClient {
    probability: Mutex<Option<f64>>,
    last_input: Mutex<Option<AssessmentInput>>,
}

impl MockRiskModelClient {
    /// Mock that answers with the given probability.
    pub fn with_probability(probability: f64) -> Self {
        Self {
            probability: Mutex::new(Some(probability)),
            last_input: Mutex::new(None),
        }
    }

    /// Mock that fails as if the network were down.
    pub fn unreachable() -> Self {
        Self {
            probability: Mutex::new(None),
            last_input: Mutex::new(None),
        }
    }

    /// Change the outcome for subsequent calls (also restores reachability).
    pub fn set_probability(&self, probability: f64) {
        if let Ok(mut guard) = self.probability.lock() {
            *guard = Some(probability);
        }
    }

    /// The last submission passed to `predict`, if any.
    pub fn last_input(&self) -> Option<AssessmentInput> {
        self.last_input.lock().ok().and_then(|g| g.clone())
    }

    fn outcome(&self) -> Option<f64> {
        self.probability.lock().ok().and_then(|g| *g)
    }
}

impl RiskModelClient for MockRiskModelClient {
    fn predict(&self, input: &AssessmentInput) -> Result<RiskScore, PredictionError> {
        if let Ok(mut guard) = self.last_input.lock() {
            *guard = Some(input.clone());
        }
        match self.outcome() {
            Some(p) => score_from_response(PredictResponse { risk: p }),
            None => Err(PredictionError::Connection(
                "http://localhost:5000/predict".to_string(),
            )),
        }
    }

    fn is_reachable(&self) -> bool {
        self.outcome().is_some()
    }
}
