pub mod assessment;
pub mod validation;

use std::sync::Arc;

use tauri::State;

use crate::core_state::{ActiveSubmission, CoreState};
use crate::prediction::RiskModelClient;

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Prediction service availability for the frontend status indicator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ModelStatus {
    /// Whether the prediction endpoint answered at all.
    pub reachable: bool,
    /// The endpoint being probed.
    pub endpoint: String,
    /// Whether a submission is currently being scored.
    pub busy: bool,
    /// The in-flight submission, when busy.
    pub active: Option<ActiveSubmission>,
    /// Human-readable status summary.
    pub summary: String,
}

/// Proactive check of the prediction service.
///
/// Called by the frontend on app load to show whether scoring is functional
/// before the user fills in the whole form.
#[tauri::command]
pub fn check_model_status(state: State<'_, Arc<CoreState>>) -> ModelStatus {
    let client = state.client();
    let reachable = client.is_reachable();
    let busy = state.gate().is_busy();

    let summary = if busy {
        "Scoring in progress".to_string()
    } else if reachable {
        "Prediction service ready".to_string()
    } else {
        format!(
            "Prediction service not detected at {} — start the model server",
            client.endpoint(),
        )
    };

    ModelStatus {
        reachable,
        endpoint: client.endpoint().to_string(),
        busy,
        active: state.gate().active_submission(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_returns_ok() {
        assert_eq!(health_check(), "ok");
    }

    #[test]
    fn model_status_serializes() {
        let status = ModelStatus {
            reachable: false,
            endpoint: "http://localhost:5000/predict".into(),
            busy: false,
            active: None,
            summary: "Prediction service not detected".into(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["reachable"], false);
        assert_eq!(json["endpoint"], "http://localhost:5000/predict");
    }
}
