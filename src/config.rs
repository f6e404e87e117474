/// Application-level constants
pub const APP_NAME: &str = "Glucora";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default prediction endpoint — the local Flask model server.
pub const DEFAULT_PREDICTION_ENDPOINT: &str = "http://localhost:5000/predict";

/// Bounded wait for a prediction round-trip. The model is local, so
/// anything slower than this means the service is wedged, not thinking.
pub const PREDICTION_TIMEOUT_SECS: u64 = 30;

/// Get the prediction endpoint URL.
/// Overridable via GLUCORA_PREDICT_URL for non-default model hosts.
pub fn prediction_endpoint() -> String {
    std::env::var("GLUCORA_PREDICT_URL")
        .unwrap_or_else(|_| DEFAULT_PREDICTION_ENDPOINT.to_string())
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,glucora_lib=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_local_flask() {
        assert_eq!(DEFAULT_PREDICTION_ENDPOINT, "http://localhost:5000/predict");
    }

    #[test]
    fn endpoint_falls_back_to_default() {
        // Env override is exercised manually; unset in the test environment.
        if std::env::var("GLUCORA_PREDICT_URL").is_err() {
            assert_eq!(prediction_endpoint(), DEFAULT_PREDICTION_ENDPOINT);
        }
    }

    #[test]
    fn default_filter_includes_crate_debug() {
        assert!(default_log_filter().contains("glucora_lib=debug"));
    }

    #[test]
    fn app_name_is_glucora() {
        assert_eq!(APP_NAME, "Glucora");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}
