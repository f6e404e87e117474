pub mod commands;
pub mod config;
pub mod controller;
pub mod core_state;
pub mod form;
pub mod prediction;
pub mod recommendations;
pub mod risk;
pub mod validation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Glucora starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::check_model_status,
            commands::assessment::submit_assessment,
            commands::assessment::update_progress,
            commands::assessment::get_view_state,
            commands::validation::validate_field,
            commands::validation::format_field,
            commands::validation::get_field_specs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Glucora");
}
