//! Assessment IPC commands — submission, progress, and view-state fetch.

use std::sync::Arc;

use tauri::State;

use crate::controller::ViewState;
use crate::core_state::CoreState;
use crate::form::{FormProgress, RawForm};
use crate::prediction::RiskModelClient;

/// Runs one full submission and returns the updated view state.
///
/// The submission gate guarantees at most one prediction request in flight;
/// a concurrent submit fails fast with a busy message instead of queueing.
/// On any failure the view reverts to Idle with the error surfaced, and the
/// same error text is returned to the caller.
#[tauri::command]
pub fn submit_assessment(
    form: RawForm,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewState, String> {
    let _guard = state.gate().try_acquire().map_err(|e| e.to_string())?;

    // Parse and flip to Submitting under the lock, then release it for the
    // network round-trip so the view stays readable while we wait.
    let input = {
        let mut controller = state.controller().map_err(|e| e.to_string())?;
        controller.begin_submit(&form).map_err(|e| e.to_string())?
    };

    let outcome = state.client().predict(&input);

    let mut controller = state.controller().map_err(|e| e.to_string())?;
    match controller.finish_submit(&input, outcome) {
        Ok(view) => Ok(view.clone()),
        Err(e) => Err(e.to_string()),
    }
}

/// Recomputes form completion; called on every input change.
#[tauri::command]
pub fn update_progress(
    form: RawForm,
    state: State<'_, Arc<CoreState>>,
) -> Result<FormProgress, String> {
    let mut controller = state.controller().map_err(|e| e.to_string())?;
    Ok(controller.update_progress(&form))
}

/// Current view state — phase, progress, results, error.
#[tauri::command]
pub fn get_view_state(state: State<'_, Arc<CoreState>>) -> Result<ViewState, String> {
    let controller = state.controller().map_err(|e| e.to_string())?;
    Ok(controller.view().clone())
}
