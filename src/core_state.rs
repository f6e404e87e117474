//! Shared application state for the IPC layer.
//!
//! `CoreState` is wrapped in an `Arc` at startup and managed by the Tauri
//! builder. It holds the assessment controller and the submission gate —
//! the gate enforces the resource-exclusivity policy of at most one
//! in-flight prediction request at a time, independently of the UI
//! disabling its submit control.

use std::sync::{Mutex, MutexGuard, TryLockError};

use serde::{Deserialize, Serialize};

use crate::controller::AssessmentController;
use crate::prediction::HttpPredictionClient;

// ═══════════════════════════════════════════════════════════
// SubmissionGate — exclusive in-flight prediction token
// ═══════════════════════════════════════════════════════════

/// Snapshot of the submission currently being scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSubmission {
    /// When the submission started (ISO 8601).
    pub started_at: String,
}

/// Errors from gate operations.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("An assessment is already being scored")]
    Busy,
    #[error("Internal lock error")]
    LockPoisoned,
}

/// Exclusive-access controller for the prediction round-trip.
///
/// A second submit while one is in flight observes `Busy` instead of
/// queueing behind the network call. The guard is RAII — dropping it
/// releases the gate and clears the active snapshot, so no failure path
/// can leave the gate held.
pub struct SubmissionGate {
    lock: Mutex<()>,
    active: Mutex<Option<ActiveSubmission>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            active: Mutex::new(None),
        }
    }

    /// Try to claim the gate without blocking.
    pub fn try_acquire(&self) -> Result<SubmissionGuard<'_>, GateError> {
        let guard = match self.lock.try_lock() {
            Ok(g) => g,
            Err(TryLockError::WouldBlock) => return Err(GateError::Busy),
            Err(TryLockError::Poisoned(_)) => return Err(GateError::LockPoisoned),
        };
        self.set_active();
        Ok(SubmissionGuard {
            _guard: guard,
            gate: self,
        })
    }

    /// Is a prediction currently in flight?
    pub fn is_busy(&self) -> bool {
        self.lock.try_lock().is_err()
    }

    /// The in-flight submission, if any.
    pub fn active_submission(&self) -> Option<ActiveSubmission> {
        self.active.lock().ok()?.clone()
    }

    // ── Internal ────────────────────────────────────────────

    fn set_active(&self) {
        if let Ok(mut active) = self.active.lock() {
            *active = Some(ActiveSubmission {
                started_at: chrono::Utc::now().to_rfc3339(),
            });
        }
    }

    fn clear_active(&self) {
        if let Ok(mut active) = self.active.lock() {
            *active = None;
        }
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII token for the in-flight prediction.
pub struct SubmissionGuard<'a> {
    _guard: MutexGuard<'a, ()>,
    gate: &'a SubmissionGate,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.gate.clear_active();
    }
}

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

/// Shared state behind every IPC command.
///
/// The controller lock is held only while mutating view state; the network
/// round-trip happens between `begin_submit` and `finish_submit` with the
/// lock released, so the Submitting phase stays readable.
pub struct CoreState {
    controller: Mutex<AssessmentController>,
    client: HttpPredictionClient,
    gate: SubmissionGate,
}

impl CoreState {
    /// Create state wired to the configured prediction endpoint.
    pub fn new() -> Self {
        Self {
            controller: Mutex::new(AssessmentController::new()),
            client: HttpPredictionClient::from_config(),
            gate: SubmissionGate::new(),
        }
    }

    /// Borrow the controller. Lock poisoning is reported, not propagated
    /// as a panic, since no command leaves the controller inconsistent.
    pub fn controller(&self) -> Result<MutexGuard<'_, AssessmentController>, GateError> {
        self.controller.lock().map_err(|_| GateError::LockPoisoned)
    }

    pub fn client(&self) -> &HttpPredictionClient {
        &self.client
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gate_is_idle() {
        let gate = SubmissionGate::new();
        assert!(!gate.is_busy());
        assert!(gate.active_submission().is_none());
    }

    #[test]
    fn acquire_marks_gate_busy_with_snapshot() {
        let gate = SubmissionGate::new();
        let guard = gate.try_acquire().unwrap();
        assert!(gate.is_busy());
        assert!(!gate.active_submission().unwrap().started_at.is_empty());

        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.active_submission().is_none());
    }

    #[test]
    fn second_acquire_observes_busy() {
        let gate = SubmissionGate::new();
        let _guard = gate.try_acquire().unwrap();
        assert!(matches!(gate.try_acquire(), Err(GateError::Busy)));
    }

    #[test]
    fn gate_is_reusable_after_release() {
        let gate = SubmissionGate::new();
        {
            let _guard = gate.try_acquire().unwrap();
        }
        assert!(gate.try_acquire().is_ok());
    }

    #[test]
    fn core_state_starts_idle() {
        let state = CoreState::new();
        assert!(!state.gate().is_busy());
        let controller = state.controller().unwrap();
        assert!(controller.view().results.is_none());
    }
}
