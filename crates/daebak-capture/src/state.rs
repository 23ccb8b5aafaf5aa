//! Capture state machine with thread-safe transitions.
//!
//! Enforces valid state transitions for the capture lifecycle:
//! - Idle -> Listening (start capture)
//! - Listening -> Idle (stop, either user-cancelled or source-completed)

use std::fmt;
use std::sync::{Arc, Mutex};

use daebak_core::error::DaebakError;

/// Operational state of utterance capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureState {
    /// No capture in progress. Ready to start.
    Idle,
    /// Actively receiving transcript events from the utterance source.
    Listening,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Listening => write!(f, "Listening"),
        }
    }
}

impl CaptureState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &CaptureState) -> bool {
        matches!(
            (self, target),
            (CaptureState::Idle, CaptureState::Listening)
                | (CaptureState::Listening, CaptureState::Idle)
        )
    }
}

/// Thread-safe state machine for capture state transitions.
///
/// Wraps `CaptureState` in an `Arc<Mutex<>>` so UI observers can share a
/// handle. All transitions are validated before being applied.
#[derive(Debug, Clone)]
pub struct StateMachine {
    state: Arc<Mutex<CaptureState>>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine initialized to `Idle`.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CaptureState::Idle)),
        }
    }

    /// Returns the current state.
    pub fn current(&self) -> CaptureState {
        *self.state.lock().expect("state mutex poisoned")
    }

    /// Attempt to transition to the target state.
    pub fn transition(&self, target: CaptureState) -> Result<(), DaebakError> {
        let mut state = self.state.lock().expect("state mutex poisoned");
        if state.can_transition_to(&target) {
            tracing::debug!("Capture state: {} -> {}", *state, target);
            *state = target;
            Ok(())
        } else {
            Err(DaebakError::Capture(format!(
                "Invalid state transition: {} -> {}",
                *state, target
            )))
        }
    }

    /// Force the state machine back to Idle (used for error recovery).
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("state mutex poisoned");
        tracing::warn!("Capture state machine reset to Idle from {}", *state);
        *state = CaptureState::Idle;
    }
}

// =============================================================================
// Tests
// =============================================================================
