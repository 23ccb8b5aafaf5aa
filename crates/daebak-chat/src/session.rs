//! Conversation session: the turn-by-turn exchange with the service.
//!
//! A session serializes turns strictly: at most one exchange is in flight,
//! and a second submit while one is pending is rejected locally without
//! touching the service. Replies are classified at the wire boundary; this
//! module only records history and moves the status marker.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use uuid::Uuid;

use crate::error::OrderChatError;
use crate::service::InterpretationService;
use crate::wire::TurnOutcome;

/// One utterance-and-reply exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// What the user said or typed.
    pub utterance: String,
    /// The service's reply text, or its terminal status for a resolved or
    /// failed round.
    pub reply: String,
    /// When the turn completed, epoch seconds.
    pub at: i64,
}

/// Whether the conversation is still being clarified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Accepting turns; the order is not resolved yet.
    Open,
    /// The last turn resolved the order.
    ClosedSuccess,
    /// The last turn failed.
    ClosedError,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Open => write!(f, "Open"),
            SessionStatus::ClosedSuccess => write!(f, "ClosedSuccess"),
            SessionStatus::ClosedError => write!(f, "ClosedError"),
        }
    }
}

#[derive(Debug)]
struct SessionState {
    id: Uuid,
    started_at: i64,
    last_turn_at: i64,
    turns: Vec<Turn>,
    status: SessionStatus,
}

impl SessionState {
    fn new() -> Self {
        let now = Local::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            last_turn_at: now,
            turns: Vec::new(),
            status: SessionStatus::Open,
        }
    }
}

/// The ordered sequence of turns exchanged with the interpretation service.
///
/// Closing is a marker, not a teardown: a closed session accepts the next
/// turn and reopens, which is how a customer starts a new clarification
/// round after a resolved or failed one. [`ConversationSession::reset`] is
/// the explicit fresh-session path (the original UI's page reload).
pub struct ConversationSession {
    service: Arc<dyn InterpretationService>,
    state: Mutex<SessionState>,
    in_flight: AtomicBool,
}

impl ConversationSession {
    /// Create an open session with no turns.
    pub fn new(service: Arc<dyn InterpretationService>) -> Self {
        Self {
            service,
            state: Mutex::new(SessionState::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Send one utterance to the service and classify the result.
    ///
    /// Rejected locally, without a service call, when the trimmed utterance
    /// is empty or another turn is still pending. Transport and parse
    /// failures surface as [`TurnOutcome::Error`], never as `Err`: the
    /// session absorbs them, marks itself ClosedError, and does not retry.
    pub async fn send_turn(&self, utterance: &str) -> Result<TurnOutcome, OrderChatError> {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Err(OrderChatError::EmptyUtterance);
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(OrderChatError::RequestInFlight);
        }

        let result = self.exchange(utterance).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn exchange(&self, utterance: &str) -> Result<TurnOutcome, OrderChatError> {
        // A closed session conceptually reopens when it accepts a new turn.
        {
            let mut state = self.lock_state()?;
            state.status = SessionStatus::Open;
        }

        let reply = self.service.interpret(utterance).await;
        let now = Local::now().timestamp();

        let mut state = self.lock_state()?;
        state.last_turn_at = now;

        let outcome = match reply {
            Ok(reply) => {
                let raw_message = reply.message.clone();
                match reply.classify() {
                    TurnOutcome::Continue { message } => {
                        state.turns.push(Turn {
                            utterance: utterance.to_string(),
                            reply: message.clone(),
                            at: now,
                        });
                        state.status = SessionStatus::Open;
                        TurnOutcome::Continue { message }
                    }
                    TurnOutcome::Done { delta } => {
                        state.turns.push(Turn {
                            utterance: utterance.to_string(),
                            reply: raw_message.unwrap_or_else(|| "DONE".to_string()),
                            at: now,
                        });
                        state.status = SessionStatus::ClosedSuccess;
                        tracing::info!(session_id = %state.id, "Conversation resolved");
                        TurnOutcome::Done { delta }
                    }
                    TurnOutcome::Error { message } => {
                        state.turns.push(Turn {
                            utterance: utterance.to_string(),
                            reply: message.clone(),
                            at: now,
                        });
                        state.status = SessionStatus::ClosedError;
                        tracing::warn!(session_id = %state.id, %message, "Service reported an error");
                        TurnOutcome::Error { message }
                    }
                }
            }
            Err(e) => {
                let message = e.to_string();
                state.turns.push(Turn {
                    utterance: utterance.to_string(),
                    reply: message.clone(),
                    at: now,
                });
                state.status = SessionStatus::ClosedError;
                tracing::warn!(session_id = %state.id, error = %message, "Exchange failed");
                TurnOutcome::Error { message }
            }
        };

        Ok(outcome)
    }

    /// Discard all history and start a fresh session.
    pub fn reset(&self) -> Result<(), OrderChatError> {
        let mut state = self.lock_state()?;
        tracing::debug!(session_id = %state.id, "Session reset");
        *state = SessionState::new();
        Ok(())
    }

    // -- Read access --

    /// The session id. Changes on [`ConversationSession::reset`].
    pub fn id(&self) -> Uuid {
        self.state.lock().map(|s| s.id).unwrap_or_else(|_| Uuid::nil())
    }

    /// The current status marker.
    pub fn status(&self) -> SessionStatus {
        self.state
            .lock()
            .map(|s| s.status)
            .unwrap_or(SessionStatus::ClosedError)
    }

    /// A snapshot of the turn history, oldest first.
    pub fn turns(&self) -> Vec<Turn> {
        self.state
            .lock()
            .map(|s| s.turns.clone())
            .unwrap_or_default()
    }

    /// How many turns have completed.
    pub fn turn_count(&self) -> usize {
        self.state.lock().map(|s| s.turns.len()).unwrap_or(0)
    }

    /// When the session was created, epoch seconds.
    pub fn started_at(&self) -> i64 {
        self.state.lock().map(|s| s.started_at).unwrap_or(0)
    }

    /// When the most recent turn completed, epoch seconds.
    pub fn last_turn_at(&self) -> i64 {
        self.state.lock().map(|s| s.last_turn_at).unwrap_or(0)
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, SessionState>, OrderChatError> {
        self.state
            .lock()
            .map_err(|e| OrderChatError::Internal(format!("session lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
