//! Utterance capture over an abstract transcript source.
//!
//! One capture produces one finalized utterance per user turn. The user (or
//! the source itself) toggles listening on and off; while listening, the
//! capture accumulates final transcript segments and keeps the latest interim
//! segment as a fallback for a capture that is cancelled mid-sentence.

use daebak_core::error::{DaebakError, Result};

use crate::source::{TranscriptEvent, TranscriptSource};
use crate::state::{CaptureState, StateMachine};

/// Captures a single utterance from an external speech source.
pub struct UtteranceCapture<S: TranscriptSource> {
    source: S,
    state: StateMachine,
    interim_text: String,
    final_text: String,
    utterance: Option<String>,
}

impl<S: TranscriptSource> UtteranceCapture<S> {
    /// Create a capture in the Idle state around the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: StateMachine::new(),
            interim_text: String::new(),
            final_text: String::new(),
            utterance: None,
        }
    }

    /// Returns the current capture state.
    pub fn state(&self) -> CaptureState {
        self.state.current()
    }

    /// Whether the capture is currently listening.
    pub fn is_listening(&self) -> bool {
        self.state.current() == CaptureState::Listening
    }

    /// A shared handle to the state machine, for UI observers.
    pub fn state_handle(&self) -> StateMachine {
        self.state.clone()
    }

    /// Start listening if Idle, or stop and finalize if Listening.
    ///
    /// If the source capability is unavailable, reports
    /// [`DaebakError::CaptureUnsupported`] and performs no state change.
    /// Returns the state after the toggle.
    pub fn toggle(&mut self) -> Result<CaptureState> {
        if !self.source.is_available() {
            return Err(DaebakError::CaptureUnsupported);
        }
        match self.state.current() {
            CaptureState::Idle => {
                self.interim_text.clear();
                self.final_text.clear();
                self.utterance = None;
                self.source.begin()?;
                self.state.transition(CaptureState::Listening)?;
            }
            CaptureState::Listening => {
                // User-initiated cancellation: stop the source, keep what
                // was heard so far.
                self.source.request_stop();
                self.finish()?;
            }
        }
        Ok(self.state.current())
    }

    /// Feed one transcript update from the source adapter.
    ///
    /// Final segments accumulate; interim segments replace each other.
    /// Events arriving while Idle (stragglers after a stop) are discarded.
    pub fn push_transcript(&mut self, event: TranscriptEvent) {
        if self.state.current() != CaptureState::Listening {
            tracing::debug!("Transcript event while idle; discarded");
            return;
        }
        if event.is_final {
            self.final_text.push_str(&event.text);
        } else {
            self.interim_text = event.text;
        }
    }

    /// Notify the capture that the source ended the session on its own
    /// (silence timeout, recognizer completion). Finalizes if Listening,
    /// otherwise does nothing.
    pub fn source_ended(&mut self) {
        if self.state.current() != CaptureState::Listening {
            return;
        }
        if let Err(e) = self.finish() {
            tracing::warn!(error = %e, "Capture state out of sync; resetting");
            self.state.reset();
        }
    }

    /// The finalized utterance of the last completed capture, if any.
    pub fn utterance(&self) -> Option<&str> {
        self.utterance.as_deref()
    }

    /// Consume the finalized utterance of the last completed capture.
    pub fn take_utterance(&mut self) -> Option<String> {
        self.utterance.take()
    }

    /// Finalize: final text wins, interim text is the fallback, empty last.
    fn finish(&mut self) -> Result<()> {
        self.state.transition(CaptureState::Idle)?;
        let text = if !self.final_text.is_empty() {
            self.final_text.clone()
        } else {
            self.interim_text.clone()
        };
        tracing::debug!(len = text.len(), "Utterance finalized");
        self.utterance = Some(text);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
