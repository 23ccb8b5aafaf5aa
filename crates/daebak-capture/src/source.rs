//! The external utterance source capability.
//!
//! The actual speech recognizer (engine, platform API, or browser bridge)
//! lives outside this system. Adapters implement [`TranscriptSource`] for
//! start/stop control and forward the recognizer's transcript stream to
//! [`crate::UtteranceCapture`] as [`TranscriptEvent`]s.

use serde::{Deserialize, Serialize};

use daebak_core::error::Result;

/// One transcript update from the recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEvent {
    /// The recognized text segment.
    pub text: String,
    /// Whether the recognizer considers this segment final. Interim
    /// segments may be revised by later events; final segments never are.
    pub is_final: bool,
}

impl TranscriptEvent {
    /// A revisable interim segment.
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// A committed final segment.
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Start/stop control over the external recognizer.
///
/// Implementations deliver transcript updates out-of-band (callback, channel,
/// or event loop) by calling `UtteranceCapture::push_transcript` and
/// `UtteranceCapture::source_ended`; this trait only carries the control
/// surface the capture state machine needs.
pub trait TranscriptSource: Send {
    /// Whether the recognition capability exists at all on this platform.
    fn is_available(&self) -> bool;

    /// Begin a recognition session.
    fn begin(&mut self) -> Result<()>;

    /// Ask the recognizer to stop. Stopping is asynchronous on most
    /// platforms; events already in flight may still arrive and are
    /// discarded by the capture once it has left the Listening state.
    fn request_stop(&mut self);
}
