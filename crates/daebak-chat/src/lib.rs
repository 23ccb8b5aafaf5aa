//! Conversational order assembly for the Daebak dinner service.
//!
//! Owns the turn-by-turn exchange with the remote interpretation service,
//! classifies its loosely-typed replies into tagged outcomes at the wire
//! boundary, and reconciles resolved order deltas into the shared
//! [`daebak_order::OrderDraft`].

pub mod assistant;
pub mod error;
pub mod service;
pub mod session;
pub mod wire;

pub use assistant::{OrderAssistant, SubmitOutcome};
pub use error::OrderChatError;
pub use service::{HttpInterpretationService, InterpretationService};
pub use session::{ConversationSession, SessionStatus, Turn};
pub use wire::{InterpretReply, InterpretRequest, TurnOutcome};
