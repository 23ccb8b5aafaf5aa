//! Order assistant: central coordinator for one ordering page.
//!
//! Wires the conversation session to the order draft. Voice/typed input
//! flows through [`OrderAssistant::submit_utterance`]; manual menu-card
//! clicks and the on-load restore bypass the conversation and hit the draft
//! directly, through the same invariant-enforcing selection path.

use std::sync::{Arc, Mutex};

use daebak_order::{apply_delta, OrderDraft};

use crate::error::OrderChatError;
use crate::service::InterpretationService;
use crate::session::{ConversationSession, SessionStatus, Turn};
use crate::wire::TurnOutcome;

/// What the UI should do after a submitted utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the service's follow-up message and keep the conversation going.
    Reply { message: String },
    /// The order form has been filled from the resolved delta.
    OrderFilled,
    /// Show a failure message; the draft was not touched.
    Failed { message: String },
}

/// Coordinates the conversation session and the single order draft.
pub struct OrderAssistant {
    session: ConversationSession,
    draft: Mutex<OrderDraft>,
}

impl OrderAssistant {
    /// Create an assistant with an empty draft and a fresh session.
    pub fn new(service: Arc<dyn InterpretationService>) -> Self {
        Self {
            session: ConversationSession::new(service),
            draft: Mutex::new(OrderDraft::new()),
        }
    }

    /// Run one conversation turn and, if it resolved, reconcile the delta
    /// into the draft.
    ///
    /// The delta is applied while the draft lock is held, so its receipt
    /// and all reconciliation steps are atomic with respect to any reader.
    /// Local rejections (empty input, a turn already pending) surface as
    /// `Err`; everything the service decided comes back as an outcome.
    pub async fn submit_utterance(&self, text: &str) -> Result<SubmitOutcome, OrderChatError> {
        match self.session.send_turn(text).await? {
            TurnOutcome::Continue { message } => Ok(SubmitOutcome::Reply { message }),
            TurnOutcome::Done { delta } => {
                let mut draft = self.lock_draft()?;
                apply_delta(&mut draft, delta);
                Ok(SubmitOutcome::OrderFilled)
            }
            TurnOutcome::Error { message } => Ok(SubmitOutcome::Failed { message }),
        }
    }

    /// Menu card chosen by hand: select the menu and apply its starter set.
    pub fn choose_menu_card(&self, key: &str) -> Result<(), OrderChatError> {
        let mut draft = self.lock_draft()?;
        draft.select_menu_key(key, true);
        Ok(())
    }

    /// Restore a previously chosen menu on page load, leaving the item
    /// quantities as they were.
    pub fn restore_menu(&self, key: &str) -> Result<(), OrderChatError> {
        let mut draft = self.lock_draft()?;
        draft.select_menu_key(key, false);
        Ok(())
    }

    /// A snapshot of the draft for rendering.
    pub fn draft(&self) -> OrderDraft {
        self.draft
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// The conversation status marker.
    pub fn session_status(&self) -> SessionStatus {
        self.session.status()
    }

    /// The conversation history, oldest first.
    pub fn conversation(&self) -> Vec<Turn> {
        self.session.turns()
    }

    /// Start a fresh conversation. The draft is left alone; on a real page
    /// load the form re-renders from its persisted order and calls
    /// [`OrderAssistant::restore_menu`].
    pub fn reset_conversation(&self) -> Result<(), OrderChatError> {
        self.session.reset()
    }

    fn lock_draft(&self) -> Result<std::sync::MutexGuard<'_, OrderDraft>, OrderChatError> {
        self.draft
            .lock()
            .map_err(|e| OrderChatError::Internal(format!("draft lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
