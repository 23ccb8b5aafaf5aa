//! Wire types for the interpretation service and their classification.
//!
//! The service replies with a loosely-typed JSON object; it is validated
//! into the tagged [`TurnOutcome`] right here at the boundary, so nothing
//! downstream ever inspects raw fields.

use serde::{Deserialize, Serialize};

use daebak_order::OrderDelta;

/// Request body of one conversation turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretRequest {
    pub user_input: String,
}

/// Raw reply of the interpretation service.
///
/// On `DONE`, the delta fields sit at the top level of the response object;
/// extra fields the contract does not cover are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpretReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub delta: OrderDelta,
}

/// The classified result of one conversation turn.
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The order is still being clarified; `message` is the service's
    /// follow-up question or reply.
    Continue { message: String },
    /// The order is resolved for this round; the delta describes it.
    Done { delta: OrderDelta },
    /// The service reported a failure, or the exchange itself failed.
    Error { message: String },
}

impl InterpretReply {
    /// Classify the reply into exactly one outcome.
    ///
    /// `CONTINUE` and `DONE` match exactly; every other status value,
    /// including the service's own `"error"`, is terminal.
    pub fn classify(self) -> TurnOutcome {
        match self.status.as_str() {
            "CONTINUE" => TurnOutcome::Continue {
                message: self.message.unwrap_or_default(),
            },
            "DONE" => TurnOutcome::Done { delta: self.delta },
            other => TurnOutcome::Error {
                message: self
                    .message
                    .unwrap_or_else(|| format!("service returned status {:?}", other)),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
