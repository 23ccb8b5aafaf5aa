//! The remote interpretation service boundary.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::OrderChatError;
use crate::wire::{InterpretReply, InterpretRequest};

/// One turn of interpretation: utterance in, loosely-typed reply out.
///
/// The conversation history is kept on the service side, keyed by user, so
/// a turn carries nothing but the utterance.
#[async_trait]
pub trait InterpretationService: Send + Sync {
    async fn interpret(&self, utterance: &str) -> Result<InterpretReply, OrderChatError>;
}

/// HTTP implementation that POSTs to the order-interpretation endpoint.
///
/// No request timeout is configured: a turn takes as long as the service
/// needs, and a hung request leaves the session pending. Error bodies are
/// parsed like any other reply, since the service reports its own failures
/// as `{"status": "ERROR", ...}` with a non-2xx code.
#[derive(Clone)]
pub struct HttpInterpretationService {
    client: Client,
    endpoint: String,
}

impl HttpInterpretationService {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from the `[service]` configuration section.
    pub fn from_config(config: &daebak_core::config::ServiceConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InterpretationService for HttpInterpretationService {
    async fn interpret(&self, utterance: &str) -> Result<InterpretReply, OrderChatError> {
        let request = InterpretRequest {
            user_input: utterance.to_string(),
        };
        tracing::debug!(endpoint = %self.endpoint, "Sending interpretation request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| OrderChatError::Service(format!("request failed: {e}")))?;

        response
            .json::<InterpretReply>()
            .await
            .map_err(|e| OrderChatError::Service(format!("malformed response: {e}")))
    }
}

// =============================================================================
// Tests
// =============================================================================
