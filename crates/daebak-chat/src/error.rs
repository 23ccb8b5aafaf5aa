//! Error types for the conversational order interface.

use daebak_core::error::DaebakError;

/// Errors from the order conversation engine.
#[derive(Debug, thiserror::Error)]
pub enum OrderChatError {
    #[error("utterance cannot be empty")]
    EmptyUtterance,
    #[error("a turn is already in flight for this session")]
    RequestInFlight,
    #[error("interpretation service error: {0}")]
    Service(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DaebakError> for OrderChatError {
    fn from(err: DaebakError) -> Self {
        OrderChatError::Service(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrderChatError::EmptyUtterance;
        assert_eq!(err.to_string(), "utterance cannot be empty");

        let err = OrderChatError::RequestInFlight;
        assert_eq!(
            err.to_string(),
            "a turn is already in flight for this session"
        );

        let err = OrderChatError::Service("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "interpretation service error: connection refused"
        );

        let err = OrderChatError::Internal("lock poisoned".to_string());
        assert_eq!(err.to_string(), "internal error: lock poisoned");
    }

    #[test]
    fn test_from_daebak_error() {
        let core_err = DaebakError::Service("timeout talking upstream".to_string());
        let err: OrderChatError = core_err.into();
        assert!(matches!(err, OrderChatError::Service(_)));
        assert!(err.to_string().contains("timeout talking upstream"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", OrderChatError::EmptyUtterance);
        assert!(dbg.contains("EmptyUtterance"));

        let dbg = format!("{:?}", OrderChatError::RequestInFlight);
        assert!(dbg.contains("RequestInFlight"));
    }
}
