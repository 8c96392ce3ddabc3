//! Error types

use thiserror::Error;

/// Why loading the lists failed. The UI shows one generic message for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid API response: {0}")]
    Malformed(String),
}

/// Rejected "Create a new list" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("You should select exactly 2 lists to create a new list")]
    WrongSelectionCount { selected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_message_is_alert_text() {
        let err = CreateError::WrongSelectionCount { selected: 1 };
        assert_eq!(err.to_string(), "You should select exactly 2 lists to create a new list");
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(503).to_string(), "unexpected HTTP status 503");
        assert!(FetchError::Malformed("missing field `lists`".into())
            .to_string()
            .contains("missing field"));
    }
}
