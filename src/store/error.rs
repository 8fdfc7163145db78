//! Errors reported by the hosted table

/// Failure of a single insert
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store answered and refused the write
    #[error("insert rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with a body we could not read
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Human-readable text to show next to the submit button, if the store
    /// supplied any
    pub fn message(&self) -> Option<&str> {
        let text = match self {
            StoreError::Rejected { message, .. } => message,
            StoreError::Transport(message) | StoreError::Decode(message) => message,
        };
        let text = text.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = StoreError::Rejected {
            status: 409,
            message: "duplicate key value".to_string(),
        };
        assert_eq!(err.message(), Some("duplicate key value"));
        assert_eq!(err.to_string(), "insert rejected (409): duplicate key value");
    }

    #[test]
    fn test_blank_message_is_none() {
        let err = StoreError::Rejected {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_transport_message() {
        let err = StoreError::Transport("connection refused".to_string());
        assert_eq!(err.message(), Some("connection refused"));
    }
}
