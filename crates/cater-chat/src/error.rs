//! Error types for the conversational interface.

use cater_core::error::CaterError;

/// Errors from the chat engine and its host-facing helpers.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CaterError> for ChatError {
    fn from(err: CaterError) -> Self {
        ChatError::Storage(err.to_string())
    }
}

/// Trim a submitted utterance and reject it when nothing is left.
///
/// The engine itself accepts any text; hosts call this before sending.
pub fn validate_utterance(raw: &str) -> Result<&str, ChatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ChatError::EmptyMessage)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::EmptyMessage.to_string(), "message cannot be empty");
        assert_eq!(
            ChatError::UnknownCommand("/dance".to_string()).to_string(),
            "unknown command: /dance"
        );
        assert_eq!(
            ChatError::Storage("disk full".to_string()).to_string(),
            "storage error: disk full"
        );
    }

    #[test]
    fn test_chat_error_from_cater_error() {
        let err: ChatError = CaterError::Storage("connection lost".to_string()).into();
        assert!(matches!(err, ChatError::Storage(_)));
        assert!(err.to_string().contains("connection lost"));
    }

    #[test]
    fn test_validate_utterance_trims() {
        assert_eq!(validate_utterance("  hello \n").unwrap(), "hello");
    }

    #[test]
    fn test_validate_utterance_rejects_blank() {
        assert!(matches!(validate_utterance(""), Err(ChatError::EmptyMessage)));
        assert!(matches!(validate_utterance(" \t\n"), Err(ChatError::EmptyMessage)));
    }
}
