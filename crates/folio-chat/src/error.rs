//! Error types for the conversational interface.

use folio_action::ActionError;
use folio_core::error::FolioError;

/// Errors from the chat session controller.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("a reply is already pending")]
    ReplyPending,
    #[error("action dispatch failed: {0}")]
    Action(#[from] ActionError),
}

impl From<ChatError> for FolioError {
    fn from(err: ChatError) -> Self {
        FolioError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::Disabled.to_string(), "chat is disabled");
        assert_eq!(ChatError::EmptyMessage.to_string(), "message cannot be empty");
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
        assert_eq!(
            ChatError::ReplyPending.to_string(),
            "a reply is already pending"
        );
    }

    #[test]
    fn test_chat_error_from_action_error() {
        let action_err = ActionError::InvalidPayload("no url".to_string());
        let chat_err: ChatError = action_err.into();
        assert!(matches!(chat_err, ChatError::Action(_)));
        assert!(chat_err.to_string().contains("no url"));
    }

    #[test]
    fn test_chat_error_into_folio_error() {
        let err: FolioError = ChatError::EmptyMessage.into();
        assert!(matches!(err, FolioError::Chat(_)));
    }
}
