//! Error types for action dispatch and the contact form.

use crate::types::ActionKind;
use folio_core::error::FolioError;

/// Errors from action handler execution.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Action kind not registered: {0}")]
    UnregisteredHandler(ActionKind),
    #[error("Payload validation failed: {0}")]
    InvalidPayload(String),
    #[error("Action handler failed: {0}")]
    HandlerFailed(String),
}

impl From<ActionError> for FolioError {
    fn from(err: ActionError) -> Self {
        FolioError::Action(err.to_string())
    }
}

/// Errors from contact form validation.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_display() {
        let err = ActionError::UnregisteredHandler(ActionKind::Schedule);
        assert_eq!(err.to_string(), "Action kind not registered: schedule");

        let err = ActionError::InvalidPayload("missing url field".to_string());
        assert_eq!(err.to_string(), "Payload validation failed: missing url field");

        let err = ActionError::HandlerFailed("surface unavailable".to_string());
        assert_eq!(err.to_string(), "Action handler failed: surface unavailable");
    }

    #[test]
    fn test_action_error_into_folio_error() {
        let err: FolioError = ActionError::InvalidPayload("bad section".to_string()).into();
        assert!(matches!(err, FolioError::Action(_)));
        assert!(err.to_string().contains("bad section"));
    }

    #[test]
    fn test_form_error_display() {
        let err = FormError::MissingField("email");
        assert_eq!(err.to_string(), "Required field missing: email");
    }
}
