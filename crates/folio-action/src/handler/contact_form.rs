//! Contact form action handler.
//!
//! Opens the contact form surface. Registered for both `Contact` and
//! `Schedule`: scheduling goes through the same form, just with a subject
//! pre-filled.

use async_trait::async_trait;

use crate::error::ActionError;
use crate::handler::ActionHandler;
use crate::types::{Action, ActionKind, ActionResult};

/// Handler that opens the contact form surface.
pub struct ContactFormHandler;

#[async_trait]
impl ActionHandler for ContactFormHandler {
    fn kind(&self) -> ActionKind {
        ActionKind::Contact
    }

    async fn execute(&self, action: &Action) -> Result<ActionResult, ActionError> {
        let subject = action.payload.get("subject").and_then(|v| v.as_str());
        let service_count = action
            .payload
            .get("services")
            .and_then(|v| v.as_array())
            .map(|a| a.len())
            .unwrap_or(0);

        tracing::info!(
            subject = subject.unwrap_or(""),
            preselected_services = service_count,
            "Opening contact form"
        );

        let message = match subject {
            Some(s) => format!("Opened contact form with subject: {}", s),
            None => "Opened contact form".to_string(),
        };
        Ok(ActionResult {
            success: true,
            message,
        })
    }

    fn describe(&self, action: &Action) -> String {
        match action.payload.get("subject").and_then(|v| v.as_str()) {
            Some(s) => format!("Open contact form ({})", s),
            None => "Open contact form".to_string(),
        }
    }
}
