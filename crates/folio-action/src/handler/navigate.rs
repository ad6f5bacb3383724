//! Navigate action handler.
//!
//! Routes the hosting surface to a page section, or opens an outbound link
//! with scheme validation.

use async_trait::async_trait;

use crate::error::ActionError;
use crate::handler::ActionHandler;
use crate::types::{Action, ActionKind, ActionResult};

/// URL schemes a reply action is allowed to carry.
///
/// Replies link to page sections, `tel:` numbers, and `mailto:` addresses;
/// everything else (`javascript:`, `file:`, `data:`, ...) is rejected.
const ALLOWED_SCHEMES: &[&str] = &["http://", "https://", "tel:", "mailto:"];

/// Handler for navigate actions.
///
/// The payload carries either a `section` (scroll target within the page)
/// or a `url` (outbound link to open in a new context).
pub struct NavigateHandler;

#[async_trait]
impl ActionHandler for NavigateHandler {
    fn kind(&self) -> ActionKind {
        ActionKind::Navigate
    }

    async fn execute(&self, action: &Action) -> Result<ActionResult, ActionError> {
        if let Some(section) = action.payload.get("section").and_then(|v| v.as_str()) {
            if section.is_empty() {
                return Err(ActionError::InvalidPayload(
                    "Section must not be empty".to_string(),
                ));
            }
            tracing::info!(section = %section, "Scrolled to section");
            return Ok(ActionResult {
                success: true,
                message: format!("Scrolled to section: {}", section),
            });
        }

        if let Some(url) = action.payload.get("url").and_then(|v| v.as_str()) {
            if url.is_empty() {
                return Err(ActionError::InvalidPayload(
                    "URL must not be empty".to_string(),
                ));
            }
            if !ALLOWED_SCHEMES.iter().any(|s| url.starts_with(s)) {
                return Err(ActionError::InvalidPayload(format!(
                    "Unsupported URL scheme. Allowed: http, https, tel, mailto; got: {}",
                    url
                )));
            }
            tracing::info!(url = %url, "Opened link");
            return Ok(ActionResult {
                success: true,
                message: format!("Opened link: {}", url),
            });
        }

        Err(ActionError::InvalidPayload(
            "Navigate payload needs a section or a url".to_string(),
        ))
    }

    fn describe(&self, action: &Action) -> String {
        if let Some(section) = action.payload.get("section").and_then(|v| v.as_str()) {
            format!("Scroll to section: {}", section)
        } else if let Some(url) = action.payload.get("url").and_then(|v| v.as_str()) {
            format!("Open link: {}", url)
        } else {
            "Navigate (no target)".to_string()
        }
    }
}
