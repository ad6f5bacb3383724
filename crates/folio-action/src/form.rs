//! Contact form model and stubbed submission.
//!
//! Nothing is transmitted or persisted: submission validates, waits a
//! simulated network latency, and reports the outcome through a transient
//! [`Notice`], leaving the form intact on failure so the user can retry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::types::Notice;

/// In-progress contact form state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Selected service tags.
    pub services: Vec<String>,
}

impl ContactForm {
    /// Check that the required fields are filled in.
    ///
    /// Returns the first missing field, in form order.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        Ok(())
    }

    /// Toggle a service tag on or off.
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    /// Clear all fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.services.clear();
    }
}

/// Stubbed form submitter.
///
/// Simulates the network round-trip with a timer and a success notice.
pub struct FormSubmitter {
    latency: Duration,
}

impl FormSubmitter {
    /// Create a submitter with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Submit the form.
    ///
    /// On validation failure the form is left untouched and an error notice
    /// is returned. On success the form is cleared and a success notice is
    /// returned.
    pub async fn submit(&self, form: &mut ContactForm) -> Notice {
        if form.validate().is_err() {
            return Notice::error("Please fill in all required fields");
        }

        tokio::time::sleep(self.latency).await;

        tracing::info!(name = %form.name, services = form.services.len(), "Contact form submitted");
        form.clear();
        Notice::success("Message sent successfully! You'll hear back soon.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jonas".to_string(),
            email: "jonas@example.com".to_string(),
            message: "Interested in a project".to_string(),
            services: vec!["Web Development".to_string()],
        }
    }

    // ---- Validation ----

    #[test]
    fn test_validate_filled_form() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled_form();
        form.name = String::new();
        form.email = String::new();
        let err = form.validate().unwrap_err();
        assert!(matches!(err, FormError::MissingField("name")));
    }

    #[test]
    fn test_validate_whitespace_only_is_missing() {
        let mut form = filled_form();
        form.message = "   ".to_string();
        let err = form.validate().unwrap_err();
        assert!(matches!(err, FormError::MissingField("message")));
    }

    #[test]
    fn test_validate_services_optional() {
        let mut form = filled_form();
        form.services.clear();
        assert!(form.validate().is_ok());
    }

    // ---- Service toggling ----

    #[test]
    fn test_toggle_service_adds_then_removes() {
        let mut form = ContactForm::default();
        form.toggle_service("IT Support");
        assert_eq!(form.services, vec!["IT Support".to_string()]);
        form.toggle_service("IT Support");
        assert!(form.services.is_empty());
    }

    // ---- Submission ----

    #[tokio::test(start_paused = true)]
    async fn test_submit_success_clears_form() {
        let submitter = FormSubmitter::new(Duration::from_millis(1500));
        let mut form = filled_form();
        let notice = submitter.submit(&mut form).await;
        assert_eq!(notice.level, crate::types::NoticeLevel::Success);
        assert!(form.name.is_empty());
        assert!(form.services.is_empty());
    }

    #[tokio::test]
    async fn test_submit_invalid_keeps_contents() {
        let submitter = FormSubmitter::new(Duration::from_millis(1));
        let mut form = filled_form();
        form.email = String::new();
        let notice = submitter.submit(&mut form).await;
        assert_eq!(notice.level, crate::types::NoticeLevel::Error);
        // Contents intact for retry.
        assert_eq!(form.name, "Jonas");
        assert_eq!(form.message, "Interested in a project");
    }
}
