//! Core types and value objects for action dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Action kinds mapping to handler implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Scroll to or route to a page section, or open an outbound link.
    Navigate,
    /// Open the contact form surface.
    Contact,
    /// Open the contact form surface pre-seeded with a subject.
    Schedule,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Navigate => write!(f, "navigate"),
            ActionKind::Contact => write!(f, "contact"),
            ActionKind::Schedule => write!(f, "schedule"),
        }
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navigate" => Ok(ActionKind::Navigate),
            "contact" => Ok(ActionKind::Contact),
            "schedule" => Ok(ActionKind::Schedule),
            _ => Err(format!("Unknown action kind: {}", s)),
        }
    }
}

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

// =============================================================================
// Domain Structs
// =============================================================================

/// A follow-up suggestion attached to an assistant reply.
///
/// The payload is opaque kind-specific data: `{"section": "experience"}` for
/// a scroll target, `{"url": "tel:..."}` for an outbound link,
/// `{"subject": ...}` or `{"services": [...]}` for contact form seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
    pub payload: serde_json::Value,
}

impl Action {
    /// A navigate action targeting a page section.
    pub fn navigate_to(section: &str, label: &str) -> Self {
        Action {
            kind: ActionKind::Navigate,
            label: label.to_string(),
            payload: serde_json::json!({ "section": section }),
        }
    }

    /// A navigate action carrying an outbound URL.
    pub fn open_url(url: &str, label: &str) -> Self {
        Action {
            kind: ActionKind::Navigate,
            label: label.to_string(),
            payload: serde_json::json!({ "url": url }),
        }
    }

    /// A plain contact action.
    pub fn contact(label: &str) -> Self {
        Action {
            kind: ActionKind::Contact,
            label: label.to_string(),
            payload: serde_json::json!({}),
        }
    }

    /// A contact action with extra payload data (e.g. pre-selected services).
    pub fn contact_with(label: &str, payload: serde_json::Value) -> Self {
        Action {
            kind: ActionKind::Contact,
            label: label.to_string(),
            payload,
        }
    }

    /// A schedule action carrying a conversation subject.
    pub fn schedule(label: &str, subject: &str) -> Self {
        Action {
            kind: ActionKind::Schedule,
            label: label.to_string(),
            payload: serde_json::json!({ "subject": subject }),
        }
    }
}

/// Result returned by action handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

/// A transient user-visible notification.
///
/// The Rust-side stand-in for a toast: surfaces validation and submission
/// outcomes without persisting anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ActionKind ----

    #[test]
    fn test_action_kind_display() {
        assert_eq!(ActionKind::Navigate.to_string(), "navigate");
        assert_eq!(ActionKind::Contact.to_string(), "contact");
        assert_eq!(ActionKind::Schedule.to_string(), "schedule");
    }

    #[test]
    fn test_action_kind_from_str() {
        assert_eq!("navigate".parse::<ActionKind>().unwrap(), ActionKind::Navigate);
        assert_eq!("contact".parse::<ActionKind>().unwrap(), ActionKind::Contact);
        assert_eq!("schedule".parse::<ActionKind>().unwrap(), ActionKind::Schedule);
        assert!("invalid".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_action_kind_from_str_error_message() {
        let err = "bogus".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, "Unknown action kind: bogus");
    }

    #[test]
    fn test_action_kind_display_from_str_round_trip() {
        for kind in [ActionKind::Navigate, ActionKind::Contact, ActionKind::Schedule] {
            let s = kind.to_string();
            let parsed: ActionKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_action_kind_serde_json_format() {
        assert_eq!(
            serde_json::to_string(&ActionKind::Navigate).unwrap(),
            "\"navigate\""
        );
        assert_eq!(
            serde_json::to_string(&ActionKind::Schedule).unwrap(),
            "\"schedule\""
        );
    }

    #[test]
    fn test_action_kind_hash_as_map_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ActionKind::Navigate, "scroll");
        map.insert(ActionKind::Contact, "form");
        assert_eq!(map.get(&ActionKind::Navigate), Some(&"scroll"));
        assert_eq!(map.get(&ActionKind::Schedule), None);
    }

    // ---- Action constructors ----

    #[test]
    fn test_navigate_to_payload() {
        let action = Action::navigate_to("experience", "View Full Experience");
        assert_eq!(action.kind, ActionKind::Navigate);
        assert_eq!(action.label, "View Full Experience");
        assert_eq!(action.payload["section"], "experience");
    }

    #[test]
    fn test_open_url_payload() {
        let action = Action::open_url("tel:+250788123456", "Call");
        assert_eq!(action.kind, ActionKind::Navigate);
        assert_eq!(action.payload["url"], "tel:+250788123456");
    }

    #[test]
    fn test_contact_empty_payload() {
        let action = Action::contact("Send Message");
        assert_eq!(action.kind, ActionKind::Contact);
        assert!(action.payload.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_contact_with_services() {
        let action = Action::contact_with(
            "Request Quote",
            serde_json::json!({ "services": ["Web Development"] }),
        );
        assert_eq!(action.payload["services"][0], "Web Development");
    }

    #[test]
    fn test_schedule_subject() {
        let action = Action::schedule("Schedule a Chat", "Project Discussion");
        assert_eq!(action.kind, ActionKind::Schedule);
        assert_eq!(action.payload["subject"], "Project Discussion");
    }

    #[test]
    fn test_action_serde_round_trip() {
        let action = Action::navigate_to("skills", "View Skills");
        let json = serde_json::to_string(&action).unwrap();
        let rt: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, rt);
    }

    // ---- Notice ----

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::info("hi").level, NoticeLevel::Info);
        assert_eq!(Notice::success("sent").level, NoticeLevel::Success);
        assert_eq!(Notice::error("missing field").level, NoticeLevel::Error);
        assert_eq!(Notice::error("missing field").text, "missing field");
    }

    #[test]
    fn test_notice_serde_round_trip() {
        let notice = Notice::success("Message sent");
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains("\"success\""));
        let rt: Notice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice, rt);
    }
}
