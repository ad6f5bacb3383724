//! Message and transcript types for the chat widget.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_action::Action;
use folio_core::types::Timestamp;

// =============================================================================
// Enums
// =============================================================================

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// The five canned topics offered as chips above the input.
///
/// A quick intent is shorthand for typing its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickIntent {
    Experience,
    Education,
    Availability,
    Services,
    Contact,
}

impl QuickIntent {
    /// All intents in display order.
    pub fn all() -> [QuickIntent; 5] {
        [
            QuickIntent::Experience,
            QuickIntent::Education,
            QuickIntent::Availability,
            QuickIntent::Services,
            QuickIntent::Contact,
        ]
    }

    /// The canned phrase submitted on the user's behalf.
    pub fn label(&self) -> &'static str {
        match self {
            QuickIntent::Experience => "Experience",
            QuickIntent::Education => "Education",
            QuickIntent::Availability => "Availability",
            QuickIntent::Services => "Services",
            QuickIntent::Contact => "Contact",
        }
    }
}

impl fmt::Display for QuickIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Message
// =============================================================================

/// One turn in a conversation transcript.
///
/// Immutable after creation; appended to the session transcript and
/// discarded with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: Timestamp,
    pub actions: Vec<Action>,
}

impl Message {
    /// A user message. Carries no actions.
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            timestamp: Timestamp::now(),
            actions: Vec::new(),
        }
    }

    /// An assistant message with optional follow-up actions.
    pub fn assistant(content: impl Into<String>, actions: Vec<Action>) -> Self {
        Message {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Timestamp::now(),
            actions,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
