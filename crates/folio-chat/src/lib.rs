//! Conversational concierge for Folio.
//!
//! Provides the rule-based response engine over the profile knowledge base,
//! the message/transcript types, and the session controller that hosts one
//! conversation behind the chat widget.

pub mod engine;
pub mod error;
pub mod session;
pub mod types;

pub use engine::{Reply, ResponseEngine, Topic};
pub use error::ChatError;
pub use session::ChatSession;
pub use types::{Message, QuickIntent, Role};
