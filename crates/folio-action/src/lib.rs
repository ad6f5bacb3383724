//! Action dispatch for Folio.
//!
//! Assistant replies carry follow-up actions (navigate to a page section,
//! open the contact form, open an outbound link). This crate defines the
//! action types, the async handler trait and registry that dispatch them,
//! and the stubbed contact form surface they target.

pub mod error;
pub mod form;
pub mod handler;
pub mod types;

pub use error::{ActionError, FormError};
pub use form::{ContactForm, FormSubmitter};
pub use handler::{ActionHandler, ActionRegistry};
pub use types::{Action, ActionKind, ActionResult, Notice, NoticeLevel};
