//! Action handler registry and trait definition.
//!
//! Defines the `ActionHandler` async trait and provides the handler
//! registry for dispatching actions to the correct implementation.

pub mod contact_form;
pub mod navigate;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ActionError;
use crate::types::{Action, ActionKind, ActionResult};

pub use contact_form::ContactFormHandler;
pub use navigate::NavigateHandler;

/// An executable handler for one kind of reply action.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// The primary action kind this handler implements.
    fn kind(&self) -> ActionKind;

    /// Execute the action against the hosting surface.
    async fn execute(&self, action: &Action) -> Result<ActionResult, ActionError>;

    /// Human-readable description of what executing the action would do.
    fn describe(&self, action: &Action) -> String;
}

/// Registry mapping action kinds to their handlers.
pub struct ActionRegistry {
    handlers: HashMap<ActionKind, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with the default handlers wired up.
    ///
    /// Contact and Schedule share one handler: both open the contact form
    /// surface, schedule merely seeds a subject.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ActionKind::Navigate, Arc::new(NavigateHandler));
        let contact: Arc<dyn ActionHandler> = Arc::new(ContactFormHandler);
        registry.register(ActionKind::Contact, Arc::clone(&contact));
        registry.register(ActionKind::Schedule, contact);
        registry
    }

    /// Register a handler under the given kind, replacing any existing one.
    pub fn register(&mut self, kind: ActionKind, handler: Arc<dyn ActionHandler>) {
        self.handlers.insert(kind, handler);
    }

    /// Dispatch an action to its registered handler.
    pub async fn dispatch(&self, action: &Action) -> Result<ActionResult, ActionError> {
        let handler = self
            .handlers
            .get(&action.kind)
            .ok_or(ActionError::UnregisteredHandler(action.kind))?;
        tracing::info!(kind = %action.kind, label = %action.label, "Dispatching action");
        handler.execute(action).await
    }

    /// Describe what dispatching the action would do, without executing it.
    pub fn describe(&self, action: &Action) -> Option<String> {
        self.handlers.get(&action.kind).map(|h| h.describe(action))
    }

    /// Number of registered kinds.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
