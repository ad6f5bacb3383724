//! Conversation session controller.
//!
//! Owns the transcript and the composing flag for one chat widget
//! activation, and spaces the engine's reply behind a simulated latency.
//! One reply may be in flight at a time; submissions are never queued.

use std::sync::Arc;
use std::time::Duration;

use folio_action::{Action, ActionRegistry, ActionResult};
use folio_core::config::ChatConfig;

use crate::engine::ResponseEngine;
use crate::error::ChatError;
use crate::types::{Message, QuickIntent, Role};

/// One conversation behind the chat widget.
///
/// The transcript is append-only and session-scoped: it is seeded with the
/// engine's greeting on creation and on [`reset`], and discarded with the
/// session. Reopening the widget is a reset, not a resume.
///
/// [`reset`]: ChatSession::reset
pub struct ChatSession {
    engine: Arc<ResponseEngine>,
    transcript: Vec<Message>,
    composing: bool,
    enabled: bool,
    reply_delay: Duration,
    max_message_length: usize,
}

impl ChatSession {
    /// Create a session with a greeting-seeded transcript.
    pub fn new(engine: Arc<ResponseEngine>, config: &ChatConfig) -> Self {
        let greeting = Message::assistant(engine.greeting(), Vec::new());
        Self {
            engine,
            transcript: vec![greeting],
            composing: false,
            enabled: config.enabled,
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            max_message_length: config.max_message_length,
        }
    }

    /// The transcript in chronological order.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether a reply is currently pending.
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// The most recent assistant message.
    pub fn last_reply(&self) -> Option<&Message> {
        self.transcript.iter().rev().find(|m| m.role == Role::Assistant)
    }

    /// Submit a user message and wait for the assistant reply.
    ///
    /// The user message is appended synchronously, before the simulated
    /// latency starts, so it always precedes its reply in the transcript.
    /// Rejections (`EmptyMessage`, `MessageTooLong`, `ReplyPending`,
    /// `Disabled`) append nothing.
    ///
    /// Dropping the returned future mid-flight cancels the pending reply
    /// without touching the transcript again; `composing` then stays set
    /// until [`reset`](ChatSession::reset), keeping further submissions
    /// rejected against the abandoned exchange.
    pub async fn submit(&mut self, text: &str) -> Result<(), ChatError> {
        if !self.enabled {
            return Err(ChatError::Disabled);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if trimmed.chars().count() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }
        if self.composing {
            return Err(ChatError::ReplyPending);
        }

        self.transcript.push(Message::user(trimmed));
        self.composing = true;

        tokio::time::sleep(self.reply_delay).await;

        let reply = self.engine.respond(trimmed);
        tracing::debug!(topic = %reply.topic, "Composed reply");
        self.transcript.push(reply.into_message());
        self.composing = false;
        Ok(())
    }

    /// Submit a quick-intent chip, shorthand for typing its label.
    pub async fn submit_quick_intent(&mut self, intent: QuickIntent) -> Result<(), ChatError> {
        self.submit(intent.label()).await
    }

    /// Dispatch a reply action through the registry.
    ///
    /// Delegates entirely to the dispatcher; the transcript is not touched.
    pub async fn dispatch_action(
        &self,
        action: &Action,
        registry: &ActionRegistry,
    ) -> Result<ActionResult, ChatError> {
        Ok(registry.dispatch(action).await?)
    }

    /// Start over: fresh greeting-seeded transcript, nothing pending.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.transcript
            .push(Message::assistant(self.engine.greeting(), Vec::new()));
        self.composing = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
