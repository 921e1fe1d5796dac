//! Conversation state for the assistant chat.
//!
//! DESIGN
//! ======
//! The message list is append-only for the lifetime of the page: messages are
//! never reordered or removed, and identifiers increase with each append.
//! Network calls live in `net::api`; this module only records their outcome.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ChatApiError;
use crate::net::types::{ChatResponse, Source};

/// Relative label shown under every message.
pub const JUST_NOW: &str = "just now";

/// Greeting the assistant opens every conversation with.
pub const GREETING: &str =
    "Hi! I'm your AI product recommendation assistant. What kind of product can I help you find? 🛍️";

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub message: String,
    pub is_bot: bool,
    pub timestamp: String,
    /// References cited by the assistant; always empty for user messages.
    pub sources: Vec<Source>,
}

/// Conversation thread plus in-flight request flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    /// Set once the user has sent their first message.
    pub has_interacted: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// New conversation seeded with the assistant greeting.
    pub fn new() -> Self {
        let mut state = Self { messages: Vec::new(), loading: false, has_interacted: false };
        state.push(GREETING.to_owned(), true, Vec::new());
        state
    }

    /// Identifier the next appended message will receive.
    pub fn next_id(&self) -> u64 {
        self.messages.len() as u64 + 1
    }

    /// Whether the user may send `input` right now.
    pub fn can_send(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Record a user message and mark a request as in flight.
    ///
    /// Returns the text to send, or `None` when the input is blank or a
    /// request is already pending. The message is stored as typed.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if !self.can_send(input) {
            return None;
        }
        self.has_interacted = true;
        self.push(input.to_owned(), false, Vec::new());
        self.loading = true;
        Some(input.to_owned())
    }

    /// Record the assistant's reply and clear the in-flight flag.
    pub fn receive_reply(&mut self, response: ChatResponse) {
        self.push(response.message, true, response.sources);
        self.loading = false;
    }

    /// Record a failed request as an assistant message and clear the in-flight flag.
    pub fn receive_error(&mut self, err: &ChatApiError) {
        self.push(err.user_message(), true, Vec::new());
        self.loading = false;
    }

    /// Whether the view should scroll to the newest message.
    ///
    /// The lone greeting does not trigger a scroll.
    pub fn should_autoscroll(&self) -> bool {
        self.messages.len() > 1
    }

    fn push(&mut self, message: String, is_bot: bool, sources: Vec<Source>) {
        let id = self.next_id();
        self.messages.push(ChatMessage { id, message, is_bot, timestamp: JUST_NOW.to_owned(), sources });
    }
}
