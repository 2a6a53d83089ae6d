//! Chat assistant conversation and panel visibility.
//!
//! ERROR HANDLING
//! ==============
//! A failed turn appends a fixed apology instead of surfacing the error, and
//! never removes earlier messages.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatRequest, ChatResponse, IngestError};
use crate::products::Product;
use crate::products::normalize::normalize_records;

pub const CHAT_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single conversation message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
    /// Products the assistant suggested alongside this answer.
    pub recommendations: Vec<Product>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>, timestamp_ms: f64) -> Self {
        Self { role, content: content.into(), timestamp_ms, recommendations: Vec::new() }
    }
}

/// State for the floating assistant panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub is_open: bool,
    /// Set when the user closed the panel; suppresses auto-open.
    pub user_dismissed: bool,
}

pub fn welcome_message(title: &str) -> String {
    format!(
        "I see you're interested in \"{title}\". I can help you find eco-friendly alternatives or answer questions about this product!"
    )
}

impl ChatState {
    /// Record the user's message and build the request for it.
    ///
    /// Returns `None` for blank input or while a turn is in flight.
    pub fn begin_turn(&mut self, input: &str, product: Option<&Product>, now_ms: f64) -> Option<ChatRequest> {
        let message = input.trim();
        if message.is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, message, now_ms));
        self.loading = true;
        Some(ChatRequest { message: message.to_owned(), product_context: product.map(Product::chat_context) })
    }

    /// Append the assistant's answer, or the apology when the turn failed.
    pub fn complete_turn(&mut self, result: Result<ChatResponse, IngestError>, now_ms: f64) {
        let reply = match result {
            Ok(response) => ChatMessage {
                recommendations: normalize_records(&response.recommendations),
                ..ChatMessage::new(ChatRole::Assistant, response.answer, now_ms)
            },
            Err(err) => {
                log::error!("chat turn failed: {err}");
                ChatMessage::new(ChatRole::Assistant, CHAT_ERROR_MESSAGE, now_ms)
            }
        };
        self.messages.push(reply);
        self.loading = false;
    }

    /// Auto-open with a welcome message unless the user dismissed the panel.
    pub fn on_product_selected(&mut self, product: &Product, now_ms: f64) -> bool {
        if self.is_open || self.user_dismissed {
            return false;
        }
        self.is_open = true;
        self.messages.push(ChatMessage::new(ChatRole::Assistant, welcome_message(&product.title), now_ms));
        true
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        if self.is_open {
            self.user_dismissed = false;
        }
    }

    /// Close from the panel's close button and stop auto-opening.
    pub fn dismiss(&mut self) {
        self.is_open = false;
        self.user_dismissed = true;
    }
}
