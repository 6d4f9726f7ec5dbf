use serde::{Deserialize, Serialize};

use crate::message::{ChatMessage, Sender};

/// Append-only conversation transcript.
///
/// Owns id assignment: ids are sequential from 1 and contiguous, so append
/// order always equals temporal order. Held in memory only — cleared when
/// the conversation view closes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to it.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatMessage {
        let idx = self.messages.len();
        self.messages.push(ChatMessage::new(idx as u64 + 1, sender, text));
        &self.messages[idx]
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::User, text)
    }

    pub fn push_tutor(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::Tutor, text)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Discard all messages. Id assignment restarts at 1.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
