use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Tutor,
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequential id assigned by the transcript, starting at 1
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// RFC 3339 wall-clock time at the moment of append
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, Sender::User, text)
    }

    pub fn tutor(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, Sender::Tutor, text)
    }
}
