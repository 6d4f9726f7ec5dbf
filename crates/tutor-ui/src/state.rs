//! UI-level state that drives rendering.
//! This is a read-only projection of engine and speech-bridge state,
//! updated each frame by draining the EventBus.

use tutor_types::event::TutorEvent;
use tutor_types::message::{ChatMessage, Sender};

/// State visible to UI panels
pub struct UiState {
    /// Displayed conversation bubbles
    pub messages: Vec<ChatEntry>,
    /// Whether the conversation view is open
    pub chat_open: bool,
    /// A reply is pending — show the typing indicator
    pub typing: bool,
    /// A speech capture session is active
    pub listening: bool,
    /// A vocalization is in progress
    pub speaking: bool,
    /// Input field content
    pub input_text: String,
    /// Status line under the input row
    pub status_text: String,
    /// Voice controls render only when the capability exists
    pub speech_input_available: bool,
    pub speech_output_available: bool,
    /// Current avatar thought bubble, if any
    pub thought: Option<String>,
}

/// A chat bubble for display
#[derive(Clone)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
    /// Wall-clock display time, e.g. "14:05"
    pub time: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            chat_open: false,
            typing: false,
            listening: false,
            speaking: false,
            input_text: String::new(),
            status_text: "Ready".to_string(),
            speech_input_available: false,
            speech_output_available: false,
            thought: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<TutorEvent>) {
        for event in events {
            match event {
                TutorEvent::ConversationOpened => {
                    self.chat_open = true;
                    self.messages.clear();
                    self.typing = false;
                    self.status_text = "Ready".to_string();
                }
                TutorEvent::ConversationClosed => {
                    self.chat_open = false;
                    self.messages.clear();
                    self.typing = false;
                    self.listening = false;
                    self.input_text.clear();
                }
                TutorEvent::TurnStart { .. } => {
                    self.typing = true;
                    self.status_text = "Thinking...".to_string();
                }
                TutorEvent::UserMessage { message } => {
                    self.push_message(&message);
                }
                TutorEvent::TutorReply { message } => {
                    self.push_message(&message);
                }
                TutorEvent::TurnEnd { .. } => {
                    self.typing = false;
                    self.status_text = "Ready".to_string();
                }
                TutorEvent::ListeningStarted => {
                    self.listening = true;
                    self.status_text = "Listening... speak now!".to_string();
                }
                TutorEvent::ListeningEnded => {
                    self.listening = false;
                    self.status_text = "Ready".to_string();
                }
                TutorEvent::ListeningFailed { message } => {
                    // recovered locally: reset the listening state, no bubble
                    log::debug!("recognition failed: {}", message);
                    self.listening = false;
                    self.status_text = "Ready".to_string();
                }
                TutorEvent::SpeakingStarted => {
                    self.speaking = true;
                }
                TutorEvent::SpeakingEnded => {
                    self.speaking = false;
                }
                TutorEvent::Error { message } => {
                    self.status_text = format!("Error: {}", message);
                }
            }
        }
    }

    fn push_message(&mut self, message: &ChatMessage) {
        self.messages.push(ChatEntry {
            sender: message.sender,
            text: message.text.clone(),
            time: format_time(&message.timestamp),
        });
    }

    pub fn is_busy(&self) -> bool {
        self.typing
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// "HH:MM" from an RFC 3339 timestamp; empty when unparsable.
fn format_time(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}
