use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Events emitted by the tutor engine and the speech adapters.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TutorEvent {
    /// The conversation view was opened (transcript re-seeded with greeting)
    ConversationOpened,

    /// The conversation view was closed (transcript discarded)
    ConversationClosed,

    /// A user submission was accepted; a reply is pending
    TurnStart { turn_id: u64 },

    /// The user message appended for this turn
    UserMessage { message: ChatMessage },

    /// The derived tutor reply appended for this turn
    TutorReply { message: ChatMessage },

    /// The turn finished (typing indicator off)
    TurnEnd { turn_id: u64 },

    /// A speech capture session began
    ListeningStarted,

    /// The capture session ended with a usable transcript
    ListeningEnded,

    /// The capture session errored or produced no result
    ListeningFailed { message: String },

    /// Vocalization of a reply began
    SpeakingStarted,

    /// Vocalization completed or was cancelled
    SpeakingEnded,

    /// An unexpected error occurred
    Error { message: String },
}
