#[cfg(test)]
mod tests {
    use crate::state::*;
    use tutor_types::event::TutorEvent;
    use tutor_types::message::{ChatMessage, Sender};

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.messages.is_empty());
        assert!(!state.chat_open);
        assert!(!state.typing);
        assert!(!state.listening);
        assert!(!state.speaking);
        assert!(state.input_text.is_empty());
        assert_eq!(state.status_text, "Ready");
        assert!(!state.is_busy());
        assert!(state.thought.is_none());
    }

    #[test]
    fn test_conversation_opened_resets_view() {
        let mut state = UiState::new();
        state.process_events(vec![TutorEvent::ConversationOpened]);
        assert!(state.chat_open);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_greeting_arrives_as_tutor_bubble() {
        let mut state = UiState::new();
        state.process_events(vec![
            TutorEvent::ConversationOpened,
            TutorEvent::TutorReply {
                message: ChatMessage::tutor(1, "Hello! I'm your AI Tutor."),
            },
        ]);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].sender, Sender::Tutor);
        assert_eq!(state.messages[0].text, "Hello! I'm your AI Tutor.");
    }

    #[test]
    fn test_turn_start_shows_typing_indicator() {
        let mut state = UiState::new();
        state.process_events(vec![TutorEvent::TurnStart { turn_id: 1 }]);
        assert!(state.typing);
        assert!(state.is_busy());
        assert_eq!(state.status_text, "Thinking...");
    }

    #[test]
    fn test_turn_end_clears_typing_indicator() {
        let mut state = UiState::new();
        state.process_events(vec![
            TutorEvent::TurnStart { turn_id: 1 },
            TutorEvent::TurnEnd { turn_id: 1 },
        ]);
        assert!(!state.typing);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_full_turn_produces_two_bubbles() {
        let mut state = UiState::new();
        state.process_events(vec![
            TutorEvent::TurnStart { turn_id: 1 },
            TutorEvent::UserMessage {
                message: ChatMessage::user(2, "what is math"),
            },
            TutorEvent::TutorReply {
                message: ChatMessage::tutor(3, "Math can be fun!"),
            },
            TutorEvent::TurnEnd { turn_id: 1 },
        ]);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].sender, Sender::User);
        assert_eq!(state.messages[1].sender, Sender::Tutor);
    }

    #[test]
    fn test_conversation_closed_discards_bubbles() {
        let mut state = UiState::new();
        state.process_events(vec![
            TutorEvent::ConversationOpened,
            TutorEvent::TutorReply {
                message: ChatMessage::tutor(1, "greeting"),
            },
            TutorEvent::ConversationClosed,
        ]);
        assert!(!state.chat_open);
        assert!(state.messages.is_empty());
        assert!(!state.typing);
    }

    #[test]
    fn test_listening_lifecycle() {
        let mut state = UiState::new();
        state.process_events(vec![TutorEvent::ListeningStarted]);
        assert!(state.listening);
        assert_eq!(state.status_text, "Listening... speak now!");

        state.process_events(vec![TutorEvent::ListeningEnded]);
        assert!(!state.listening);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_listening_failure_recovers_silently() {
        let mut state = UiState::new();
        state.process_events(vec![
            TutorEvent::ListeningStarted,
            TutorEvent::ListeningFailed {
                message: "no-speech".to_string(),
            },
        ]);
        assert!(!state.listening);
        // no error bubble appended
        assert!(state.messages.is_empty());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_speaking_lifecycle() {
        let mut state = UiState::new();
        state.process_events(vec![TutorEvent::SpeakingStarted]);
        assert!(state.speaking);
        state.process_events(vec![TutorEvent::SpeakingEnded]);
        assert!(!state.speaking);
    }

    #[test]
    fn test_duplicate_speaking_ended_is_idempotent() {
        let mut state = UiState::new();
        state.process_events(vec![
            TutorEvent::SpeakingStarted,
            TutorEvent::SpeakingEnded,
            TutorEvent::SpeakingEnded,
        ]);
        assert!(!state.speaking);
    }

    #[test]
    fn test_error_event_updates_status() {
        let mut state = UiState::new();
        state.process_events(vec![TutorEvent::Error {
            message: "boom".to_string(),
        }]);
        assert_eq!(state.status_text, "Error: boom");
    }

    #[test]
    fn test_message_time_formatted_from_timestamp() {
        let mut state = UiState::new();
        let mut message = ChatMessage::user(1, "hi");
        message.timestamp = "2026-08-07T14:05:33+00:00".to_string();
        state.process_events(vec![TutorEvent::UserMessage { message }]);
        assert_eq!(state.messages[0].time, "14:05");
    }

    #[test]
    fn test_bad_timestamp_yields_empty_time() {
        let mut state = UiState::new();
        let mut message = ChatMessage::user(1, "hi");
        message.timestamp = "not a timestamp".to_string();
        state.process_events(vec![TutorEvent::UserMessage { message }]);
        assert!(state.messages[0].time.is_empty());
    }
}
