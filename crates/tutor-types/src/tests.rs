#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::transcript::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = ChatMessage::user(1, "Hello");
        assert_eq!(msg.id, 1);
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello");
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_tutor() {
        let msg = ChatMessage::tutor(2, "I can help");
        assert_eq!(msg.id, 2);
        assert_eq!(msg.sender, Sender::Tutor);
        assert_eq!(msg.text, "I can help");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = ChatMessage::user(7, "test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, 7);
        assert_eq!(deserialized.sender, Sender::User);
        assert_eq!(deserialized.text, "test input");
    }

    #[test]
    fn test_sender_serialization() {
        let json = serde_json::to_string(&Sender::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Sender::Tutor).unwrap();
        assert_eq!(json, r#""tutor""#);
    }

    #[test]
    fn test_sender_deserialization() {
        let sender: Sender = serde_json::from_str(r#""tutor""#).unwrap();
        assert_eq!(sender, Sender::Tutor);
    }

    // ─── Transcript Tests ────────────────────────────────────

    #[test]
    fn test_transcript_new_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_transcript_push_assigns_ids_from_one() {
        let mut transcript = Transcript::new();
        let first = transcript.push_tutor("greeting").id;
        assert_eq!(first, 1);
        let second = transcript.push_user("question").id;
        assert_eq!(second, 2);
    }

    #[test]
    fn test_transcript_ids_strictly_increasing_and_contiguous() {
        let mut transcript = Transcript::new();
        for i in 0..50 {
            if i % 2 == 0 {
                transcript.push_user(format!("q{}", i));
            } else {
                transcript.push_tutor(format!("a{}", i));
            }
        }
        for (i, msg) in transcript.messages().iter().enumerate() {
            assert_eq!(msg.id, i as u64 + 1);
        }
    }

    #[test]
    fn test_transcript_preserves_append_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_tutor("second");
        transcript.push_user("third");

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(transcript.last().unwrap().text, "third");
    }

    #[test]
    fn test_transcript_clear_restarts_ids() {
        let mut transcript = Transcript::new();
        transcript.push_user("a");
        transcript.push_tutor("b");
        transcript.clear();
        assert!(transcript.is_empty());

        let id = transcript.push_tutor("fresh greeting").id;
        assert_eq!(id, 1);
    }

    #[test]
    fn test_transcript_serialization_roundtrip() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello");
        transcript.push_tutor("hi there");

        let json = serde_json::to_string(&transcript).unwrap();
        let deserialized: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.len(), 2);
        assert_eq!(deserialized.messages()[0].sender, Sender::User);
        assert_eq!(deserialized.messages()[1].sender, Sender::Tutor);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_turn_start_serialization() {
        let event = TutorEvent::TurnStart { turn_id: 1 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TurnStart"));
    }

    #[test]
    fn test_event_tutor_reply_carries_message() {
        let event = TutorEvent::TutorReply {
            message: ChatMessage::tutor(2, "Math can be fun!"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Math can be fun!"));

        let deserialized: TutorEvent = serde_json::from_str(&json).unwrap();
        if let TutorEvent::TutorReply { message } = deserialized {
            assert_eq!(message.id, 2);
            assert_eq!(message.sender, Sender::Tutor);
        } else {
            panic!("Wrong variant");
        }
    }

    #[test]
    fn test_event_listening_failed_roundtrip() {
        let event = TutorEvent::ListeningFailed {
            message: "no-speech".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TutorEvent = serde_json::from_str(&json).unwrap();
        if let TutorEvent::ListeningFailed { message } = deserialized {
            assert_eq!(message, "no-speech");
        } else {
            panic!("Wrong variant");
        }
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = TutorConfig::default();
        assert_eq!(config.reply_delay_ms, 1500);
        assert!(!config.greeting.is_empty());
        assert_eq!(config.voice.locale, "en-US");
        assert_eq!(config.voice.rate, 0.9);
        assert_eq!(config.voice.pitch, 1.1);
        assert_eq!(config.voice.volume, 0.8);
    }

    #[test]
    fn test_default_avatar_config() {
        let avatar = AvatarConfig::default();
        assert_eq!(avatar.marker_size, 100.0);
        assert_eq!(avatar.wide_breakpoint, 1024.0);
        assert_eq!(avatar.wide_inset, 120.0);
        assert_eq!(avatar.narrow_inset, 80.0);
        assert_eq!(avatar.narrow_max, 100.0);
        assert!(avatar.drag_threshold_px > 0.0);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = TutorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TutorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.reply_delay_ms, 1500);
        assert_eq!(deserialized.voice.locale, "en-US");
        assert_eq!(deserialized.avatar.marker_size, 100.0);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = TutorError::CapabilityUnavailable("SpeechRecognition".to_string());
        assert_eq!(
            err.to_string(),
            "Speech capability unavailable: SpeechRecognition"
        );

        let err = TutorError::Recognition("no-speech".to_string());
        assert_eq!(err.to_string(), "Recognition error: no-speech");

        let err = TutorError::EmptyInput;
        assert_eq!(err.to_string(), "Empty input");

        let err = TutorError::Cancelled;
        assert_eq!(err.to_string(), "Cancelled");
    }

    #[test]
    fn test_error_from_serde() {
        let bad_json = "{{invalid}}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
        let tutor_err: TutorError = serde_err.into();
        assert!(matches!(tutor_err, TutorError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = TutorError::Recognition("aborted".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
