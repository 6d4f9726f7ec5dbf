//! Conversation engine — derives canned tutor replies for user submissions.
//!
//! A turn is split around the artificial "thinking" delay:
//! 1. `begin_turn` validates the input and appends the user message
//! 2. the caller sleeps `reply_delay_ms` via a `DelayPort`
//! 3. `finish_turn` derives and appends the reply — unless the view was
//!    closed in the meantime
//!
//! The split keeps any `RefCell` borrow from being held across an await
//! point, and the epoch captured in the `TurnTicket` turns an abandoned
//! reply into a silent no-op.

use tutor_types::{
    config::TutorConfig, event::TutorEvent, message::ChatMessage, transcript::Transcript, Result,
    TutorError,
};

use crate::event_bus::EventBus;
use crate::ports::RandomPort;
use crate::rules::RuleBook;

pub struct TutorEngine {
    pub config: TutorConfig,
    pub transcript: Transcript,
    pub event_bus: EventBus,
    pub state: EngineState,
    rules: RuleBook,
    rng: Box<dyn RandomPort>,
    /// Bumped on close; tickets from an older epoch are dead
    epoch: u64,
    turn_counter: u64,
    open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Replying { turn_id: u64 },
}

/// Capture of an accepted submission, redeemed after the reply delay.
#[derive(Debug, Clone)]
pub struct TurnTicket {
    turn_id: u64,
    epoch: u64,
    text: String,
}

impl TutorEngine {
    pub fn new(config: TutorConfig, event_bus: EventBus, rng: Box<dyn RandomPort>) -> Self {
        Self {
            config,
            transcript: Transcript::new(),
            event_bus,
            state: EngineState::Idle,
            rules: RuleBook::builtin(),
            rng,
            epoch: 0,
            turn_counter: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn reply_delay_ms(&self) -> u32 {
        self.config.reply_delay_ms
    }

    /// Open the conversation view: seed a fresh transcript with the greeting.
    pub fn open(&mut self) {
        self.open = true;
        self.transcript.clear();
        self.state = EngineState::Idle;
        let greeting = self.config.greeting.clone();
        let message = self.transcript.push_tutor(greeting).clone();
        self.event_bus.emit(TutorEvent::ConversationOpened);
        self.event_bus.emit(TutorEvent::TutorReply { message });
    }

    /// Close the conversation view. The transcript is discarded and any
    /// pending reply ticket is abandoned.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.epoch += 1;
        self.transcript.clear();
        self.state = EngineState::Idle;
        self.event_bus.emit(TutorEvent::ConversationClosed);
    }

    /// Accept a user submission. Empty or whitespace-only input is rejected
    /// without touching the transcript.
    pub fn begin_turn(&mut self, input: &str) -> Result<TurnTicket> {
        if !self.open {
            return Err(TutorError::Cancelled);
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(TutorError::EmptyInput);
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        let message = self.transcript.push_user(text).clone();
        self.state = EngineState::Replying { turn_id };
        self.event_bus.emit(TutorEvent::TurnStart { turn_id });
        self.event_bus.emit(TutorEvent::UserMessage { message });

        Ok(TurnTicket {
            turn_id,
            epoch: self.epoch,
            text: text.to_string(),
        })
    }

    /// Redeem a ticket after the reply delay. Returns the appended tutor
    /// message for optional vocalization, or `None` when the view was
    /// closed while the reply was pending.
    pub fn finish_turn(&mut self, ticket: TurnTicket) -> Option<ChatMessage> {
        if !self.open || ticket.epoch != self.epoch {
            log::debug!("turn {} abandoned: view closed", ticket.turn_id);
            return None;
        }

        let reply = self.rules.derive_reply(&ticket.text, &mut *self.rng);
        let message = self.transcript.push_tutor(reply).clone();
        self.state = EngineState::Idle;
        self.event_bus.emit(TutorEvent::TutorReply {
            message: message.clone(),
        });
        self.event_bus.emit(TutorEvent::TurnEnd {
            turn_id: ticket.turn_id,
        });

        Some(message)
    }
}
