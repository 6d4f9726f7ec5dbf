//! Main egui application — composes the floating avatar, the chat window,
//! and the speech adapters around the tutor engine.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::RichText;

use tutor_core::engine::TutorEngine;
use tutor_core::event_bus::EventBus;
use tutor_core::ports::{DelayPort, SpeechInputPort, SpeechOutputPort};
use tutor_core::positioner::{AvatarPositioner, Viewport};
use tutor_core::thoughts::ThoughtTicker;
use tutor_platform::{BrowserDelay, JsRandom, WebSpeechInput, WebSpeechOutput};
use tutor_types::config::TutorConfig;
use tutor_types::event::TutorEvent;
use tutor_types::{Result, TutorError};
use tutor_ui::panels::avatar::{avatar_widget, AvatarAction};
use tutor_ui::panels::chat::{chat_window, ChatAction};
use tutor_ui::state::UiState;
use tutor_ui::theme;

/// The main application state
pub struct TutorApp {
    ui_state: UiState,
    event_bus: EventBus,
    engine: Rc<RefCell<TutorEngine>>,
    speech_in: Rc<dyn SpeechInputPort>,
    speech_out: Rc<dyn SpeechOutputPort>,
    delay: Rc<dyn DelayPort>,
    positioner: AvatarPositioner,
    thoughts: ThoughtTicker,
    thought_rng: JsRandom,
    last_viewport: Viewport,
    first_frame: bool,
}

impl TutorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = TutorConfig::default();
        let event_bus = EventBus::new();
        let engine = TutorEngine::new(config.clone(), event_bus.clone(), Box::new(JsRandom));

        // Speech capabilities are best-effort: absence downgrades to a null
        // adapter and the matching control disappears
        let speech_in: Rc<dyn SpeechInputPort> = match WebSpeechInput::new(&config.voice.locale) {
            Ok(s) => Rc::new(s),
            Err(e) => {
                log::warn!("Speech input unavailable: {}. Voice input disabled.", e);
                Rc::new(NullSpeechInput)
            }
        };

        let speech_out: Rc<dyn SpeechOutputPort> =
            match WebSpeechOutput::new(config.voice.clone(), event_bus.clone()) {
                Ok(s) => Rc::new(s),
                Err(e) => {
                    log::warn!("Speech output unavailable: {}. Voice output disabled.", e);
                    Rc::new(NullSpeechOutput)
                }
            };

        let mut ui_state = UiState::new();
        ui_state.speech_input_available = speech_in.is_available();
        ui_state.speech_output_available = speech_out.is_available();

        // placeholder until the first frame reports the real screen rect
        let viewport = Viewport::new(1280.0, 720.0);

        Self {
            ui_state,
            event_bus,
            engine: Rc::new(RefCell::new(engine)),
            speech_in,
            speech_out,
            delay: Rc::new(BrowserDelay),
            positioner: AvatarPositioner::new(config.avatar.clone(), viewport),
            thoughts: ThoughtTicker::builtin(),
            thought_rng: JsRandom,
            last_viewport: viewport,
            first_frame: true,
        }
    }
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        let viewport = Viewport::new(screen.width(), screen.height());
        let now_ms = ctx.input(|i| i.time) * 1000.0;

        if self.first_frame {
            theme::apply_theme(ctx);
            self.positioner.viewport_resized(viewport);
            self.thoughts.start(now_ms);
            self.last_viewport = viewport;
            self.first_frame = false;
        }

        if viewport != self.last_viewport {
            self.positioner.viewport_resized(viewport);
            self.last_viewport = viewport;
        }

        // Drain events from the engine and the speech adapters
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() || self.ui_state.listening || self.ui_state.speaking {
            ctx.request_repaint();
        }

        // ── Backdrop ─────────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::BG_PRIMARY))
            .show(ctx, |ui| {
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        ui.label(
                            RichText::new("Click the tutor to start chatting")
                                .color(theme::TEXT_SECONDARY),
                        );
                    },
                );
            });

        // ── Idle thought bubble ──────────────────────────────
        let suppressed = self.ui_state.chat_open || self.positioner.is_dragging();
        self.ui_state.thought = self
            .thoughts
            .tick(now_ms, &mut self.thought_rng, suppressed)
            .map(|s| s.to_string());
        if !self.ui_state.chat_open {
            // keep the bubble cadence alive without a busy repaint loop
            ctx.request_repaint_after(Duration::from_millis(500));
        }

        // ── Avatar / chat window ─────────────────────────────
        if self.ui_state.chat_open {
            match chat_window(ctx, &mut self.ui_state) {
                ChatAction::Submit(text) => self.dispatch_message(text, ctx),
                ChatAction::StartListening => self.dispatch_listen(ctx),
                ChatAction::StopSpeaking => self.speech_out.cancel(),
                ChatAction::Close => self.close_chat(),
                ChatAction::None => {}
            }
        } else {
            let action = avatar_widget(ctx, &mut self.positioner, self.ui_state.thought.as_deref());
            if action == AvatarAction::OpenChat {
                self.engine.borrow_mut().open();
            }
        }
    }
}

impl TutorApp {
    /// Submit a user message: the user bubble appears immediately, the
    /// reply after the artificial thinking delay.
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        Self::spawn_turn(
            self.engine.clone(),
            self.delay.clone(),
            self.speech_out.clone(),
            ctx.clone(),
            text,
        );
    }

    fn spawn_turn(
        engine: Rc<RefCell<TutorEngine>>,
        delay: Rc<dyn DelayPort>,
        speech_out: Rc<dyn SpeechOutputPort>,
        ctx: egui::Context,
        text: String,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            // the borrow is dropped before the await; the ticket's epoch
            // makes a reply computed after close a silent no-op
            let (ticket, delay_ms) = {
                let mut engine = engine.borrow_mut();
                let delay_ms = engine.reply_delay_ms();
                match engine.begin_turn(&text) {
                    Ok(ticket) => (ticket, delay_ms),
                    Err(e) => {
                        log::debug!("submission rejected: {}", e);
                        return;
                    }
                }
            };
            ctx.request_repaint();

            delay.sleep(delay_ms).await;

            let reply = engine.borrow_mut().finish_turn(ticket);
            if let Some(message) = reply {
                speech_out.speak(&message.text);
            }
            ctx.request_repaint();
        });
    }

    /// Start a single-shot capture; a successful transcript is submitted
    /// exactly like typed input.
    fn dispatch_listen(&self, ctx: &egui::Context) {
        if !self.speech_in.is_available() || self.ui_state.listening {
            return;
        }

        let speech_in = self.speech_in.clone();
        let event_bus = self.event_bus.clone();
        let engine = self.engine.clone();
        let delay = self.delay.clone();
        let speech_out = self.speech_out.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            event_bus.emit(TutorEvent::ListeningStarted);
            ctx.request_repaint();

            match speech_in.capture().await {
                Ok(transcript) => {
                    event_bus.emit(TutorEvent::ListeningEnded);
                    Self::spawn_turn(engine, delay, speech_out, ctx.clone(), transcript);
                }
                Err(e) => {
                    // recovered locally: listening state resets, nothing is
                    // appended to the transcript
                    event_bus.emit(TutorEvent::ListeningFailed {
                        message: e.to_string(),
                    });
                }
            }
            ctx.request_repaint();
        });
    }

    /// Close the conversation view: halt synthesis and capture, abandon any
    /// pending reply, discard the transcript.
    fn close_chat(&self) {
        self.speech_out.cancel();
        self.speech_in.cancel();
        self.engine.borrow_mut().close();
    }
}

// ─── Null adapters for absent speech capabilities ────────────

struct NullSpeechInput;

#[async_trait::async_trait(?Send)]
impl SpeechInputPort for NullSpeechInput {
    fn is_available(&self) -> bool {
        false
    }

    async fn capture(&self) -> Result<String> {
        Err(TutorError::CapabilityUnavailable(
            "speech-to-text".to_string(),
        ))
    }

    fn cancel(&self) {}
}

struct NullSpeechOutput;

impl SpeechOutputPort for NullSpeechOutput {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str) {}

    fn cancel(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}
