//! Text-to-speech adapter over the browser speechSynthesis API.
//!
//! One utterance at a time: `speak` cancels whatever is still in progress.
//! Lifecycle callbacks flip the speaking flag and surface as
//! `SpeakingStarted` / `SpeakingEnded` events on the bus.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use tutor_core::event_bus::EventBus;
use tutor_core::ports::SpeechOutputPort;
use tutor_core::voice::strip_pictographs;
use tutor_types::config::VoiceConfig;
use tutor_types::event::TutorEvent;
use tutor_types::{Result, TutorError};

/// Callbacks for the utterance currently in flight.
struct UtteranceHandlers {
    _onstart: Closure<dyn FnMut()>,
    _onend: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut(web_sys::Event)>,
}

pub struct WebSpeechOutput {
    synth: SpeechSynthesis,
    voice: VoiceConfig,
    event_bus: EventBus,
    speaking: Rc<Cell<bool>>,
    handlers: RefCell<Option<UtteranceHandlers>>,
}

impl WebSpeechOutput {
    pub fn new(voice: VoiceConfig, event_bus: EventBus) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| TutorError::CapabilityUnavailable("no window".to_string()))?;
        let synth = window.speech_synthesis().map_err(|_| {
            TutorError::CapabilityUnavailable("speechSynthesis".to_string())
        })?;
        Ok(Self {
            synth,
            voice,
            event_bus,
            speaking: Rc::new(Cell::new(false)),
            handlers: RefCell::new(None),
        })
    }
}

impl SpeechOutputPort for WebSpeechOutput {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, text: &str) {
        let clean = strip_pictographs(text);
        if clean.trim().is_empty() {
            return;
        }

        // supersede any utterance still in progress
        self.synth.cancel();

        let utterance = match SpeechSynthesisUtterance::new_with_text(&clean) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("utterance creation failed: {:?}", e);
                return;
            }
        };
        utterance.set_lang(&self.voice.locale);
        utterance.set_rate(self.voice.rate);
        utterance.set_pitch(self.voice.pitch);
        utterance.set_volume(self.voice.volume);

        let speaking = self.speaking.clone();
        let bus = self.event_bus.clone();
        let onstart = Closure::wrap(Box::new(move || {
            speaking.set(true);
            bus.emit(TutorEvent::SpeakingStarted);
        }) as Box<dyn FnMut()>);

        let speaking = self.speaking.clone();
        let bus = self.event_bus.clone();
        let onend = Closure::wrap(Box::new(move || {
            speaking.set(false);
            bus.emit(TutorEvent::SpeakingEnded);
        }) as Box<dyn FnMut()>);

        // error ends count as ended; the UI only tracks the boolean
        let speaking = self.speaking.clone();
        let bus = self.event_bus.clone();
        let onerror = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            speaking.set(false);
            bus.emit(TutorEvent::SpeakingEnded);
        }) as Box<dyn FnMut(web_sys::Event)>);

        utterance.set_onstart(Some(onstart.as_ref().unchecked_ref()));
        utterance.set_onend(Some(onend.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        *self.handlers.borrow_mut() = Some(UtteranceHandlers {
            _onstart: onstart,
            _onend: onend,
            _onerror: onerror,
        });

        self.synth.speak(&utterance);
    }

    fn cancel(&self) {
        self.synth.cancel();
        if self.speaking.get() {
            self.speaking.set(false);
            self.event_bus.emit(TutorEvent::SpeakingEnded);
        }
    }

    fn is_speaking(&self) -> bool {
        self.speaking.get()
    }
}
