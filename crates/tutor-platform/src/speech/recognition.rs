//! Speech-to-text adapter over the browser SpeechRecognition API.
//!
//! Chromium still ships the constructor under the `webkit` prefix, so
//! detection tries the unprefixed class first and falls back to reflective
//! construction. Sessions are single-shot: non-continuous, final results
//! only, fixed locale. Starting a new capture implicitly aborts a prior one.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

use tutor_core::ports::SpeechInputPort;
use tutor_types::{Result, TutorError};

type CaptureSender = Rc<RefCell<Option<oneshot::Sender<Result<String>>>>>;

/// Callbacks for the active session. Dropping these (on the next capture)
/// invalidates the previous session's JS handlers.
struct SessionHandlers {
    _onresult: Closure<dyn FnMut(SpeechRecognitionEvent)>,
    _onerror: Closure<dyn FnMut(web_sys::Event)>,
    _onend: Closure<dyn FnMut()>,
}

pub struct WebSpeechInput {
    recognition: SpeechRecognition,
    handlers: RefCell<Option<SessionHandlers>>,
}

impl WebSpeechInput {
    /// Detect the recognition capability and configure a single-shot
    /// recognizer for `locale`. Fails with `CapabilityUnavailable` when the
    /// runtime has no SpeechRecognition implementation.
    pub fn new(locale: &str) -> Result<Self> {
        let recognition = detect_recognition()?;
        recognition.set_continuous(false);
        recognition.set_interim_results(false);
        recognition.set_lang(locale);
        Ok(Self {
            recognition,
            handlers: RefCell::new(None),
        })
    }
}

#[async_trait(?Send)]
impl SpeechInputPort for WebSpeechInput {
    fn is_available(&self) -> bool {
        true
    }

    async fn capture(&self) -> Result<String> {
        // A new capture supersedes any session still in flight. Aborting
        // fires the old session's end handler, and replacing the stored
        // closures below resolves its future with a capture-aborted error.
        self.recognition.abort();

        let (tx, rx) = oneshot::channel::<Result<String>>();
        let tx: CaptureSender = Rc::new(RefCell::new(Some(tx)));

        let tx_result = tx.clone();
        let onresult = Closure::wrap(Box::new(move |event: SpeechRecognitionEvent| {
            let transcript = event
                .results()
                .and_then(|list| list.get(0))
                .and_then(|result| result.get(0))
                .map(|alternative| alternative.transcript());
            if let Some(sender) = tx_result.borrow_mut().take() {
                let _ = sender.send(match transcript {
                    Some(text) if !text.trim().is_empty() => Ok(text),
                    _ => Err(TutorError::Recognition("empty result".to_string())),
                });
            }
        }) as Box<dyn FnMut(SpeechRecognitionEvent)>);

        let tx_error = tx.clone();
        let onerror = Closure::wrap(Box::new(move |event: web_sys::Event| {
            // The event's `error` field carries codes like "no-speech"
            let code = js_sys::Reflect::get(event.as_ref(), &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            if let Some(sender) = tx_error.borrow_mut().take() {
                let _ = sender.send(Err(TutorError::Recognition(code)));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        // onend fires after both result and error; if neither handler
        // resolved the session, the capture produced nothing
        let tx_end = tx.clone();
        let onend = Closure::wrap(Box::new(move || {
            if let Some(sender) = tx_end.borrow_mut().take() {
                let _ = sender.send(Err(TutorError::Recognition("no result".to_string())));
            }
        }) as Box<dyn FnMut()>);

        self.recognition
            .set_onresult(Some(onresult.as_ref().unchecked_ref()));
        self.recognition
            .set_onerror(Some(onerror.as_ref().unchecked_ref()));
        self.recognition
            .set_onend(Some(onend.as_ref().unchecked_ref()));
        *self.handlers.borrow_mut() = Some(SessionHandlers {
            _onresult: onresult,
            _onerror: onerror,
            _onend: onend,
        });

        if let Err(e) = self.recognition.start() {
            self.handlers.borrow_mut().take();
            return Err(TutorError::Recognition(format!("{:?}", e)));
        }

        let outcome = rx
            .await
            .unwrap_or_else(|_| Err(TutorError::Recognition("capture aborted".to_string())));

        self.recognition.set_onresult(None);
        self.recognition.set_onerror(None);
        self.recognition.set_onend(None);
        self.handlers.borrow_mut().take();

        outcome
    }

    fn cancel(&self) {
        self.recognition.abort();
    }
}

/// Unprefixed constructor first, then the `webkit`-prefixed one.
fn detect_recognition() -> Result<SpeechRecognition> {
    if let Ok(recognition) = SpeechRecognition::new() {
        return Ok(recognition);
    }

    let window = web_sys::window()
        .ok_or_else(|| TutorError::CapabilityUnavailable("no window".to_string()))?;
    let ctor = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("webkitSpeechRecognition"))
        .map_err(|e| TutorError::JsInterop(format!("{:?}", e)))?;
    if ctor.is_undefined() || !ctor.is_function() {
        return Err(TutorError::CapabilityUnavailable(
            "SpeechRecognition".to_string(),
        ));
    }

    let instance = js_sys::Reflect::construct(ctor.unchecked_ref::<js_sys::Function>(), &js_sys::Array::new())
        .map_err(|e| TutorError::JsInterop(format!("{:?}", e)))?;
    Ok(instance.unchecked_into::<SpeechRecognition>())
}
