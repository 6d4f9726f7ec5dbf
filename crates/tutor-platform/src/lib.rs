//! Browser platform adapters.
//!
//! Implementations of the `tutor-core` port traits on top of the Web
//! Speech API, gloo timers, and `Math.random`. Everything here assumes a
//! single-threaded wasm32 runtime.

pub mod random;
pub mod speech;
pub mod timer;

pub use random::JsRandom;
pub use speech::{WebSpeechInput, WebSpeechOutput};
pub use timer::BrowserDelay;
