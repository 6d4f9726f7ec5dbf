//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `tutor-core` (pure Rust).
//! Implementations live in `tutor-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use tutor_types::Result;

// ─── Speech Input Port ───────────────────────────────────────

/// Single-shot speech-to-text capture.
///
/// At most one capture session is active at a time; starting a new one
/// implicitly aborts a prior one.
#[async_trait(?Send)]
pub trait SpeechInputPort {
    /// Whether the runtime exposes a recognition capability at all.
    /// When false, voice input controls are hidden and `capture` always
    /// fails with `CapabilityUnavailable`.
    fn is_available(&self) -> bool;

    /// Begin a single-utterance capture and resolve with the final
    /// transcript text.
    async fn capture(&self) -> Result<String>;

    /// Abort an in-progress capture, if any.
    fn cancel(&self);
}

// ─── Speech Output Port ──────────────────────────────────────

/// Text-to-speech vocalization.
///
/// At most one utterance is in progress at a time; `speak` cancels any
/// prior one. Lifecycle transitions surface as `SpeakingStarted` /
/// `SpeakingEnded` events on the bus the adapter was built with.
pub trait SpeechOutputPort {
    /// Whether the runtime exposes a synthesis capability at all.
    fn is_available(&self) -> bool;

    /// Vocalize `text` with the configured rate/pitch/volume.
    /// Pictographic code points are stripped first.
    fn speak(&self, text: &str);

    /// Halt in-progress vocalization immediately.
    fn cancel(&self);

    fn is_speaking(&self) -> bool;
}

// ─── Delay Port ──────────────────────────────────────────────

/// Timer capability, used for the artificial reply delay.
#[async_trait(?Send)]
pub trait DelayPort {
    async fn sleep(&self, ms: u32);
}

// ─── Random Port ─────────────────────────────────────────────

/// Injectable randomness so canned-reply and thought selection are
/// deterministic under test.
pub trait RandomPort {
    /// Uniform index in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Deterministic xorshift64 source. The production adapter lives in
/// `tutor-platform`; this one backs tests and seeded demos.
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }
}

impl RandomPort for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x % bound as u64) as usize
    }
}
