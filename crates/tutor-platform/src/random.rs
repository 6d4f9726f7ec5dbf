//! Randomness adapter over `Math.random`.

use tutor_core::ports::RandomPort;

pub struct JsRandom;

impl RandomPort for JsRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        // Math.random() < 1.0, so the floor is always within bounds
        (js_sys::Math::random() * bound as f64).floor() as usize
    }
}
