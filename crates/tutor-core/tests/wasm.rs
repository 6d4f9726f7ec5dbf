//! WASM-target tests for tutor-core.
//!
//! Mirrors the pure-logic unit tests under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use tutor_core::ports::SeededRandom;
use tutor_core::positioner::{AvatarPositioner, GestureEnd, Point, Viewport};
use tutor_core::rules::RuleBook;
use tutor_core::voice::strip_pictographs;
use tutor_types::config::AvatarConfig;

fn rng() -> SeededRandom {
    SeededRandom::new(42)
}

// ─── RuleBook Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn subject_beats_intent() {
    let rules = RuleBook::builtin();
    let math = rules.subjects()[0].response().to_string();
    assert_eq!(
        rules.derive_reply("I need help with my Math homework", &mut rng()),
        math
    );
}

#[wasm_bindgen_test]
fn intent_match() {
    let rules = RuleBook::builtin();
    let difficult = rules.intents()[3].response().to_string();
    assert_eq!(
        rules.derive_reply("This is so difficult", &mut rng()),
        difficult
    );
}

#[wasm_bindgen_test]
fn fallback_membership() {
    let rules = RuleBook::builtin();
    let reply = rules.derive_reply("hello there", &mut rng());
    assert!(rules.fallbacks().iter().any(|f| *f == reply));
}

// ─── Positioner Tests ────────────────────────────────────

#[wasm_bindgen_test]
fn drag_clamps_to_viewport() {
    let v = Viewport::new(1000.0, 800.0);
    let mut p = AvatarPositioner::new(AvatarConfig::default(), v);
    p.pointer_down(p.position());
    p.pointer_move(Point::new(5000.0, -200.0), v);
    let pos = p.position();
    assert!(pos.x >= 0.0 && pos.x <= 900.0);
    assert!(pos.y >= 0.0 && pos.y <= 700.0);
    assert_eq!(p.pointer_up(), Some(GestureEnd::Drag));
}

#[wasm_bindgen_test]
fn clean_click_opens_chat() {
    let v = Viewport::new(1280.0, 800.0);
    let mut p = AvatarPositioner::new(AvatarConfig::default(), v);
    p.pointer_down(p.position());
    assert_eq!(p.pointer_up(), Some(GestureEnd::Click));
}

// ─── Sanitization Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn strip_pictographs_removes_emoji() {
    assert_eq!(strip_pictographs("Great job! 🌟"), "Great job! ");
}
