//! Event bus between the engine/adapters and the UI layer.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! Producers push; the UI drains the buffer once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tutor_types::event::TutorEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<TutorEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by the engine and the speech adapters.
    pub fn emit(&self, event: TutorEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<TutorEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Whether anything is queued (used to trigger egui repaints).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
