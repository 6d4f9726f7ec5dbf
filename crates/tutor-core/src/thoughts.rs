//! Idle thought bubbles for the floating avatar.
//!
//! While the chat is closed and no drag is active, the avatar periodically
//! shows a randomly chosen prompt. The ticker is driven by a caller-supplied
//! monotonic clock so the cadence is testable without real timers.

use crate::ports::RandomPort;

#[derive(Debug, Clone)]
pub struct ThoughtSchedule {
    /// Delay before the very first bubble
    pub first_delay_ms: f64,
    /// How long the first bubble stays visible
    pub first_visible_ms: f64,
    /// Spacing between bubble starts after the first
    pub interval_ms: f64,
    /// How long later bubbles stay visible
    pub visible_ms: f64,
}

impl Default for ThoughtSchedule {
    fn default() -> Self {
        Self {
            first_delay_ms: 3_000.0,
            first_visible_ms: 3_000.0,
            interval_ms: 12_000.0,
            visible_ms: 4_000.0,
        }
    }
}

pub struct ThoughtTicker {
    thoughts: Vec<String>,
    schedule: ThoughtSchedule,
    /// None until `start` is called
    next_show_at: Option<f64>,
    hide_at: f64,
    current: Option<usize>,
    first: bool,
}

impl ThoughtTicker {
    pub fn new(thoughts: Vec<String>, schedule: ThoughtSchedule) -> Self {
        Self {
            thoughts,
            schedule,
            next_show_at: None,
            hide_at: 0.0,
            current: None,
            first: true,
        }
    }

    /// The built-in prompt pool.
    pub fn builtin() -> Self {
        let thoughts = vec![
            "Need help with your homework? I'm here! 🤓".to_string(),
            "Great job on your recent assignments! 🌟".to_string(),
            "Want to explore some fun learning activities? 🎯".to_string(),
            "I can help explain difficult concepts! 💡".to_string(),
            "Ready to tackle that math problem? 📊".to_string(),
            "Let's make learning fun together! 🚀".to_string(),
            "Your progress is amazing! Keep it up! 📈".to_string(),
            "Have questions? Just click and ask! 💬".to_string(),
        ];
        Self::new(thoughts, ThoughtSchedule::default())
    }

    /// Arm the ticker. The first bubble appears `first_delay_ms` later.
    pub fn start(&mut self, now_ms: f64) {
        self.next_show_at = Some(now_ms + self.schedule.first_delay_ms);
    }

    /// Advance the clock and return the currently visible thought, if any.
    /// `suppressed` (drag active or chat open) hides the bubble without
    /// disturbing the schedule.
    pub fn tick(
        &mut self,
        now_ms: f64,
        rng: &mut dyn RandomPort,
        suppressed: bool,
    ) -> Option<&str> {
        if suppressed {
            self.current = None;
            return None;
        }

        let next_show = self.next_show_at?;

        if self.current.is_some() && now_ms >= self.hide_at {
            self.current = None;
        }

        if self.current.is_none() && now_ms >= next_show && !self.thoughts.is_empty() {
            let idx = rng.next_index(self.thoughts.len());
            self.current = Some(idx);
            let visible = if self.first {
                self.schedule.first_visible_ms
            } else {
                self.schedule.visible_ms
            };
            self.first = false;
            self.hide_at = now_ms + visible;
            self.next_show_at = Some(now_ms + self.schedule.interval_ms);
        }

        self.current.map(|i| self.thoughts[i].as_str())
    }
}
