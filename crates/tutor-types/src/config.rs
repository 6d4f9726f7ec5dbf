use serde::{Deserialize, Serialize};

/// Top-level widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    pub voice: VoiceConfig,
    pub avatar: AvatarConfig,
    /// Artificial "thinking" delay before the reply is appended
    pub reply_delay_ms: u32,
    /// First message shown whenever the conversation view opens
    pub greeting: String,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            voice: VoiceConfig::default(),
            avatar: AvatarConfig::default(),
            reply_delay_ms: 1500,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

/// Parameters for the text-to-speech capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// BCP 47 tag for the recognition session
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            rate: 0.9,
            pitch: 1.1,
            volume: 0.8,
        }
    }
}

/// Geometry for the floating avatar marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Square marker edge, used for viewport clamping
    pub marker_size: f32,
    /// Viewports at least this wide anchor the marker bottom-right
    pub wide_breakpoint: f32,
    /// Inset from the bottom-right corner on wide viewports
    pub wide_inset: f32,
    /// Inset kept from the viewport edges on narrow viewports
    pub narrow_inset: f32,
    /// Upper bound for the default position on narrow viewports
    pub narrow_max: f32,
    /// Pointer travel below this distance still counts as a click
    pub drag_threshold_px: f32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            marker_size: 100.0,
            wide_breakpoint: 1024.0,
            wide_inset: 120.0,
            narrow_inset: 80.0,
            narrow_max: 100.0,
            drag_threshold_px: 3.0,
        }
    }
}

const DEFAULT_GREETING: &str = "Hello! I'm your AI Tutor. I'm here to help you with your studies! \
What subject would you like to explore today? 🎓";
