//! Keyword rule book — ordered, first-match-wins reply derivation.
//!
//! Matching is a case-insensitive substring scan over the lowercased input.
//! Subject rules are scanned before intent rules; when nothing matches, a
//! fallback is drawn uniformly from the pool via the injected `RandomPort`.

use crate::ports::RandomPort;

/// One keyword group mapped to a canned response.
#[derive(Debug, Clone)]
pub struct ReplyRule {
    keywords: Vec<String>,
    response: String,
}

impl ReplyRule {
    /// Keywords are stored lowercased; matching happens against the
    /// lowercased input.
    pub fn new(keywords: &[&str], response: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.to_string(),
        }
    }

    fn matches(&self, lowered_input: &str) -> bool {
        self.keywords.iter().any(|k| lowered_input.contains(k.as_str()))
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// The ordered rule lists plus the fallback pool.
pub struct RuleBook {
    subjects: Vec<ReplyRule>,
    intents: Vec<ReplyRule>,
    fallbacks: Vec<String>,
}

impl RuleBook {
    pub fn new(subjects: Vec<ReplyRule>, intents: Vec<ReplyRule>, fallbacks: Vec<String>) -> Self {
        Self {
            subjects,
            intents,
            fallbacks,
        }
    }

    /// The built-in tutoring rule table.
    pub fn builtin() -> Self {
        let subjects = vec![
            ReplyRule::new(
                &["math"],
                "Math can be fun! Let's solve problems step by step. What math topic are you working on? 🔢",
            ),
            ReplyRule::new(
                &["science"],
                "Science is all around us! What scientific concept would you like to explore? 🔬",
            ),
            ReplyRule::new(
                &["english"],
                "Language is powerful! Are you working on reading, writing, or grammar? 📝",
            ),
            ReplyRule::new(
                &["history"],
                "History tells amazing stories! What time period interests you? 🏛️",
            ),
            ReplyRule::new(
                &["art"],
                "Creativity has no limits! What kind of art project are you working on? 🎨",
            ),
        ];

        let intents = vec![
            ReplyRule::new(
                &["help", "explain"],
                "I'd be happy to help! Can you tell me more about what you're working on? 🤝",
            ),
            ReplyRule::new(
                &["homework", "assignment"],
                "Let's tackle that homework together! What subject is it for? 📋",
            ),
            ReplyRule::new(
                &["test", "exam"],
                "Test preparation is important! What subject are you studying for? I can help you review! 📖",
            ),
            ReplyRule::new(
                &["difficult", "hard"],
                "Don't worry! Every expert was once a beginner. Let's work through this together! 💪",
            ),
        ];

        let fallbacks = vec![
            "That's a great question! Let me help you understand that concept better. 📚".to_string(),
            "Excellent work! You're really getting the hang of this! 🌟".to_string(),
            "Don't worry if it seems difficult at first. Learning takes practice! 💪".to_string(),
            "Let's break this down into smaller, easier steps. 🔍".to_string(),
            "I'm impressed by your curiosity! That's the key to great learning! 🗝️".to_string(),
            "Would you like me to explain that in a different way? 🤔".to_string(),
            "You're asking all the right questions! Keep it up! 🎯".to_string(),
            "That's exactly right! You've mastered this concept! 🏆".to_string(),
        ];

        Self::new(subjects, intents, fallbacks)
    }

    /// Derive the canned reply for a user input.
    ///
    /// Subjects are checked before intents; the first matching rule in each
    /// list wins. Pure and deterministic except for the fallback draw.
    pub fn derive_reply(&self, input: &str, rng: &mut dyn RandomPort) -> String {
        let lowered = input.to_lowercase();

        if let Some(rule) = self.subjects.iter().find(|r| r.matches(&lowered)) {
            return rule.response().to_string();
        }

        if let Some(rule) = self.intents.iter().find(|r| r.matches(&lowered)) {
            return rule.response().to_string();
        }

        self.fallbacks[rng.next_index(self.fallbacks.len())].clone()
    }

    pub fn subjects(&self) -> &[ReplyRule] {
        &self.subjects
    }

    pub fn intents(&self) -> &[ReplyRule] {
        &self.intents
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::builtin()
    }
}
