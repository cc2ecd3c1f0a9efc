//! Allen's moods and the shared mood level.

use serde::{Deserialize, Serialize};

/// One of Allen's six moods. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Cheerful and carefree.
    Happy,
    /// Calm and watchful. The starting mood.
    Neutral,
    /// Furious. May end the session.
    Angry,
    /// Puzzled.
    Confused,
    /// Melancholic.
    Sad,
    /// Nervous and on edge.
    Fearful,
}

impl Mood {
    /// All moods in registration order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Angry,
        Mood::Confused,
        Mood::Sad,
        Mood::Fearful,
    ];
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Happy => write!(f, "Happy"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Angry => write!(f, "Angry"),
            Self::Confused => write!(f, "Confused"),
            Self::Sad => write!(f, "Sad"),
            Self::Fearful => write!(f, "Fearful"),
        }
    }
}

/// A single mood counter shared by every state.
///
/// Conceptually spans -2 (very sad) to +2 (very happy), but the value is
/// not clamped: repeated kindness keeps pushing it up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoodLevel(i32);

impl MoodLevel {
    /// Create a mood level with the given value.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the current value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Raise the level by `by`.
    pub fn raise(&mut self, by: i32) {
        self.0 = self.0.saturating_add(by);
    }
}

impl std::fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_starts_at_zero() {
        assert_eq!(MoodLevel::default().value(), 0);
    }

    #[test]
    fn level_is_not_clamped() {
        let mut level = MoodLevel::default();
        level.raise(2);
        level.raise(2);
        assert_eq!(level.value(), 4);
    }

    #[test]
    fn level_display_is_signed() {
        assert_eq!(MoodLevel::new(2).to_string(), "+2");
        assert_eq!(MoodLevel::new(-2).to_string(), "-2");
    }

    #[test]
    fn mood_display() {
        assert_eq!(Mood::Happy.to_string(), "Happy");
        assert_eq!(Mood::Fearful.to_string(), "Fearful");
    }

    #[test]
    fn mood_serde_roundtrip() {
        let json = serde_json::to_string(&Mood::Confused).unwrap();
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mood::Confused);
    }
}
