//! The ways a player can approach Allen.
//!
//! Each approach is a category on the menu. The driver shows one prompt
//! from the category's table so the same category reads differently from
//! turn to turn.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoodError;

/// The category of a player's interaction for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    /// Warm and kind.
    Friendly,
    /// Hostile or provoking.
    Aggressive,
    /// Baffling or hard to follow.
    Confused,
    /// Sorrowful.
    Sad,
    /// Startling or threatening.
    Fearful,
    /// Quiet, calm, doing nothing in particular.
    Neutral,
}

impl Approach {
    /// All approaches in menu order.
    pub const ALL: [Approach; 6] = [
        Approach::Friendly,
        Approach::Aggressive,
        Approach::Confused,
        Approach::Sad,
        Approach::Fearful,
        Approach::Neutral,
    ];

    /// All approaches in menu order.
    pub fn all() -> &'static [Approach] {
        &Self::ALL
    }

    /// Map a menu number (1-6) to its approach.
    pub fn from_menu(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Friendly),
            2 => Some(Self::Aggressive),
            3 => Some(Self::Confused),
            4 => Some(Self::Sad),
            5 => Some(Self::Fearful),
            6 => Some(Self::Neutral),
            _ => None,
        }
    }

    /// The menu number (1-6) for this approach.
    pub fn menu_number(self) -> u32 {
        match self {
            Self::Friendly => 1,
            Self::Aggressive => 2,
            Self::Confused => 3,
            Self::Sad => 4,
            Self::Fearful => 5,
            Self::Neutral => 6,
        }
    }

    /// Hint shown next to a menu prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Aggressive => "angry",
            Self::Confused => "confused",
            Self::Sad => "sad",
            Self::Fearful => "fearful",
            Self::Neutral => "neutral",
        }
    }

    /// The prompt table for this category.
    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            Self::Friendly => &[
                "Share tales of Earth.",
                "Offer a glowing moon rock.",
                "Admire the moon's landscape together.",
                "Show a picture from your travels.",
            ],
            Self::Aggressive => &[
                "Challenge Allen's knowledge of the moon.",
                "Mock Allen for being stuck on this moon.",
                "Ignore Allen when he tries to communicate.",
                "Make a loud noise to startle Allen.",
            ],
            Self::Confused => &[
                "Speak in a language Allen doesn't understand.",
                "Give Allen an object he's never seen before.",
                "Ask Allen a complex question about human culture.",
                "Explain something using a lot of technical jargon.",
            ],
            Self::Sad => &[
                "Tell Allen about the destruction of a beautiful part of Earth.",
                "Share a personal story of loss and grief.",
                "Describe the feeling of missing a loved one.",
                "Recall a sad moment from your own past.",
            ],
            Self::Fearful => &[
                "Suddenly approach Allen from behind.",
                "Show Allen a weapon, even if you don't intend to use it.",
                "Describe a dangerous predator from Earth in vivid detail.",
                "Recount a story of a close encounter with danger.",
            ],
            Self::Neutral => &[
                "You kick moondust lightly, watching it float away in the low gravity.",
                "You silently observe Allen, focusing on his expression as he looks out into the void.",
                "You take a moment to gaze at the vast sea of stars, lost in the cosmic spectacle.",
                "You trace the outline of a distant planet with your finger, pondering its mysteries.",
            ],
        }
    }
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Friendly => write!(f, "friendly"),
            Self::Aggressive => write!(f, "aggressive"),
            Self::Confused => write!(f, "confused"),
            Self::Sad => write!(f, "sad"),
            Self::Fearful => write!(f, "fearful"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Approach {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friendly" => Ok(Self::Friendly),
            "aggressive" => Ok(Self::Aggressive),
            "confused" => Ok(Self::Confused),
            "sad" => Ok(Self::Sad),
            "fearful" => Ok(Self::Fearful),
            "neutral" => Ok(Self::Neutral),
            _ => Err(MoodError::InvalidApproach(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_are_one_through_six() {
        for (i, approach) in Approach::ALL.iter().enumerate() {
            assert_eq!(approach.menu_number(), i as u32 + 1);
            assert_eq!(Approach::from_menu(i as u32 + 1), Some(*approach));
        }
    }

    #[test]
    fn menu_out_of_range() {
        assert_eq!(Approach::from_menu(0), None);
        assert_eq!(Approach::from_menu(7), None);
        assert_eq!(Approach::from_menu(99), None);
    }

    #[test]
    fn every_category_has_four_prompts() {
        for approach in Approach::all() {
            assert_eq!(approach.prompts().len(), 4, "{approach}");
        }
    }

    #[test]
    fn aggressive_is_labelled_angry() {
        assert_eq!(Approach::Aggressive.label(), "angry");
        assert_eq!(Approach::Aggressive.to_string(), "aggressive");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Friendly".parse::<Approach>(), Ok(Approach::Friendly));
        assert_eq!(" SAD ".parse::<Approach>(), Ok(Approach::Sad));
        assert_eq!(
            "grumpy".parse::<Approach>(),
            Err(MoodError::InvalidApproach("grumpy".to_string()))
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Approach::Fearful).unwrap();
        assert_eq!(json, "\"fearful\"");
        let back: Approach = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Approach::Fearful);
    }
}
