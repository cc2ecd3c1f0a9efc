//! Mood behaviors.
//!
//! Every mood implements [`MoodBehavior`]: it narrates its entry, decides
//! the next mood from an approach, and voices itself. [`MoodState`] is the
//! tagged union the registry stores; it forwards each call to its variant.

mod angry;
mod confused;
mod fearful;
mod happy;
mod neutral;
mod sad;

pub use angry::{AngryState, RAY_GUN};
pub use confused::ConfusedState;
pub use fearful::{FRIENDLY_COMFORT, FearfulState};
pub use happy::HappyState;
pub use neutral::{ARTIFACT_FOUND, NeutralState};
pub use sad::SadState;

use crate::approach::Approach;
use crate::dice::MoodDice;
use crate::mood::{Mood, MoodLevel};

/// What a mood decided to do with an approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current mood. No hooks run.
    Stay,
    /// Move to the given mood, running exit then enter. The target may be
    /// the current mood, in which case it is re-entered.
    To(Mood),
    /// End the whole session.
    Terminate,
}

/// Mutable view of the machine handed to a mood while it decides.
pub struct MoodContext<'a> {
    level: &'a mut MoodLevel,
    dice: &'a mut dyn MoodDice,
    narration: &'a mut Vec<String>,
}

impl<'a> MoodContext<'a> {
    /// Build a context over the machine's shared level, dice and narration
    /// buffer.
    pub fn new(
        level: &'a mut MoodLevel,
        dice: &'a mut dyn MoodDice,
        narration: &'a mut Vec<String>,
    ) -> Self {
        Self {
            level,
            dice,
            narration,
        }
    }

    /// The shared mood level.
    pub fn level(&self) -> MoodLevel {
        *self.level
    }

    /// Raise the shared mood level.
    pub fn raise_level(&mut self, by: i32) {
        self.level.raise(by);
    }

    /// Roll a value in `0..sides`.
    pub fn roll_below(&mut self, sides: u32) -> u32 {
        self.dice.roll_below(sides)
    }

    /// Emit a line of narration for this turn.
    pub fn narrate(&mut self, line: impl Into<String>) {
        self.narration.push(line.into());
    }
}

/// Behavior shared by all six moods.
pub trait MoodBehavior {
    /// The mood this behavior belongs to.
    fn mood(&self) -> Mood;

    /// Called when Allen enters this mood. Returns the entry narration.
    fn enter(&self) -> &'static str;

    /// Called when Allen leaves this mood.
    fn exit(&self) {}

    /// Decide where an approach takes Allen from this mood.
    fn update(&self, approach: Approach, ctx: &mut MoodContext<'_>) -> Transition;

    /// Allen's monologue while in this mood.
    fn express(&self) -> &'static str;
}

/// A registered mood instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodState {
    /// See [`HappyState`].
    Happy(HappyState),
    /// See [`NeutralState`].
    Neutral(NeutralState),
    /// See [`AngryState`].
    Angry(AngryState),
    /// See [`ConfusedState`].
    Confused(ConfusedState),
    /// See [`SadState`].
    Sad(SadState),
    /// See [`FearfulState`].
    Fearful(FearfulState),
}

impl MoodState {
    /// The stock state for a mood.
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Happy => Self::Happy(HappyState),
            Mood::Neutral => Self::Neutral(NeutralState),
            Mood::Angry => Self::Angry(AngryState),
            Mood::Confused => Self::Confused(ConfusedState),
            Mood::Sad => Self::Sad(SadState),
            Mood::Fearful => Self::Fearful(FearfulState),
        }
    }

    fn behavior(&self) -> &dyn MoodBehavior {
        match self {
            Self::Happy(s) => s,
            Self::Neutral(s) => s,
            Self::Angry(s) => s,
            Self::Confused(s) => s,
            Self::Sad(s) => s,
            Self::Fearful(s) => s,
        }
    }
}

impl MoodBehavior for MoodState {
    fn mood(&self) -> Mood {
        self.behavior().mood()
    }

    fn enter(&self) -> &'static str {
        self.behavior().enter()
    }

    fn exit(&self) {
        self.behavior().exit();
    }

    fn update(&self, approach: Approach, ctx: &mut MoodContext<'_>) -> Transition {
        self.behavior().update(approach, ctx)
    }

    fn express(&self) -> &'static str {
        self.behavior().express()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::dice::ScriptedDice;

    /// Run one update against fresh dice and a given level, returning the
    /// decision, the resulting level and the narration.
    pub fn decide(
        state: &dyn MoodBehavior,
        approach: Approach,
        level: i32,
        mut dice: ScriptedDice,
    ) -> (Transition, MoodLevel, Vec<String>) {
        let mut level = MoodLevel::new(level);
        let mut narration = Vec::new();
        let transition = {
            let mut ctx = MoodContext::new(&mut level, &mut dice, &mut narration);
            state.update(approach, &mut ctx)
        };
        (transition, level, narration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mood_matches_mood() {
        for mood in Mood::ALL {
            assert_eq!(MoodState::for_mood(mood).mood(), mood);
        }
    }

    #[test]
    fn every_mood_has_distinct_lines() {
        let enters: std::collections::HashSet<_> = Mood::ALL
            .iter()
            .map(|m| MoodState::for_mood(*m).enter())
            .collect();
        let expresses: std::collections::HashSet<_> = Mood::ALL
            .iter()
            .map(|m| MoodState::for_mood(*m).express())
            .collect();
        assert_eq!(enters.len(), 6);
        assert_eq!(expresses.len(), 6);
    }
}
