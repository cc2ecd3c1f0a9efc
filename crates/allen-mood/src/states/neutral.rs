use tracing::trace;

use crate::approach::Approach;
use crate::dice::ARTIFACT_SIDES;
use crate::mood::Mood;

use super::{MoodBehavior, MoodContext, Transition};

/// Narration when Allen finds an artifact.
pub const ARTIFACT_FOUND: &str =
    "Suddenly, Allen stumbles upon a mysterious lunar artifact, sparking joy and excitement.";

/// Allen is calm and looking around. He may stumble upon an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeutralState;

impl MoodBehavior for NeutralState {
    fn mood(&self) -> Mood {
        Mood::Neutral
    }

    fn enter(&self) -> &'static str {
        "Allen takes a deep breath, steadying himself as he assesses his surroundings with a thoughtful gaze."
    }

    fn update(&self, approach: Approach, ctx: &mut MoodContext<'_>) -> Transition {
        // The artifact roll happens before the approach is considered.
        let roll = ctx.roll_below(ARTIFACT_SIDES);
        trace!(roll, sides = ARTIFACT_SIDES, "artifact roll");
        if roll == 0 {
            ctx.narrate(ARTIFACT_FOUND);
            return Transition::To(Mood::Happy);
        }

        match approach {
            Approach::Friendly => Transition::To(Mood::Happy),
            Approach::Aggressive => Transition::To(Mood::Angry),
            Approach::Confused => Transition::To(Mood::Confused),
            Approach::Sad => Transition::To(Mood::Sad),
            Approach::Fearful => Transition::To(Mood::Fearful),
            Approach::Neutral => Transition::Stay,
        }
    }

    fn express(&self) -> &'static str {
        "Allen appears contemplative, responding to your presence with a measured curiosity. 'What's next?' he seems to ponder, neither anxious nor overly joyous."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::states::test_support::decide;

    #[test]
    fn follows_the_approach_without_artifact() {
        for (approach, expected) in [
            (Approach::Friendly, Transition::To(Mood::Happy)),
            (Approach::Aggressive, Transition::To(Mood::Angry)),
            (Approach::Confused, Transition::To(Mood::Confused)),
            (Approach::Sad, Transition::To(Mood::Sad)),
            (Approach::Fearful, Transition::To(Mood::Fearful)),
            (Approach::Neutral, Transition::Stay),
        ] {
            let (t, _, narration) =
                decide(&NeutralState, approach, 0, ScriptedDice::never_trigger());
            assert_eq!(t, expected, "{approach}");
            assert!(narration.is_empty());
        }
    }

    #[test]
    fn artifact_overrides_any_approach() {
        for approach in Approach::ALL {
            let (t, _, narration) =
                decide(&NeutralState, approach, 0, ScriptedDice::always_trigger());
            assert_eq!(t, Transition::To(Mood::Happy), "{approach}");
            assert_eq!(narration, vec![ARTIFACT_FOUND.to_string()]);
        }
    }

    #[test]
    fn only_a_zero_roll_finds_the_artifact() {
        let (t, _, _) = decide(
            &NeutralState,
            Approach::Aggressive,
            0,
            ScriptedDice::always(ARTIFACT_SIDES - 1),
        );
        assert_eq!(t, Transition::To(Mood::Angry));
    }
}
