use crate::approach::Approach;
use crate::mood::Mood;

use super::{MoodBehavior, MoodContext, Transition};

/// How much a friendly approach raises the shared level while Allen is
/// afraid.
pub const FRIENDLY_COMFORT: i32 = 2;

/// Allen is afraid.
///
/// Friendliness doesn't move him directly; it raises the shared mood level
/// by [`FRIENDLY_COMFORT`]. Whenever no explicit transition is chosen, a
/// positive level calms him back to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FearfulState;

impl MoodBehavior for FearfulState {
    fn mood(&self) -> Mood {
        Mood::Fearful
    }

    fn enter(&self) -> &'static str {
        "Allen's eyes dart around nervously, a visible tension in his posture. He seems on edge, as if expecting something unsettling at any moment."
    }

    fn update(&self, approach: Approach, ctx: &mut MoodContext<'_>) -> Transition {
        match approach {
            Approach::Friendly => ctx.raise_level(FRIENDLY_COMFORT),
            Approach::Sad => return Transition::To(Mood::Sad),
            Approach::Neutral => return Transition::To(Mood::Neutral),
            Approach::Confused => return Transition::To(Mood::Confused),
            Approach::Aggressive => return Transition::To(Mood::Angry),
            Approach::Fearful => {}
        }

        if ctx.level().value() > 0 {
            Transition::To(Mood::Neutral)
        } else {
            Transition::Stay
        }
    }

    fn express(&self) -> &'static str {
        "Allen's movements are jittery, a clear indication of his unease. 'It's hard to shake this feeling,' he murmurs, glancing around as if expecting something to emerge from the shadows."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::states::test_support::decide;

    #[test]
    fn friendliness_raises_level_and_calms() {
        let (t, level, _) =
            decide(&FearfulState, Approach::Friendly, 0, ScriptedDice::never_trigger());
        assert_eq!(level.value(), FRIENDLY_COMFORT);
        assert_eq!(t, Transition::To(Mood::Neutral));
    }

    #[test]
    fn friendliness_from_deep_fear_is_not_enough() {
        let (t, level, _) =
            decide(&FearfulState, Approach::Friendly, -4, ScriptedDice::never_trigger());
        assert_eq!(level.value(), -2);
        assert_eq!(t, Transition::Stay);
    }

    #[test]
    fn direct_transitions() {
        for (approach, mood) in [
            (Approach::Sad, Mood::Sad),
            (Approach::Neutral, Mood::Neutral),
            (Approach::Confused, Mood::Confused),
            (Approach::Aggressive, Mood::Angry),
        ] {
            let (t, level, _) = decide(&FearfulState, approach, 0, ScriptedDice::never_trigger());
            assert_eq!(t, Transition::To(mood), "{approach}");
            assert_eq!(level.value(), 0);
        }
    }

    #[test]
    fn fearful_approach_checks_level() {
        let (t, _, _) = decide(&FearfulState, Approach::Fearful, 0, ScriptedDice::never_trigger());
        assert_eq!(t, Transition::Stay);
        let (t, _, _) = decide(&FearfulState, Approach::Fearful, 2, ScriptedDice::never_trigger());
        assert_eq!(t, Transition::To(Mood::Neutral));
    }
}
