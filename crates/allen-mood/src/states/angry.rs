use tracing::trace;

use crate::approach::Approach;
use crate::dice::RAY_GUN_SIDES;
use crate::mood::Mood;

use super::{MoodBehavior, MoodContext, Transition};

/// Narration when Allen ends the session.
pub const RAY_GUN: &str = "Allen has had enough! He pulls out a ray gun and shoots you. Game over.";

/// Allen is angry. Only friendliness calms him, and every turn risks the
/// ray gun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AngryState;

impl MoodBehavior for AngryState {
    fn mood(&self) -> Mood {
        Mood::Angry
    }

    fn enter(&self) -> &'static str {
        "Allen's demeanor shifts abruptly, his brows furrowing and his jaw setting firm. A stormy expression takes over, signaling a brewing tempest of anger."
    }

    fn update(&self, approach: Approach, ctx: &mut MoodContext<'_>) -> Transition {
        let roll = ctx.roll_below(RAY_GUN_SIDES);
        trace!(roll, sides = RAY_GUN_SIDES, "ray gun roll");
        if roll == 0 {
            ctx.narrate(RAY_GUN);
            return Transition::Terminate;
        }

        match approach {
            Approach::Friendly => Transition::To(Mood::Neutral),
            _ => Transition::Stay,
        }
    }

    fn express(&self) -> &'static str {
        "With each word, Allen's voice grows sharper, his frustration palpable. 'Why does it have to be this way?' he demands, struggling to keep his composure."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::states::test_support::decide;

    #[test]
    fn friendliness_calms_him() {
        let (t, _, _) = decide(&AngryState, Approach::Friendly, 0, ScriptedDice::never_trigger());
        assert_eq!(t, Transition::To(Mood::Neutral));
    }

    #[test]
    fn anything_else_keeps_him_angry() {
        for approach in Approach::ALL {
            if approach == Approach::Friendly {
                continue;
            }
            let (t, _, _) = decide(&AngryState, approach, 0, ScriptedDice::never_trigger());
            assert_eq!(t, Transition::Stay, "{approach}");
        }
    }

    #[test]
    fn ray_gun_ends_the_session() {
        for approach in Approach::ALL {
            let (t, level, narration) =
                decide(&AngryState, approach, 0, ScriptedDice::always_trigger());
            assert_eq!(t, Transition::Terminate, "{approach}");
            assert_eq!(level.value(), 0);
            assert_eq!(narration, vec![RAY_GUN.to_string()]);
        }
    }
}
