use crate::approach::Approach;
use crate::mood::Mood;

use super::{MoodBehavior, MoodContext, Transition};

/// Allen is sad.
///
/// Every named feeling moves him directly. Only a neutral approach falls
/// through to the shared mood level: above 2 he cheers up, above -2 he
/// settles to neutral, otherwise he stays sad. Nothing raises the level
/// while he is sad, so in practice this settles to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SadState;

impl MoodBehavior for SadState {
    fn mood(&self) -> Mood {
        Mood::Sad
    }

    fn enter(&self) -> &'static str {
        "A shadow falls over Allen's demeanor, his shoulders slumping slightly as he lets out a deep, wistful sigh. His eyes, once bright, now carry a hint of sorrow."
    }

    fn update(&self, approach: Approach, ctx: &mut MoodContext<'_>) -> Transition {
        match approach {
            Approach::Fearful => return Transition::To(Mood::Fearful),
            Approach::Sad => return Transition::To(Mood::Sad),
            Approach::Confused => return Transition::To(Mood::Confused),
            Approach::Aggressive => return Transition::To(Mood::Angry),
            Approach::Friendly => return Transition::To(Mood::Neutral),
            Approach::Neutral => {}
        }

        let level = ctx.level().value();
        if level > 2 {
            Transition::To(Mood::Happy)
        } else if level > -2 {
            Transition::To(Mood::Neutral)
        } else {
            Transition::Stay
        }
    }

    fn express(&self) -> &'static str {
        "Allen's voice is soft, tinged with melancholy. 'Sometimes, I just feel a bit lost,' he confides, looking away to hide the vulnerability in his gaze."
    }
}
