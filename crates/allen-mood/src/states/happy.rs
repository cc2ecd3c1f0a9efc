use crate::approach::Approach;
use crate::mood::Mood;

use super::{MoodBehavior, MoodContext, Transition};

/// Allen is happy. Kindness and calm keep him here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HappyState;

impl MoodBehavior for HappyState {
    fn mood(&self) -> Mood {
        Mood::Happy
    }

    fn enter(&self) -> &'static str {
        "A warm, genuine smile lights up Allen's face as he greets you. His eyes sparkle with an infectious joy, reflecting a sense of contentment and well-being."
    }

    fn update(&self, approach: Approach, _ctx: &mut MoodContext<'_>) -> Transition {
        match approach {
            Approach::Aggressive => Transition::To(Mood::Neutral),
            Approach::Confused => Transition::To(Mood::Confused),
            Approach::Sad => Transition::To(Mood::Sad),
            Approach::Fearful => Transition::To(Mood::Fearful),
            Approach::Friendly | Approach::Neutral => Transition::Stay,
        }
    }

    fn express(&self) -> &'static str {
        "Allen hums a cheerful tune, his steps light and carefree. 'Life's full of wonders, don't you think?' he says with a beaming smile, inviting you to share in his joy."
    }
}
