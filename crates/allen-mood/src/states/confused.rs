use crate::approach::Approach;
use crate::mood::Mood;

use super::{MoodBehavior, MoodContext, Transition};

/// Allen is puzzled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusedState;

impl MoodBehavior for ConfusedState {
    fn mood(&self) -> Mood {
        Mood::Confused
    }

    fn enter(&self) -> &'static str {
        "Allen pauses, a look of perplexity crossing his features. He scratches his head, clearly puzzled by the situation at hand."
    }

    fn update(&self, approach: Approach, _ctx: &mut MoodContext<'_>) -> Transition {
        match approach {
            Approach::Friendly => Transition::To(Mood::Happy),
            Approach::Aggressive => Transition::To(Mood::Angry),
            Approach::Sad => Transition::To(Mood::Sad),
            Approach::Fearful => Transition::To(Mood::Fearful),
            Approach::Confused | Approach::Neutral => Transition::Stay,
        }
    }

    fn express(&self) -> &'static str {
        "'I'm not quite sure what to make of this,' Allen admits, his confusion evident as he tries to piece together the puzzle before him."
    }
}
