//! Registry of mood states.

use std::collections::BTreeMap;

use crate::mood::Mood;
use crate::states::{MoodBehavior, MoodState};

/// Owns every registered mood state, keyed by mood.
#[derive(Debug, Clone, Default)]
pub struct MoodRegistry {
    states: BTreeMap<Mood, MoodState>,
}

impl MoodRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding the stock state for all six moods.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for mood in Mood::ALL {
            registry.register(MoodState::for_mood(mood));
        }
        registry
    }

    /// Register a state under its own mood, replacing any earlier one.
    /// Returns the replaced state, if any.
    pub fn register(&mut self, state: MoodState) -> Option<MoodState> {
        self.states.insert(state.mood(), state)
    }

    /// Look up the state for a mood.
    pub fn get(&self, mood: Mood) -> Option<&MoodState> {
        self.states.get(&mood)
    }

    /// Whether a mood has a registered state.
    pub fn contains(&self, mood: Mood) -> bool {
        self.states.contains_key(&mood)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no states are registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Registered moods in order.
    pub fn moods(&self) -> impl Iterator<Item = Mood> + '_ {
        self.states.keys().copied()
    }

    /// Release every state, returning how many were held.
    pub fn clear(&mut self) -> usize {
        let released = self.states.len();
        self.states.clear();
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_all_six() {
        let registry = MoodRegistry::standard();
        assert_eq!(registry.len(), 6);
        for mood in Mood::ALL {
            assert!(registry.contains(mood));
            assert_eq!(registry.get(mood).map(|s| s.mood()), Some(mood));
        }
    }

    #[test]
    fn register_replaces() {
        let mut registry = MoodRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.register(MoodState::for_mood(Mood::Sad)).is_none());
        assert!(registry.register(MoodState::for_mood(Mood::Sad)).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn missing_mood_is_none() {
        let mut registry = MoodRegistry::empty();
        registry.register(MoodState::for_mood(Mood::Neutral));
        assert!(registry.get(Mood::Angry).is_none());
        assert_eq!(registry.moods().collect::<Vec<_>>(), vec![Mood::Neutral]);
    }

    #[test]
    fn clear_releases_once() {
        let mut registry = MoodRegistry::standard();
        assert_eq!(registry.clear(), 6);
        assert_eq!(registry.clear(), 0);
    }
}
