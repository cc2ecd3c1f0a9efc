//! The mood machine.
//!
//! `MoodMachine` owns the registry of mood states, the current mood, the
//! shared mood level and the dice. Each call to
//! [`MoodMachine::handle_approach`] lets the current state decide, runs
//! the exit and enter hooks around any change, and reports whether the
//! session goes on.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::approach::Approach;
use crate::config::MoodConfig;
use crate::dice::MoodDice;
use crate::error::{MoodError, MoodResult};
use crate::log::{LogEntry, MoodLog};
use crate::mood::{Mood, MoodLevel};
use crate::registry::MoodRegistry;
use crate::states::{MoodBehavior, MoodContext, Transition};

/// The mood every session starts in.
pub const STARTING_MOOD: Mood = Mood::Neutral;

/// Whether the session continues after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Keep playing. The driver should show the current mood next.
    Continues,
    /// Allen ended the session. No further approaches are accepted.
    TerminatesSession,
}

/// The result of one handled approach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// What the player did.
    pub approach: Approach,
    /// Mood before the turn.
    pub from: Mood,
    /// Mood after the turn.
    pub to: Mood,
    /// Shared mood level after the turn.
    pub level: MoodLevel,
    /// Narration emitted during the turn, in order.
    pub narration: Vec<String>,
    /// Whether the session goes on.
    pub outcome: Outcome,
}

impl Turn {
    /// Whether the session ended on this turn.
    pub fn is_terminal(&self) -> bool {
        self.outcome == Outcome::TerminatesSession
    }
}

/// Allen's mood state machine.
#[derive(Debug)]
pub struct MoodMachine<D: MoodDice = StdRng> {
    registry: MoodRegistry,
    current: Option<Mood>,
    level: MoodLevel,
    dice: D,
    log: MoodLog,
    opening: String,
    over: bool,
}

impl MoodMachine<StdRng> {
    /// Create a machine with all six moods, seeded from the config, and
    /// enter the starting mood.
    pub fn new(config: MoodConfig) -> MoodResult<Self> {
        Self::with_dice(MoodRegistry::standard(), StdRng::seed_from_u64(config.seed))
    }
}

impl<D: MoodDice> MoodMachine<D> {
    /// Create a machine over any registry and dice, and enter the starting
    /// mood. Fails if the starting mood is not registered.
    pub fn with_dice(registry: MoodRegistry, dice: D) -> MoodResult<Self> {
        let mut machine = Self {
            registry,
            current: None,
            level: MoodLevel::default(),
            dice,
            log: MoodLog::new(),
            opening: String::new(),
            over: false,
        };
        machine.opening = machine.transition(STARTING_MOOD)?.to_string();
        debug!(moods = machine.registry.len(), "mood machine initialized");
        Ok(machine)
    }

    /// Narration from entering the starting mood.
    pub fn opening(&self) -> &str {
        &self.opening
    }

    /// The current mood.
    pub fn current_mood(&self) -> Mood {
        self.current.unwrap_or(STARTING_MOOD)
    }

    /// The shared mood level.
    pub fn mood_level(&self) -> MoodLevel {
        self.level
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Every turn handled so far.
    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    /// The registered states.
    pub fn registry(&self) -> &MoodRegistry {
        &self.registry
    }

    /// Move to `target`: exit the current state (if any), make `target`
    /// current, then enter it. Returns the entry narration.
    ///
    /// An unregistered target is rejected before anything changes.
    pub fn transition(&mut self, target: Mood) -> MoodResult<&'static str> {
        let Some(next) = self.registry.get(target).copied() else {
            return Err(MoodError::UnregisteredMood(target));
        };

        if let Some(state) = self.current.and_then(|m| self.registry.get(m)) {
            trace!(mood = %state.mood(), "exit");
            state.exit();
        }
        let from = self.current.replace(target);
        debug!(from = ?from, to = %target, "mood transition");

        trace!(mood = %target, "enter");
        Ok(next.enter())
    }

    /// Let the current mood react to an approach.
    pub fn handle_approach(&mut self, approach: Approach) -> MoodResult<Turn> {
        if self.over {
            return Err(MoodError::SessionOver);
        }

        let from = self.current_mood();
        let state = *self
            .registry
            .get(from)
            .ok_or(MoodError::UnregisteredMood(from))?;

        let mut narration = Vec::new();
        let decision = {
            let mut ctx = MoodContext::new(&mut self.level, &mut self.dice, &mut narration);
            state.update(approach, &mut ctx)
        };
        trace!(%approach, mood = %from, ?decision, "approach handled");

        let outcome = match decision {
            Transition::Stay => Outcome::Continues,
            Transition::To(target) => {
                let line = self.transition(target)?;
                narration.push(line.to_string());
                Outcome::Continues
            }
            Transition::Terminate => {
                info!(mood = %from, "session terminated");
                self.over = true;
                Outcome::TerminatesSession
            }
        };

        let to = self.current_mood();
        let turn = u32::try_from(self.log.len()).unwrap_or(u32::MAX).saturating_add(1);
        self.log.append(LogEntry {
            turn,
            approach,
            from,
            to,
            outcome,
        });

        Ok(Turn {
            approach,
            from,
            to,
            level: self.level,
            narration,
            outcome,
        })
    }

    /// Allen's monologue for the current mood. Never changes state.
    pub fn express_current_mood(&self) -> &'static str {
        self.registry
            .get(self.current_mood())
            .map_or("", |state| state.express())
    }

    /// Release every registered state and return how many were released.
    pub fn teardown(mut self) -> usize {
        self.current = None;
        let released = self.registry.clear();
        info!(released, turns = self.log.len(), "mood machine torn down");
        released
    }
}
