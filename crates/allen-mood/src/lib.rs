//! Mood state machine for Allen, a lone figure stranded on an alien moon.
//!
//! Allen's mood is one of six states. Each turn the player picks an
//! [`Approach`], the current state decides where Allen's mood goes next,
//! and the machine runs the exit and enter hooks around the change. Two
//! states carry random gates: a calm Allen may stumble upon an artifact,
//! and an angry Allen may end the session for good.

pub mod approach;
pub mod config;
pub mod dice;
pub mod error;
pub mod log;
pub mod machine;
pub mod mood;
pub mod registry;
pub mod states;

pub use approach::Approach;
pub use config::MoodConfig;
pub use dice::{MoodDice, ScriptedDice};
pub use error::{MoodError, MoodResult};
pub use log::{LogEntry, MoodLog};
pub use machine::{MoodMachine, Outcome, Turn};
pub use mood::{Mood, MoodLevel};
pub use registry::MoodRegistry;
pub use states::{MoodBehavior, MoodContext, MoodState, Transition};
