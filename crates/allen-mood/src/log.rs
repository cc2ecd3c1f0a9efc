//! Chronological record of handled approaches.

use serde::{Deserialize, Serialize};

use crate::approach::Approach;
use crate::machine::Outcome;
use crate::mood::Mood;

/// One handled approach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// What the player did.
    pub approach: Approach,
    /// Mood before the turn.
    pub from: Mood,
    /// Mood after the turn.
    pub to: Mood,
    /// Whether the session carried on.
    pub outcome: Outcome,
}

impl LogEntry {
    /// Whether the turn changed Allen's mood.
    pub fn changed_mood(&self) -> bool {
        self.from != self.to
    }
}

/// A chronological log of turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodLog {
    entries: Vec<LogEntry>,
}

impl MoodLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the log.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries where the mood changed.
    pub fn transitions(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(|e| e.changed_mood())
    }

    /// Number of turns that ended in `mood`.
    pub fn visits(&self, mood: Mood) -> usize {
        self.entries.iter().filter(|e| e.to == mood).count()
    }
}
