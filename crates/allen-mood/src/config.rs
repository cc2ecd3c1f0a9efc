//! Configuration for a mood machine.

/// Configuration for a mood machine.
#[derive(Debug, Clone)]
pub struct MoodConfig {
    /// RNG seed for the artifact and ray gun rolls.
    pub seed: u64,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl MoodConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
