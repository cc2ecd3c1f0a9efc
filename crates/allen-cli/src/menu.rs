//! The per-turn menu.

use std::io::{self, Write};

use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use allen_mood::Approach;

/// Menu number for walking away.
pub const LEAVE: u32 = 7;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Options 1-6.
    Approach(Approach),
    /// Option 7.
    Leave,
}

impl MenuChoice {
    /// Parse a line of input. Anything but a number from 1 to 7 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let n: u32 = input.trim().parse().ok()?;
        if n == LEAVE {
            return Some(Self::Leave);
        }
        Approach::from_menu(n).map(Self::Approach)
    }
}

/// Draws one prompt per category each turn.
pub struct Menu {
    rng: StdRng,
}

impl Menu {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a prompt for an approach.
    pub fn pick(&mut self, approach: Approach) -> &'static str {
        let prompts = approach.prompts();
        prompts[self.rng.random_range(0..prompts.len())]
    }

    /// Write the numbered options 1-7.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for approach in Approach::ALL {
            let prompt = self.pick(approach);
            writeln!(
                out,
                "{}: {prompt} {}",
                approach.menu_number(),
                format!("({})", approach.label()).dimmed()
            )?;
        }
        writeln!(out, "{LEAVE}: Leave Allen in peace and move away.")
    }
}
