//! The interactive loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use allen_mood::{MoodConfig, MoodDice, MoodMachine};

use crate::menu::{Menu, MenuChoice};

const RULE: &str = "+======================================================================================================================================================================+";

const SCENE: &str = "You encounter Allen on the alien moon. What do you do?";

const FAREWELL: &str =
    "You decide to leave Allen in peace and continue your exploration of the alien moon.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose to leave.
    Left,
    /// Input ran out.
    EndOfInput,
    /// Allen ended it.
    Terminated,
}

pub fn run(seed: u64, summary: bool) -> Result<(), String> {
    let config = MoodConfig::default().with_seed(seed);
    let mut machine =
        MoodMachine::new(config).map_err(|e| format!("failed to start session: {e}"))?;
    let mut menu = Menu::new(seed);
    debug!(seed, "session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let end = play(&mut machine, &mut menu, stdin.lock(), &mut out).map_err(|e| e.to_string())?;
    debug!(?end, turns = machine.log().len(), "session ended");

    if summary {
        crate::summary::print(&mut out, machine.log()).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())?;

    machine.teardown();
    Ok(())
}

/// Run turns until the player leaves, input ends, or Allen ends the session.
pub fn play<D, R, W>(
    machine: &mut MoodMachine<D>,
    menu: &mut Menu,
    mut input: R,
    out: &mut W,
) -> io::Result<SessionEnd>
where
    D: MoodDice,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", machine.opening().italic())?;

    let mut line = String::new();
    loop {
        writeln!(out, "{RULE}")?;
        writeln!(out, "\n{SCENE}")?;
        menu.render(out)?;
        write!(out, "Choose an option (1-7): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(SessionEnd::EndOfInput);
        }
        writeln!(out, "\n{RULE}")?;

        let approach = match MenuChoice::parse(&line) {
            Some(MenuChoice::Approach(approach)) => approach,
            Some(MenuChoice::Leave) => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(SessionEnd::Left);
            }
            None => {
                writeln!(out, "{}", "Invalid choice. Try again.".yellow())?;
                continue;
            }
        };

        let turn = machine.handle_approach(approach).map_err(io::Error::other)?;
        if turn.is_terminal() {
            for text in &turn.narration {
                writeln!(out, "{}", text.red().bold())?;
            }
            return Ok(SessionEnd::Terminated);
        }

        for text in &turn.narration {
            writeln!(out, "{}", text.italic())?;
        }
        writeln!(out, "{}", machine.express_current_mood().bold())?;
    }
}
