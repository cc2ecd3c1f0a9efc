//! End-of-session summary table.

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use allen_mood::{Mood, MoodLog, Outcome};

/// Write a table of every turn followed by per-mood visit counts.
pub fn print<W: Write>(out: &mut W, log: &MoodLog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", "Session Summary".bold().underline())?;

    if log.is_empty() {
        writeln!(out, "  {}", "(no turns)".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Turn", "Approach", "From", "To", "Outcome"]);

    for entry in log.entries() {
        let outcome = match entry.outcome {
            Outcome::Continues if entry.changed_mood() => "changed",
            Outcome::Continues => "unchanged",
            Outcome::TerminatesSession => "game over",
        };
        table.add_row(vec![
            entry.turn.to_string(),
            entry.approach.to_string(),
            entry.from.to_string(),
            entry.to.to_string(),
            outcome.to_string(),
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(out)?;

    let visits: Vec<String> = Mood::ALL
        .iter()
        .map(|m| (m, log.visits(*m)))
        .filter(|(_, n)| *n > 0)
        .map(|(m, n)| format!("{m} x{n}"))
        .collect();
    writeln!(
        out,
        "  {} turns, {} mood changes | {}",
        log.len(),
        log.transitions().count(),
        visits.join(", ")
    )
}
