//! Console driver for Allen's mood machine.

mod menu;
mod session;
mod summary;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "allen",
    about = "Meet Allen on an alien moon and find out how he takes it",
    version
)]
struct Args {
    /// RNG seed for Allen's moods and the menu prompts (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a table of every turn when the session ends
    #[arg(long)]
    summary: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so the transcript on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let seed = args.seed.unwrap_or_else(rand::random);

    if let Err(e) = session::run(seed, args.summary) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
