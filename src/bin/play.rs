//! Play Binary
//!
//! Break a hidden code at the terminal.
//!
//! Options: --seed, --rounds

use clap::Parser;
use mastermind::*;

#[derive(Parser)]
#[command(author, version, about = "Play Mastermind at the terminal", long_about = None)]
struct Args {
    /// Seed for the target stream. Omit to draw from entropy.
    #[arg(long)]
    seed: Option<u64>,
    /// Episodes to play before exiting.
    #[arg(long, default_value_t = 1)]
    rounds: usize,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random::<Seed>);
    log::info!("seed {}", seed);
    let mut env = Episode::<rand::rngs::SmallRng>::seeded(seed, Logger);
    println!(
        "{} symbols from 0..{}, {} attempts. exact pegs red, partial pegs white.",
        SIZE, VALUES, GUESS_MAX
    );
    let mut human = Human::default();
    let mut solved = 0;
    for round in 1..=args.rounds {
        let (attempts, last) = human.play(&mut env)?;
        match last.is_solved() {
            true => println!("round {}: solved in {}", round, attempts),
            false => println!("round {}: out of attempts", round),
        }
        solved += last.reward as usize;
    }
    log::info!("solved {} of {}", solved, args.rounds);
    Ok(())
}
