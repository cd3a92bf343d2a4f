//! Simulate Binary
//!
//! Runs independent episodes in parallel and reports solve statistics.
//!
//! Options: --episodes, --seed, --player

use clap::Parser;
use clap::ValueEnum;
use mastermind::*;
use rand::rngs::SmallRng;
use rayon::prelude::*;

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Solver,
    Fish,
}

#[derive(Parser)]
#[command(author, version, about = "Batch-play Mastermind episodes", long_about = None)]
struct Args {
    /// Number of episodes to play.
    #[arg(long, default_value_t = 10_000)]
    episodes: u64,
    /// Base seed; episode i uses seed + i.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Strategy::Solver)]
    player: Strategy,
}

fn episode(seed: u64, strategy: Strategy) -> Result<(usize, Transition), Error> {
    let ref mut env = Episode::<SmallRng, ()>::seeded(seed, ());
    match strategy {
        Strategy::Solver => Solver::default().play(env),
        Strategy::Fish => Fish::new(seed).play(env),
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let start = std::time::Instant::now();
    let results = (args.seed..args.seed + args.episodes)
        .into_par_iter()
        .map(|seed| episode(seed, args.player))
        .collect::<Result<Vec<_>, _>>()?;
    let mut histogram = [0usize; GUESS_MAX + 1];
    let mut solved = 0usize;
    for (attempts, last) in results.iter() {
        histogram[*attempts] += 1;
        solved += last.is_solved() as usize;
    }
    let total = results.iter().map(|(a, _)| a).sum::<usize>();
    log::info!(
        "{} episodes in {:?}: solved {:.2}%, mean attempts {:.3}",
        results.len(),
        start.elapsed(),
        100.0 * solved as f32 / results.len().max(1) as f32,
        total as f32 / results.len().max(1) as f32,
    );
    for (attempts, count) in histogram.iter().enumerate().skip(1) {
        log::info!("{:>2} attempts: {}", attempts, count);
    }
    Ok(())
}
