//! Rules engine and episodic environment for Mastermind.
//!
//! A hidden [`Code`] of [`SIZE`] symbols drawn from an alphabet of [`VALUES`]
//! must be guessed within [`GUESS_MAX`] attempts. Each guess is answered with
//! positionless [`Feedback`]: how many symbols are exact, how many are present
//! but misplaced.
//!
//! - [`rules`] — symbols, codes, pegs, and the feedback scorer
//! - [`env`] — the [`Episode`] state machine behind an [`Environment`] contract
//! - [`players`] — a consistent-candidate [`Solver`] for driving episodes
pub mod env;
pub mod players;
pub mod rules;

pub use env::*;
pub use players::*;
pub use rules::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Scalar payoff of a single step. Binary: 1 on an exact solve, 0 otherwise.
pub type Reward = f32;
/// Resolved seed for the episode's random source.
pub type Seed = u64;
/// Open diagnostics map attached to every transition. Currently always empty.
pub type Info = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Alphabet size. Symbols live in `0..VALUES`.
pub const VALUES: usize = 6;
/// Code length, shared by targets, guesses, and feedback.
pub const SIZE: usize = 4;
/// Attempts permitted before the episode is exhausted.
pub const GUESS_MAX: usize = 12;
/// Distinct peg markers (miss, partial, exact).
pub const PEGS: usize = 3;

// ============================================================================
// REWARDS
// ============================================================================
/// Reward for guessing the target exactly.
pub const REWARD_SOLVED: Reward = 1.0;
/// Reward for every other step, including the one that exhausts the budget.
pub const REWARD_MISSED: Reward = 0.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
