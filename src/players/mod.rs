//! Guessers that drive an [`Environment`](crate::env::Environment).
//!
//! ## Implementations
//!
//! - [`Fish`] — uniform random guesses, for baselines and smoke tests
//! - [`Solver`] — only ever guesses codes consistent with all feedback so far
//! - [`Human`] — interactive terminal player (requires `server` feature)
mod fish;
#[cfg(feature = "server")]
mod human;
mod player;
mod solver;

pub use fish::*;
#[cfg(feature = "server")]
pub use human::*;
pub use player::*;
pub use solver::*;
