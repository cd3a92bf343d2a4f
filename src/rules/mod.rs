//! Game primitives and the feedback scorer.
//!
//! - [`Symbol`] — one position's value in `0..VALUES`
//! - [`Code`] — a fixed-length sequence of symbols (target or guess)
//! - [`Peg`] — one feedback marker (miss, partial, exact)
//! - [`Feedback`] — the canonical, positionless answer to a guess
mod code;
mod error;
mod feedback;
mod peg;
mod symbol;

pub use code::*;
pub use error::*;
pub use feedback::*;
pub use peg::*;
pub use symbol::*;
