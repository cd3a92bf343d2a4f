//! The episode state machine behind an environment-style contract.
//!
//! ## Core Types
//!
//! - [`Environment`] — the narrow `reset` / `step` / `seed` capability
//! - [`Episode`] — the one concrete implementation, owning target and attempts
//! - [`Transition`] — what a successful step hands back
//!
//! ## Collaborators
//!
//! - [`ActionSpace`] / [`ObservationSpace`] — shape and range of the contract
//! - [`Sink`] — explicit destination for [`Event`]s, injected per episode
mod environment;
mod episode;
mod error;
mod event;
mod phase;
mod sink;
mod space;
mod transition;

pub use environment::*;
pub use episode::*;
pub use error::*;
pub use event::*;
pub use phase::*;
pub use sink::*;
pub use space::*;
pub use transition::*;
