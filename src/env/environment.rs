use super::error::Error;
use super::space::ActionSpace;
use super::space::ObservationSpace;
use super::transition::Transition;
use crate::Seed;
use crate::rules::Code;
use crate::rules::Feedback;

/// Episodic reset/step contract.
///
/// Exactly the surface a driver needs: start an episode, act in it, and
/// control the random stream behind it. There is one implementor,
/// [`Episode`](super::episode::Episode).
pub trait Environment {
    /// Discards the current episode and starts a fresh one, returning the
    /// neutral observation.
    fn reset(&mut self) -> Feedback;
    /// Scores one guess. Fails without side effects on a terminal episode.
    fn step(&mut self, action: Code) -> Result<Transition, Error>;
    /// Replaces the random source. `None` draws fresh entropy. Returns the
    /// seed actually used so the run can be reproduced.
    fn seed(&mut self, seed: Option<Seed>) -> Seed;

    fn action_space(&self) -> ActionSpace {
        ActionSpace
    }
    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace
    }
}
