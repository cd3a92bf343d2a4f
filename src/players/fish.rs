use super::player::Player;
use crate::env::ActionSpace;
use crate::rules::Code;
use crate::rules::Feedback;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Guesses uniformly at random and learns nothing.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Player for Fish {
    fn decide(&mut self) -> Code {
        ActionSpace.sample(&mut self.0)
    }
    fn notify(&mut self, _: Code, _: Feedback) {}
    fn forget(&mut self) {}
}
