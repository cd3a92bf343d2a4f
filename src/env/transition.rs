use crate::Info;
use crate::Reward;
use crate::rules::Feedback;

/// Result of one accepted step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub observation: Feedback,
    pub reward: Reward,
    pub done: bool,
    pub info: Info,
}

impl Transition {
    /// True when this step guessed the target.
    pub fn is_solved(&self) -> bool {
        self.observation.is_solved()
    }
}

impl From<Transition> for (Feedback, Reward, bool, Info) {
    fn from(t: Transition) -> Self {
        (t.observation, t.reward, t.done, t.info)
    }
}
