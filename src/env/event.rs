use crate::Reward;
use crate::Seed;
use crate::rules::Code;
use crate::rules::Feedback;

/// Structured record of one state change in an [`Episode`](super::episode::Episode).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The random source was replaced.
    Seeded { seed: Seed },
    /// A fresh target was drawn.
    Reset { target: Code },
    /// A guess was scored.
    Stepped {
        attempt: usize,
        guess: Code,
        feedback: Feedback,
        reward: Reward,
        done: bool,
    },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seeded { seed } => write!(f, "seed={}", seed),
            Self::Reset { target } => write!(f, "target={}", target),
            Self::Stepped {
                attempt,
                guess,
                feedback,
                reward,
                done,
            } => write!(
                f,
                "attempt={} guess={} feedback={} reward={} done={}",
                attempt, guess, feedback, reward, done
            ),
        }
    }
}
