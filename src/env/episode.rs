use super::environment::Environment;
use super::error::Error;
use super::event::Event;
use super::phase::Phase;
use super::sink::Logger;
use super::sink::Sink;
use super::space::ActionSpace;
use super::transition::Transition;
use crate::GUESS_MAX;
use crate::Info;
use crate::REWARD_MISSED;
use crate::REWARD_SOLVED;
use crate::Seed;
use crate::rules::Code;
use crate::rules::Feedback;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One game of Mastermind, from draw to solve or exhaustion.
///
/// `Episode` owns the hidden target, the attempt counter, and the lifecycle
/// [`Phase`]. The random source `R` and event [`Sink`] `S` are injected, so
/// two episodes never share mutable state; run concurrent games on distinct
/// instances.
///
/// # Lifecycle
///
/// - [`reset`](Environment::reset) draws a target, zeroes attempts, enters `Active`
/// - [`step`](Environment::step) scores a guess and may enter `Terminal`
/// - stepping a `Terminal` episode fails with [`Error::IllegalStateTransition`]
///
/// The target is never handed back to the caller. It reaches the sink once,
/// in the [`Event::Reset`] record.
#[derive(Debug)]
pub struct Episode<R = SmallRng, S = Logger> {
    rng: R,
    sink: S,
    target: Code,
    attempts: usize,
    phase: Phase,
}

impl<R, S> Episode<R, S>
where
    R: Rng,
    S: Sink,
{
    /// Builds an episode over the given source and immediately starts it.
    pub fn new(mut rng: R, mut sink: S) -> Self {
        let target = ActionSpace.sample(&mut rng);
        sink.record(Event::Reset { target });
        Self {
            rng,
            sink,
            target,
            attempts: 0,
            phase: Phase::Active,
        }
    }
    /// Attempts spent in the current episode.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
    /// Attempts left before exhaustion.
    pub fn remaining(&self) -> usize {
        GUESS_MAX - self.attempts
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Terminal
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<R, S> Episode<R, S>
where
    R: Rng + SeedableRng,
    S: Sink,
{
    /// Builds a reproducible episode from a numeric seed.
    pub fn seeded(seed: Seed, mut sink: S) -> Self {
        sink.record(Event::Seeded { seed });
        Self::new(R::seed_from_u64(seed), sink)
    }
    /// Steps with a raw action, rejecting malformed input before any state
    /// changes.
    pub fn play(&mut self, raw: &[u8]) -> Result<Transition, Error> {
        let guess = Code::try_from(raw)?;
        self.step(guess)
    }
}

impl<R, S> Environment for Episode<R, S>
where
    R: Rng + SeedableRng,
    S: Sink,
{
    fn reset(&mut self) -> Feedback {
        self.target = self.action_space().sample(&mut self.rng);
        self.attempts = 0;
        self.phase = Phase::Active;
        self.sink.record(Event::Reset {
            target: self.target,
        });
        Feedback::default()
    }

    fn step(&mut self, guess: Code) -> Result<Transition, Error> {
        if self.phase == Phase::Terminal {
            return Err(Error::IllegalStateTransition);
        }
        self.attempts += 1;
        let observation = Feedback::score(&guess, &self.target);
        let solved = guess == self.target;
        let done = solved || self.attempts >= GUESS_MAX;
        let reward = if solved { REWARD_SOLVED } else { REWARD_MISSED };
        if done {
            self.phase = Phase::Terminal;
        }
        self.sink.record(Event::Stepped {
            attempt: self.attempts,
            guess,
            feedback: observation,
            reward,
            done,
        });
        Ok(Transition {
            observation,
            reward,
            done,
            info: Info::new(),
        })
    }

    fn seed(&mut self, seed: Option<Seed>) -> Seed {
        let seed = seed.unwrap_or_else(rand::random::<Seed>);
        self.rng = R::seed_from_u64(seed);
        self.sink.record(Event::Seeded { seed });
        seed
    }
}

#[cfg(test)]
impl<R, S> Episode<R, S> {
    /// Pins the hidden target for scripted scenarios.
    pub(crate) fn rig(&mut self, target: Code) {
        self.target = target;
    }
}
