use crate::env::Environment;
use crate::env::Error;
use crate::env::Transition;
use crate::rules::Code;
use crate::rules::Feedback;

/// A code-breaker.
pub trait Player {
    /// Chooses the next guess.
    fn decide(&mut self) -> Code;
    /// Receives the feedback for the guess just made.
    fn notify(&mut self, guess: Code, feedback: Feedback);
    /// Drops everything learned about the previous target.
    fn forget(&mut self);

    /// Plays one fresh episode to completion, returning the final transition
    /// and the number of guesses it took.
    fn play<E>(&mut self, env: &mut E) -> Result<(usize, Transition), Error>
    where
        E: Environment,
        Self: Sized,
    {
        env.reset();
        self.forget();
        let mut attempts = 0;
        loop {
            let guess = self.decide();
            let transition = env.step(guess)?;
            attempts += 1;
            self.notify(guess, transition.observation);
            if transition.done {
                return Ok((attempts, transition));
            }
        }
    }
}
