use super::player::Player;
use crate::rules::Code;
use crate::rules::Feedback;

/// Consistent-candidate code-breaker.
///
/// Keeps every code that would have produced all feedback seen so far and
/// guesses the lexicographically first survivor. The target always survives,
/// so each guess either solves or strictly shrinks the candidate set.
#[derive(Debug, Clone)]
pub struct Solver {
    candidates: Vec<Code>,
    guesses: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            candidates: Code::exhaust().collect(),
            guesses: 0,
        }
    }
}

impl Solver {
    /// Codes still consistent with the history.
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }
    /// Opening guess: two pairs.
    fn opening() -> Code {
        Code::try_from("0011").expect("opening fits the alphabet")
    }
}

impl Player for Solver {
    fn decide(&mut self) -> Code {
        match self.guesses {
            0 => Self::opening(),
            _ => self.candidates.first().copied().unwrap_or_else(Self::opening),
        }
    }
    fn notify(&mut self, guess: Code, feedback: Feedback) {
        self.guesses += 1;
        self.candidates
            .retain(|c| Feedback::score(&guess, c) == feedback);
        log::trace!("{} candidates after {} → {}", self.candidates.len(), guess, feedback);
    }
    fn forget(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GUESS_MAX;
    use crate::env::Environment;
    use crate::env::Episode;
    use crate::env::Error;
    use crate::env::Transition;
    use rand::rngs::SmallRng;

    /// Environment with a chosen target, for exhaustive sweeps.
    struct Fixed {
        target: Code,
        attempts: usize,
    }

    impl Environment for Fixed {
        fn reset(&mut self) -> Feedback {
            self.attempts = 0;
            Feedback::default()
        }
        fn step(&mut self, guess: Code) -> Result<Transition, Error> {
            self.attempts += 1;
            let observation = Feedback::score(&guess, &self.target);
            let done = guess == self.target || self.attempts >= GUESS_MAX;
            Ok(Transition {
                observation,
                reward: if guess == self.target { 1.0 } else { 0.0 },
                done,
                info: Default::default(),
            })
        }
        fn seed(&mut self, seed: Option<u64>) -> u64 {
            seed.unwrap_or_default()
        }
    }

    #[test]
    fn opens_with_two_pairs() {
        assert_eq!(Solver::default().decide().to_string(), "0011");
    }

    #[test]
    fn feedback_prunes_candidates() {
        let mut solver = Solver::default();
        let target = Code::try_from("1234").unwrap();
        let guess = solver.decide();
        solver.notify(guess, Feedback::score(&guess, &target));
        assert!(solver.candidates().len() < Code::exhaust().count());
        assert!(solver.candidates().contains(&target));
    }

    #[test]
    fn forget_restores_full_space() {
        let mut solver = Solver::default();
        let guess = solver.decide();
        solver.notify(guess, Feedback::default());
        solver.forget();
        assert_eq!(solver.candidates().len(), Code::exhaust().count());
    }

    #[test]
    fn solves_every_target_within_budget() {
        let mut solver = Solver::default();
        for target in Code::exhaust() {
            let ref mut env = Fixed { target, attempts: 0 };
            let (attempts, last) = solver.play(env).unwrap();
            assert!(last.is_solved(), "failed on {}", target);
            assert_eq!(last.reward, 1.0);
            assert!(attempts <= GUESS_MAX);
        }
    }

    #[test]
    fn solves_seeded_episodes() {
        let mut solver = Solver::default();
        for seed in 0..16 {
            let ref mut env = Episode::<SmallRng, ()>::seeded(seed, ());
            let (_, last) = solver.play(env).unwrap();
            assert!(last.is_solved());
            assert!(env.is_done());
        }
    }
}
