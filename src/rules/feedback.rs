use super::code::Code;
use super::error::CodeError;
use super::peg::Peg;
use crate::SIZE;
use crate::VALUES;

/// The positionless answer to a guess.
///
/// Always exactly [`SIZE`] pegs, arranged as every [`Peg::Miss`], then every
/// [`Peg::Partial`], then every [`Peg::Exact`]. Only the counts carry
/// information; which positions matched is deliberately unrecoverable, like
/// the physical pegs on a real board.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Feedback([Peg; SIZE]);

impl Default for Feedback {
    /// The neutral observation: no guess made yet.
    fn default() -> Self {
        Self([Peg::Miss; SIZE])
    }
}

/// Scoring.
impl Feedback {
    /// Scores `guess` against `target` under multiset semantics.
    ///
    /// Exact matches are counted and removed from both sides first. Among the
    /// leftovers, each symbol earns `min(target count, guess count)` partial
    /// credit, so no symbol is credited more often than it occurs in either
    /// code.
    pub fn score(guess: &Code, target: &Code) -> Self {
        let mut exact = 0usize;
        let mut guessed = [0usize; VALUES];
        let mut hidden = [0usize; VALUES];
        for (g, t) in guess.symbols().iter().zip(target.symbols()) {
            if g == t {
                exact += 1;
            } else {
                guessed[g.index()] += 1;
                hidden[t.index()] += 1;
            }
        }
        let partial = guessed
            .iter()
            .zip(hidden.iter())
            .map(|(g, t)| usize::min(*g, *t))
            .sum::<usize>();
        Self::from((exact, partial))
    }
    /// Scores raw sequences, validating them at the boundary first.
    pub fn try_score(guess: &[u8], target: &[u8]) -> Result<Self, CodeError> {
        if guess.len() != target.len() {
            return Err(CodeError::ShapeMismatch {
                expected: target.len(),
                found: guess.len(),
            });
        }
        let guess = Code::try_from(guess)?;
        let target = Code::try_from(target)?;
        Ok(Self::score(&guess, &target))
    }
}

/// Public accessors.
impl Feedback {
    /// Black pegs.
    pub fn exact(&self) -> usize {
        self.count(Peg::Exact)
    }
    /// White pegs.
    pub fn partial(&self) -> usize {
        self.count(Peg::Partial)
    }
    /// Empty slots.
    pub fn misses(&self) -> usize {
        self.count(Peg::Miss)
    }
    /// True when every position matched.
    pub fn is_solved(&self) -> bool {
        self.exact() == SIZE
    }
    /// The pegs in canonical order.
    pub fn pegs(&self) -> &[Peg; SIZE] {
        &self.0
    }
    fn count(&self, peg: Peg) -> usize {
        self.0.iter().filter(|p| **p == peg).count()
    }
}

impl From<(&Code, &Code)> for Feedback {
    fn from((guess, target): (&Code, &Code)) -> Self {
        Self::score(guess, target)
    }
}

/// (exact, partial) counts, assembled canonically
impl From<(usize, usize)> for Feedback {
    fn from((exact, partial): (usize, usize)) -> Self {
        debug_assert!(exact + partial <= SIZE);
        let misses = SIZE - exact - partial;
        let mut pegs = [Peg::Miss; SIZE];
        pegs[misses..misses + partial].fill(Peg::Partial);
        pegs[misses + partial..].fill(Peg::Exact);
        Self(pegs)
    }
}

impl From<Feedback> for [u8; SIZE] {
    fn from(feedback: Feedback) -> Self {
        feedback.0.map(u8::from)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|p| write!(f, "{}", p))
    }
}
