use super::error::CodeError;
use crate::VALUES;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// A single position's value, guaranteed to lie in `0..VALUES`.
///
/// Symbols carry no identity beyond their value. Repetition within a
/// [`Code`](super::code::Code) is allowed and counts toward scoring.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(into = "u8", try_from = "u8"))]
pub struct Symbol(u8);

impl Symbol {
    /// The digit of `n` in base `VALUES`.
    pub(super) fn wrap(n: usize) -> Self {
        Self((n % VALUES) as u8)
    }
    /// Index into per-symbol frequency tables.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// u8 isomorphism, checked on the way in
impl From<Symbol> for u8 {
    fn from(s: Symbol) -> u8 {
        s.0
    }
}
impl TryFrom<u8> for Symbol {
    type Error = CodeError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < VALUES {
            true => Ok(Self(n)),
            false => Err(CodeError::SymbolOutOfRange(n)),
        }
    }
}

/// uniform over the alphabet
impl Distribution<Symbol> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol(rng.random_range(0..VALUES as u8))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn accepts_alphabet() {
        for n in 0..VALUES as u8 {
            assert_eq!(u8::from(Symbol::try_from(n).unwrap()), n);
        }
    }

    #[test]
    fn rejects_outside_alphabet() {
        assert_eq!(
            Symbol::try_from(VALUES as u8),
            Err(CodeError::SymbolOutOfRange(VALUES as u8))
        );
        assert!(Symbol::try_from(u8::MAX).is_err());
    }

    #[test]
    fn samples_stay_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            assert!(rng.random::<Symbol>().index() < VALUES);
        }
    }

    #[test]
    fn samples_cover_alphabet() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut seen = [false; VALUES];
        for _ in 0..1000 {
            seen[rng.random::<Symbol>().index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
