use super::error::CodeError;
use super::symbol::Symbol;
use crate::SIZE;
use crate::VALUES;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// An ordered sequence of [`SIZE`] symbols.
///
/// Used both for the hidden target and for every guess. Position matters for
/// exact matches; repeated values matter for partial matches.
///
/// # Construction
///
/// - `TryFrom<&[u8]>` validates shape first, then symbol range
/// - `TryFrom<&str>` parses digits like `"1123"` or `"1, 1, 2, 3"`
/// - `rng.random::<Code>()` draws each position uniformly and independently
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Code([Symbol; SIZE]);

impl Code {
    /// The symbols in positional order.
    pub fn symbols(&self) -> &[Symbol; SIZE] {
        &self.0
    }
    /// Every code in the action space, in lexicographic order.
    pub fn exhaust() -> impl Iterator<Item = Self> {
        (0..VALUES.pow(SIZE as u32)).map(Self::nth)
    }
    /// The `i`th code in lexicographic order, reading `i` in base `VALUES`.
    fn nth(i: usize) -> Self {
        let mut rest = i;
        let mut symbols = [Symbol::default(); SIZE];
        for slot in symbols.iter_mut().rev() {
            *slot = Symbol::wrap(rest);
            rest /= VALUES;
        }
        Self(symbols)
    }
}

impl From<[Symbol; SIZE]> for Code {
    fn from(symbols: [Symbol; SIZE]) -> Self {
        Self(symbols)
    }
}
impl From<Code> for [u8; SIZE] {
    fn from(code: Code) -> Self {
        code.0.map(u8::from)
    }
}

/// slice boundary: shape, then range
impl TryFrom<&[u8]> for Code {
    type Error = CodeError;
    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        let raw = <&[u8; SIZE]>::try_from(raw).map_err(|_| CodeError::ShapeMismatch {
            expected: SIZE,
            found: raw.len(),
        })?;
        let mut symbols = [Symbol::default(); SIZE];
        for (slot, n) in symbols.iter_mut().zip(raw) {
            *slot = Symbol::try_from(*n)?;
        }
        Ok(Self(symbols))
    }
}
impl TryFrom<[u8; SIZE]> for Code {
    type Error = CodeError;
    fn try_from(raw: [u8; SIZE]) -> Result<Self, Self::Error> {
        Self::try_from(&raw[..])
    }
}

/// str isomorphism
impl TryFrom<&str> for Code {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let digits = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c.to_digit(10) {
                Some(d) => Ok(d as u8),
                None => Err(CodeError::NotADigit(c)),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::try_from(digits.as_slice())
    }
}

/// uniform target generation
impl Distribution<Code> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        Code([(); SIZE].map(|_| rng.random::<Symbol>()))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s))
    }
}
