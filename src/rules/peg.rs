/// One feedback marker.
///
/// Numerically encoded as `Miss = 0`, `Partial = 1`, `Exact = 2`, which is
/// also the order markers appear in a canonical [`Feedback`](super::feedback::Feedback).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(into = "u8", try_from = "u8"))]
pub enum Peg {
    /// No credit for this slot.
    #[default]
    Miss = 0,
    /// White peg: right symbol, wrong position.
    Partial = 1,
    /// Black peg: right symbol, right position.
    Exact = 2,
}

/// u8 isomorphism
impl From<Peg> for u8 {
    fn from(p: Peg) -> u8 {
        p as u8
    }
}
impl TryFrom<u8> for Peg {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Miss),
            1 => Ok(Self::Partial),
            2 => Ok(Self::Exact),
            _ => Err(format!("invalid peg {}", n)),
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for peg in [Peg::Miss, Peg::Partial, Peg::Exact] {
            assert_eq!(Peg::try_from(u8::from(peg)), Ok(peg));
        }
        assert!(Peg::try_from(3).is_err());
        assert_eq!(Peg::default(), Peg::Miss);
    }

    #[test]
    fn canonical_order() {
        assert!(Peg::Miss < Peg::Partial);
        assert!(Peg::Partial < Peg::Exact);
    }
}
