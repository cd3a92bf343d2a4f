use crate::PEGS;
use crate::SIZE;
use crate::VALUES;
use crate::rules::Code;
use crate::rules::Peg;
use rand::Rng;

/// Every well-formed guess: [`SIZE`] positions, each in `0..VALUES`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpace;

impl ActionSpace {
    /// Number of distinct actions.
    pub fn n(&self) -> usize {
        VALUES.pow(SIZE as u32)
    }
    pub fn contains(&self, raw: &[u8]) -> bool {
        Code::try_from(raw).is_ok()
    }
    /// Uniform draw from the space; this is how targets are generated.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        rng.random::<Code>()
    }
}

/// Every feedback an episode can emit: [`SIZE`] positions over [`PEGS`] markers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ObservationSpace;

impl ObservationSpace {
    /// Number of raw observation vectors, canonical or not.
    pub fn n(&self) -> usize {
        PEGS.pow(SIZE as u32)
    }
    /// Accepts raw peg vectors, without requiring canonical order.
    pub fn contains(&self, raw: &[u8]) -> bool {
        raw.len() == SIZE && raw.iter().all(|n| Peg::try_from(*n).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Feedback;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn action_space_cardinality() {
        assert_eq!(ActionSpace.n(), 1296);
        assert_eq!(ActionSpace.n(), Code::exhaust().count());
    }

    #[test]
    fn action_space_membership() {
        assert!(ActionSpace.contains(&[0, 1, 2, 5]));
        assert!(!ActionSpace.contains(&[0, 1, 2, 6]));
        assert!(!ActionSpace.contains(&[0, 1, 2]));
    }

    #[test]
    fn samples_are_members() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..256 {
            let code = ActionSpace.sample(rng);
            assert!(ActionSpace.contains(&<[u8; SIZE]>::from(code)));
        }
    }

    #[test]
    fn observation_space_membership() {
        assert_eq!(ObservationSpace.n(), 81);
        assert!(ObservationSpace.contains(&<[u8; SIZE]>::from(Feedback::default())));
        assert!(ObservationSpace.contains(&[0, 0, 1, 2]));
        assert!(!ObservationSpace.contains(&[0, 0, 1, 3]));
        assert!(!ObservationSpace.contains(&[2, 2, 2]));
    }
}
