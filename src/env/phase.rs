/// Lifecycle of an episode.
///
/// `reset` always enters `Active`. `step` enters `Terminal` once the target is
/// guessed or the attempt budget is spent, and nothing but `reset` leaves it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Active,
    Terminal,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}
