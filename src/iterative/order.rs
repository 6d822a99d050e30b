use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Order in which players are visited within one round.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PlayerOrder {
    /// Every player once, 0 through N-1.
    #[default]
    Sequential,
    /// 10·N players drawn uniformly with replacement, redrawn every round.
    Multiset,
}

impl PlayerOrder {
    /// Players to visit in the next round.
    pub fn visits<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Player> {
        match self {
            Self::Sequential => (0..n).collect(),
            Self::Multiset => (0..n * MULTISET_VISITS_PER_PLAYER)
                .map(|_| rng.random_range(0..n))
                .collect(),
        }
    }
}

impl std::fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Multiset => write!(f, "multiset"),
        }
    }
}
