use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Position chosen by each player, indexed by player.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Assignment(Vec<Position>);

impl Assignment {
    pub fn n(&self) -> usize {
        self.0.len()
    }

    pub fn position(&self, player: Player) -> Position {
        self.0[player]
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Occupancy over `m` positions implied by this assignment.
    pub fn occupancy(&self, m: usize) -> Occupancy {
        Occupancy::from((self, m))
    }

    /// Positions in ascending order, forgetting which player stands where.
    pub fn sorted(&self) -> Vec<Position> {
        let mut positions = self.0.clone();
        positions.sort_unstable();
        positions
    }

    pub(crate) fn set(&mut self, player: Player, position: Position) {
        self.0[player] = position;
    }

    /// Uniformly random position for each of `n` players.
    pub fn random<R: rand::Rng>(n: usize, m: usize, rng: &mut R) -> Self {
        Self((0..n).map(|_| rng.random_range(0..m)).collect())
    }
}

impl From<Vec<Position>> for Assignment {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl From<Assignment> for Vec<Position> {
    fn from(assignment: Assignment) -> Self {
        assignment.0
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({})",
            self.0
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
