use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Number of players standing on each position.
///
/// Always sums to N and agrees with the [`Assignment`] it was derived from.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Occupancy(Vec<usize>);

impl Occupancy {
    pub fn m(&self) -> usize {
        self.0.len()
    }

    pub fn count(&self, position: Position) -> usize {
        self.0[position]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.0[position] > 0
    }

    pub fn counts(&self) -> &[usize] {
        &self.0
    }

    /// Occupied positions in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(p, _)| p)
    }

    /// Nearest occupied position strictly left of `position`.
    pub fn left_of(&self, position: Position) -> Option<Position> {
        (0..position).rev().find(|&p| self.is_occupied(p))
    }

    /// Nearest occupied position strictly right of `position`.
    pub fn right_of(&self, position: Position) -> Option<Position> {
        (position + 1..self.m()).find(|&p| self.is_occupied(p))
    }

    /// Positions with repetition, one entry per player, ascending.
    pub fn expand(&self) -> Vec<Position> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(p, &c)| std::iter::repeat_n(p, c))
            .collect()
    }

    pub(crate) fn shift(&mut self, from: Position, to: Position) {
        self.0[from] -= 1;
        self.0[to] += 1;
    }
}

impl From<(&Assignment, usize)> for Occupancy {
    fn from((assignment, m): (&Assignment, usize)) -> Self {
        let mut counts = vec![0; m];
        assignment
            .positions()
            .iter()
            .for_each(|&p| counts[p] += 1);
        Self(counts)
    }
}

impl From<Vec<usize>> for Occupancy {
    fn from(counts: Vec<usize>) -> Self {
        Self(counts)
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
