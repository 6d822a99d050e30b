use crate::*;

/// Trial-private [`Assignment`] and [`Occupancy`], mutated only together.
///
/// Best-response search moves players around hypothetically; every move goes
/// through [`Lineup::relocate`] so the two views can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    assignment: Assignment,
    occupancy: Occupancy,
}

impl Lineup {
    pub fn new(assignment: Assignment, m: usize) -> Self {
        let occupancy = assignment.occupancy(m);
        Self {
            assignment,
            occupancy,
        }
    }

    pub fn n(&self) -> usize {
        self.assignment.n()
    }

    pub fn m(&self) -> usize {
        self.occupancy.m()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn position(&self, player: Player) -> Position {
        self.assignment.position(player)
    }

    /// Move `player` to `to`, returning where they stood before.
    pub fn relocate(&mut self, player: Player, to: Position) -> Position {
        let from = self.assignment.position(player);
        if from != to {
            self.occupancy.shift(from, to);
            self.assignment.set(player, to);
        }
        from
    }

    pub fn into_inner(self) -> (Assignment, Occupancy) {
        (self.assignment, self.occupancy)
    }
}
